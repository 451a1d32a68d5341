//! Fan-out of one alert message to every enabled channel.

use crate::channel::AlertChannel;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

/// Sends a formatted alert through every enabled channel.
///
/// Channels are attempted concurrently and independently: a failing channel
/// is logged with its identity and reason, never blocks its siblings, and
/// never surfaces to the caller.
pub struct AlertDispatcher {
    channels: Vec<Arc<dyn AlertChannel>>,
}

impl AlertDispatcher {
    pub fn new(channels: Vec<Arc<dyn AlertChannel>>) -> Self {
        Self { channels }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Make one delivery attempt per channel. No retries.
    pub async fn dispatch(&self, message: &str) {
        let attempts = self.channels.iter().map(|channel| {
            let channel = Arc::clone(channel);
            async move {
                match channel.send(message).await {
                    Ok(()) => info!(channel = channel.name(), "alert sent"),
                    Err(e) => {
                        error!(channel = channel.name(), error = %e, "alert delivery failed")
                    }
                }
            }
        });
        join_all(attempts).await;
    }
}
