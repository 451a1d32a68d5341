//! Notification channel abstraction.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    #[error("rejected: {0}")]
    Rejected(String),
}

/// One notification transport.
///
/// A channel makes exactly one delivery attempt per `send` call and reports
/// the outcome; retries and failure isolation live in the dispatcher.
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Short channel identity used in logs.
    fn name(&self) -> &'static str;

    /// Attempt one delivery of `message`.
    async fn send(&self, message: &str) -> Result<(), ChannelError>;
}
