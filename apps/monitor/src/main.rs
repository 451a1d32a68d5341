//! farewatch, a Southwest fare monitor.
//!
//! Polls the booking search on a fixed interval, tracks the lowest fare per
//! leg, and alerts over SMS and Telegram on deals and daily summaries.

mod config;
mod dashboard;

use clap::Parser;
use config::Args;
use dashboard::LogDashboard;
use farewatch_alerts::{
    AlertChannel, AlertDispatcher, SmsChannel, SmsConfig, TelegramChannel, TelegramConfig,
};
use farewatch_core::format_fare;
use farewatch_engine::FareMonitor;
use farewatch_source::SouthwestSource;
use std::sync::Arc;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Build every channel with complete environment configuration.
fn build_channels() -> Vec<Arc<dyn AlertChannel>> {
    let mut channels: Vec<Arc<dyn AlertChannel>> = Vec::new();

    match SmsConfig::from_env() {
        Some(config) => channels.push(Arc::new(SmsChannel::new(config))),
        None => info!("SMS channel disabled (Twilio environment not configured)"),
    }

    match TelegramConfig::from_env() {
        Some(config) => channels.push(Arc::new(TelegramChannel::new(config))),
        None => info!("Telegram channel disabled (bot environment not configured)"),
    }

    channels
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging(&args.log_level);

    let query = args.fare_query();
    let config = args.monitor_config();

    info!("Fare monitor starting...");
    info!("  Itinerary: {}", query);
    info!("  Fare type: {:?}", query.mode);
    info!("  Interval: {} minutes", config.interval_minutes);
    if let Some(price) = config.threshold.individual {
        info!("  Individual deal price: {}", format_fare(price, query.mode));
    }
    if let Some(price) = config.threshold.combined {
        info!("  Total deal price: {}", format_fare(price, query.mode));
    }
    if let Some(at) = config.daily_update_at {
        info!("  Daily update at: {}", at.format("%H:%M"));
    }

    let channels = build_channels();
    let names: Vec<&str> = channels.iter().map(|c| c.name()).collect();
    info!(
        "  Alert channels: {}",
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    );
    if channels.is_empty() && config.threshold.is_configured() {
        warn!("deal thresholds set but no alert channel is configured");
    }
    let dispatcher = Arc::new(AlertDispatcher::new(channels));

    let source = match SouthwestSource::new() {
        Ok(source) => Arc::new(source),
        Err(e) => {
            error!(error = %e, "failed to build fare source");
            return;
        }
    };
    let sink = Arc::new(LogDashboard::new(query.mode));

    let monitor = FareMonitor::new(query, config, source, sink, dispatcher);

    tokio::select! {
        _ = monitor.run() => {}
        _ = tokio::signal::ctrl_c() => warn!("interrupt received, shutting down"),
    }

    info!("Fare monitor stopped");
}
