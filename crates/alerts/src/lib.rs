//! Alert delivery for the fare monitor.
//!
//! This crate provides:
//! - The `AlertChannel` transport abstraction
//! - Twilio SMS and Telegram channel implementations
//! - A dispatcher that fans one message out to every enabled channel
//! - Deal and daily-summary message formatting

pub mod channel;
pub mod dispatcher;
pub mod message;
pub mod sms;
pub mod telegram;

pub use channel::{AlertChannel, ChannelError};
pub use dispatcher::AlertDispatcher;
pub use message::{format_daily_summary, format_deal_message};
pub use sms::{SmsChannel, SmsConfig};
pub use telegram::{TelegramChannel, TelegramConfig};
