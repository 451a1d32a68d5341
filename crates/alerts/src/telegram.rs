//! Telegram chat-bot channel.

use crate::channel::{AlertChannel, ChannelError};
use async_trait::async_trait;
use teloxide::prelude::*;

/// Telegram bot token and destination chat.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Read Telegram settings from the environment.
    ///
    /// Uses TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID; returns `None` when
    /// either is missing or the chat id is not numeric.
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?.parse().ok()?;
        Some(Self { bot_token, chat_id })
    }
}

/// Sends alert messages to a fixed Telegram chat.
pub struct TelegramChannel {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramChannel {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            bot: Bot::new(config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl AlertChannel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, message: &str) -> Result<(), ChannelError> {
        self.bot.send_message(self.chat_id, message).await?;
        Ok(())
    }
}
