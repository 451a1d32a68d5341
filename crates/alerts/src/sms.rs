//! SMS channel backed by the Twilio REST API.

use crate::channel::{AlertChannel, ChannelError};
use async_trait::async_trait;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio credentials and phone numbers.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sending number, E.164 format.
    pub from: String,
    /// Receiving number, E.164 format.
    pub to: String,
}

impl SmsConfig {
    /// Read Twilio settings from the environment.
    ///
    /// Uses TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, TWILIO_FROM and TWILIO_TO;
    /// returns `None` when any of them is missing.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok()?,
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok()?,
            from: std::env::var("TWILIO_FROM").ok()?,
            to: std::env::var("TWILIO_TO").ok()?,
        })
    }
}

/// Sends alert messages as text messages through Twilio.
pub struct SmsChannel {
    http: reqwest::Client,
    config: SmsConfig,
}

impl SmsChannel {
    pub fn new(config: SmsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        )
    }
}

#[async_trait]
impl AlertChannel for SmsChannel {
    fn name(&self) -> &'static str {
        "sms"
    }

    async fn send(&self, message: &str) -> Result<(), ChannelError> {
        let response = self
            .http
            .post(self.endpoint())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("From", self.config.from.as_str()),
                ("To", self.config.to.as_str()),
                ("Body", message),
            ])
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}
