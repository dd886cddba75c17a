//! Outbound SMS transport.
//!
//! The sender is injected as a trait object so the workflow never knows
//! which carrier is behind it. When credentials are not configured the
//! disabled sender logs the notice and reports success.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::config::SmsConfig;
use crate::core::error::{AppError, Result};

#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<()>;
}

/// Twilio Messages API client
pub struct TwilioSmsSender {
    http: Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioSmsSender {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            http: Client::new(),
            account_sid,
            auth_token,
            from_number,
        }
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let mut form_body: HashMap<&str, &str> = HashMap::new();
        form_body.insert("To", to);
        form_body.insert("From", &self.from_number);
        form_body.insert("Body", body);

        let response = self
            .http
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form_body)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("SMS request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "SMS carrier returned {}: {}",
                status, error_body
            )));
        }

        tracing::info!("SMS sent to {}", to);
        Ok(())
    }
}

/// Sender used when no SMS credentials are configured
pub struct DisabledSmsSender;

#[async_trait]
impl SmsSender for DisabledSmsSender {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        tracing::info!("SMS transport disabled; dropping notice to {}: {}", to, body);
        Ok(())
    }
}

/// Build a sender from config: Twilio when fully configured, disabled otherwise
pub fn sender_from_config(config: &SmsConfig) -> Arc<dyn SmsSender> {
    match (&config.account_sid, &config.auth_token, &config.from_number) {
        (Some(sid), Some(token), Some(from)) => Arc::new(TwilioSmsSender::new(
            sid.clone(),
            token.clone(),
            from.clone(),
        )),
        _ => Arc::new(DisabledSmsSender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sender_accepts_notice() {
        let sender = DisabledSmsSender;
        tokio_test::block_on(async {
            assert!(sender.send("+639171234567", "test notice").await.is_ok());
        });
    }

    #[test]
    fn test_sender_from_partial_config_is_disabled() {
        let config = SmsConfig {
            account_sid: Some("AC123".to_string()),
            auth_token: None,
            from_number: None,
        };
        // No panic and no network client constructed for partial credentials
        let _sender = sender_from_config(&config);
    }
}
