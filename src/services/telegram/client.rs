use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::services::telegram::types::{SendMessageReply, SendMessageRequest, TelegramError};

const TELEGRAM_API_ROOT: &str = "https://api.telegram.org";

/// Destination for status notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

/// Telegram Bot API client
pub struct TelegramClient {
    client: Client,
    token: String,
    api_root: String,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        Self::with_api_root(token, TELEGRAM_API_ROOT.to_string())
    }

    pub fn with_api_root(token: String, api_root: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            token,
            api_root,
        }
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.api_root, self.token);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.to_string()))?;

        let status = response.status();
        let reply: Option<SendMessageReply> = response.json().await.ok();

        // The Bot API mirrors failures in the body, with a human-readable
        // description alongside the non-2xx status.
        match reply {
            Some(reply) if reply.ok => Ok(()),
            Some(reply) => Err(TelegramError::Api(
                reply
                    .description
                    .unwrap_or_else(|| format!("sendMessage rejected with status {status}")),
            )),
            None if status.is_success() => Ok(()),
            None => Err(TelegramError::Api(format!(
                "sendMessage rejected with status {status}"
            ))),
        }
    }
}
