use std::env;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval_secs: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PRACTICUM_TOKEN must be set")]
    MissingPracticumToken,
    #[error("TELEGRAM_TOKEN must be set")]
    MissingTelegramToken,
    #[error("TELEGRAM_CHAT_ID must be set")]
    MissingTelegramChatId,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let practicum_token =
            env::var("PRACTICUM_TOKEN").map_err(|_| ConfigError::MissingPracticumToken)?;

        let telegram_token =
            env::var("TELEGRAM_TOKEN").map_err(|_| ConfigError::MissingTelegramToken)?;

        let telegram_chat_id =
            env::var("TELEGRAM_CHAT_ID").map_err(|_| ConfigError::MissingTelegramChatId)?;

        let endpoint =
            env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval_secs,
        })
    }
}
