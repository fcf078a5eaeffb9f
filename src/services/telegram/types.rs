use serde::{Deserialize, Serialize};

/// Body of a Bot API sendMessage call.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// The subset of the Bot API reply the client inspects.
#[derive(Debug, Deserialize)]
pub struct SendMessageReply {
    pub ok: bool,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Bot API error: {0}")]
    Api(String),
}
