use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use homework_watcher::config::environment::Config;
use homework_watcher::services::practicum::{HomeworkSource, PracticumError};
use homework_watcher::services::telegram::{Notifier, TelegramError};

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        practicum_token: "practicum-token".to_string(),
        telegram_token: "telegram-token".to_string(),
        telegram_chat_id: "424242".to_string(),
        endpoint: "http://localhost:9/api/user_api/homework_statuses/".to_string(),
        poll_interval_secs: 600,
    }
}

#[allow(dead_code)]
pub fn payload_with(name: &str, status: &str) -> Value {
    json!({
        "homeworks": [{ "homework_name": name, "status": status }],
        "current_date": 1_700_000_000,
    })
}

/// Replays a fixed sequence of fetch results, one per cycle.
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Result<Value, PracticumError>>>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new(replies: Vec<Result<Value, PracticumError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch_statuses(&self, _from_date: i64) -> Result<Value, PracticumError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PracticumError::Http("script exhausted".to_string())))
    }
}

/// Records every delivery attempt; optionally fails them all.
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail_delivery: bool,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_delivery: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_delivery: true,
        }
    }

    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.to_string(), text.to_string()));
        if self.fail_delivery {
            Err(TelegramError::Http("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}
