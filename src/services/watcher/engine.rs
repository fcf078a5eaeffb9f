use std::sync::Arc;
use tokio::time::{interval, Duration};

use crate::config::environment::Config;
use crate::modules::homework::model::parse_status;
use crate::modules::homework::schema::latest_homework;
use crate::services::practicum::client::HomeworkSource;
use crate::services::telegram::client::Notifier;
use crate::services::watcher::types::CycleError;

/// The poll/diff/notify loop: fetch the latest homework status, compare the
/// derived message with the last one sent, and notify the chat on change.
pub struct WatcherEngine {
    source: Arc<dyn HomeworkSource>,
    notifier: Arc<dyn Notifier>,
    chat_id: String,
    poll_interval: Duration,
    // Lower bound of the fetch window. Fixed at the origin: the API then
    // returns the full history with the newest record first, and the
    // message diff below suppresses duplicates.
    from_date: i64,
    last_message: Option<String>,
}

impl WatcherEngine {
    pub fn new(
        config: &Config,
        source: Arc<dyn HomeworkSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            notifier,
            chat_id: config.telegram_chat_id.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            from_date: 0,
            last_message: None,
        }
    }

    /// Main watch loop - runs continuously until the process is killed.
    pub async fn run(mut self) {
        tracing::info!(
            "Homework watcher started, polling every {}s",
            self.poll_interval.as_secs()
        );
        let mut tick = interval(self.poll_interval);

        loop {
            tick.tick().await;
            self.cycle().await;
        }
    }

    /// One fetch/validate/format/compare/notify pass.
    pub async fn cycle(&mut self) {
        let message = match self.derive_message().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Cycle failed: {e}");
                e.user_message()
            }
        };

        if self.last_message.as_deref() == Some(message.as_str()) {
            tracing::debug!("Status unchanged, nothing to send");
            return;
        }

        // Best effort: a failed delivery is logged and not retried, and the
        // message still counts as seen so the next cycle stays quiet.
        match self.notifier.notify(&self.chat_id, &message).await {
            Ok(()) => tracing::debug!("Sent notification: {message}"),
            Err(e) => tracing::error!("Failed to deliver notification: {e}"),
        }
        self.last_message = Some(message);
    }

    async fn derive_message(&self) -> Result<String, CycleError> {
        let payload = self.source.fetch_statuses(self.from_date).await?;
        let record = latest_homework(&payload)?;
        Ok(parse_status(record)?)
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}
