use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::homework::schema::HomeworkError;

/// Review states the homework API is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub fn from_api(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Localized verdict texts shown to the user. Fixed data, kept verbatim.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One homework entry from a validated API reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: ReviewStatus,
}

impl HomeworkRecord {
    pub fn from_value(record: &Value) -> Result<Self, HomeworkError> {
        let homework_name = record
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(HomeworkError::MissingField("homework_name"))?;

        let raw_status = record
            .get("status")
            .ok_or(HomeworkError::MissingField("status"))?;

        let status = raw_status
            .as_str()
            .and_then(ReviewStatus::from_api)
            .ok_or_else(|| HomeworkError::UnknownStatus(render_status(raw_status)))?;

        Ok(Self {
            homework_name: homework_name.to_string(),
            status,
        })
    }

    /// The exact sentence delivered to the chat when the status changes.
    pub fn status_line(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}

/// Derive the notification text for one raw homework record.
pub fn parse_status(record: &Value) -> Result<String, HomeworkError> {
    HomeworkRecord::from_value(record).map(|record| record.status_line())
}

fn render_status(raw: &Value) -> String {
    match raw.as_str() {
        Some(text) => text.to_string(),
        None => raw.to_string(),
    }
}
