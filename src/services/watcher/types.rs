use crate::modules::homework::schema::HomeworkError;
use crate::services::practicum::types::PracticumError;

/// Everything that can go wrong inside one poll cycle. Cycle failures are
/// values, never panics: the loop converts them into a chat message and
/// keeps running.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("failed to reach the homework API: {0}")]
    Transport(#[from] PracticumError),
    #[error(transparent)]
    Review(#[from] HomeworkError),
}

impl CycleError {
    /// Localized failure text delivered to the chat instead of a status line.
    pub fn user_message(&self) -> String {
        format!("Сбой в работе программы: {self}")
    }
}
