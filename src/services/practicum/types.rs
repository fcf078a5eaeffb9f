#[derive(Debug, thiserror::Error)]
pub enum PracticumError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("endpoint returned status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}
