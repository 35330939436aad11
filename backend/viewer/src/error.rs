use feed::FeedError;
use indicatif::style::TemplateError;
use menu::SelectionError;
use thiserror::Error;

pub const FETCH_FAILED_MESSAGE: &str = "Error loading menu. Please refresh the page.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load menu: {0}")]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No station named {0}")]
    UnknownStation(String),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid progress template: {0}")]
    Template(#[from] TemplateError),
}

impl AppError {
    /// Whether the session can carry on after showing this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Selection(_) | AppError::UnknownCommand(_) | AppError::UnknownStation(_)
        )
    }

    /// What the user sees. Fetch failures collapse to one static message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Feed(_) => FETCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
