use thiserror::Error;

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("unknown action id: {0}")]
    MissingAction(String),

    #[error("action '{0}' is not an action set")]
    NotAnActionSet(String),

    #[error("invalid step: {0}")]
    InvalidStep(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TutorError>;
