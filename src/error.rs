use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Validation failed for field '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Data file {path} is corrupt: {source}")]
    CorruptDataFile {
        path: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JotterError>;
