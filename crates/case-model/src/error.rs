use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("expected an array of records or an object with a `cases` array, found {found}")]
    UnexpectedDocument { found: &'static str },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
