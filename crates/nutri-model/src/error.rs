use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown ingredient kind: {value}")]
    UnknownKind { value: String },
    #[error("empty category tag")]
    EmptyCategoryTag,
}

pub type Result<T> = std::result::Result<T, ModelError>;
