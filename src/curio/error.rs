use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurioError {
    #[error("No resource with id: {0}")]
    UnknownResource(String),
    #[error("No learning path with id: {0}")]
    UnknownPath(String),
    #[error("Catalog error: {0}")]
    Catalog(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CurioError>;
