use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
