use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table not found: {file}")]
    NotFound { file: String },

    #[error("table read failed: {0}")]
    Io(#[from] std::io::Error),
}
