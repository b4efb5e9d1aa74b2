use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sort option: {0} (expected one of date-desc, date-asc, tracks-desc, tracks-asc, plays-desc, plays-asc)")]
    InvalidSortOption(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD or YYYY.MM.DD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
