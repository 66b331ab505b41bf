use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Book with id {0} not found")]
    NotFound(String),
}
