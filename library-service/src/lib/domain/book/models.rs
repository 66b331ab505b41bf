use std::fmt;

use uuid::Uuid;

use crate::book::errors::BookIdError;
use crate::book::errors::TitleError;

/// Book unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book aggregate entity.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: Title,
    pub author: String,
    pub published_year: i32,
}

/// Book title value object with validation.
///
/// Ensures title is non-empty and within 200 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated book title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty string
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        if title.is_empty() {
            Err(TitleError::Empty)
        } else if title.len() > Self::MAX_LENGTH {
            Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            })
        } else {
            Ok(Self(title))
        }
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new book with domain types
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: Title,
    pub author: String,
    pub published_year: i32,
}

/// Command to fully replace an existing book's fields.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub title: Title,
    pub author: String,
    pub published_year: i32,
}
