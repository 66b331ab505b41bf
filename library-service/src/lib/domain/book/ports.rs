use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a new book.
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Retrieve book by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Retrieve all books.
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Replace an existing book's fields.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update_book(&self, id: &BookId, command: UpdateBookCommand)
        -> Result<Book, BookError>;

    /// Delete existing book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist new book to storage.
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve book by identifier.
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve all books from storage.
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    /// Update existing book in storage.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove book from storage.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
