use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;

/// In-memory book store backed by a lock-protected vector.
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;
        books.push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let books = self.books.read().await;
        Ok(books.clone())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;

        let position = books
            .iter()
            .position(|b| b.id == book.id)
            .ok_or(BookError::NotFound(book.id.to_string()))?;

        books[position] = book.clone();
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let mut books = self.books.write().await;

        let position = books
            .iter()
            .position(|b| b.id == *id)
            .ok_or(BookError::NotFound(id.to_string()))?;

        books.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::models::Title;

    fn test_book(title: &str) -> Book {
        Book {
            id: BookId::new(),
            title: Title::new(title.to_string()).unwrap(),
            author: "Umberto Eco".to_string(),
            published_year: 1980,
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let repository = InMemoryBookRepository::new();

        repository.create(test_book("First")).await.unwrap();
        repository.create(test_book("Second")).await.unwrap();

        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repository = InMemoryBookRepository::new();
        let book = repository.create(test_book("First")).await.unwrap();

        let mut updated = book.clone();
        updated.published_year = 1988;
        repository.update(updated).await.unwrap();

        let found = repository.find_by_id(&book.id).await.unwrap().unwrap();
        assert_eq!(found.published_year, 1988);
    }

    #[tokio::test]
    async fn test_delete_missing_book() {
        let repository = InMemoryBookRepository::new();

        let result = repository.delete(&BookId::new()).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }
}
