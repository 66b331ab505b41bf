use std::sync::Arc;

use async_trait::async_trait;

use super::errors::BookError;
use super::models::Book;
use super::models::BookId;
use super::models::CreateBookCommand;
use super::models::UpdateBookCommand;
use super::ports::BookRepository;
use super::ports::BookServicePort;

/// Concrete implementation of BookServicePort.
///
/// Thin pass-through over the repository; generic for testability.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        let book = Book {
            id: BookId::new(),
            title: command.title,
            author: command.author,
            published_year: command.published_year,
        };

        self.repository.create(book).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repository.list_all().await
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        book.title = command.title;
        book.author = command.author;
        book.published_year = command.published_year;

        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::book::models::Title;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn create(&self, book: Book) -> Result<Book, BookError>;
            async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
            async fn list_all(&self) -> Result<Vec<Book>, BookError>;
            async fn update(&self, book: Book) -> Result<Book, BookError>;
            async fn delete(&self, id: &BookId) -> Result<(), BookError>;
        }
    }

    fn test_book(id: BookId) -> Book {
        Book {
            id,
            title: Title::new("The Name of the Rose".to_string()).unwrap(),
            author: "Umberto Eco".to_string(),
            published_year: 1980,
        }
    }

    #[tokio::test]
    async fn test_create_book_assigns_id() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_create()
            .withf(|book| {
                book.title.as_str() == "The Name of the Rose"
                    && book.author == "Umberto Eco"
                    && book.published_year == 1980
            })
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository));

        let command = CreateBookCommand {
            title: Title::new("The Name of the Rose".to_string()).unwrap(),
            author: "Umberto Eco".to_string(),
            published_year: 1980,
        };

        let book = service.create_book(command).await.unwrap();
        assert_eq!(book.title.as_str(), "The Name of the Rose");
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));

        let result = service.get_book(&BookId::new()).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_book_replaces_fields() {
        let mut repository = MockTestBookRepository::new();

        let book_id = BookId::new();
        let existing = test_book(book_id);

        repository
            .expect_find_by_id()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(move |book| {
                book.id == book_id
                    && book.title.as_str() == "Foucault's Pendulum"
                    && book.published_year == 1988
            })
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository));

        let command = UpdateBookCommand {
            title: Title::new("Foucault's Pendulum".to_string()).unwrap(),
            author: "Umberto Eco".to_string(),
            published_year: 1988,
        };

        let updated = service.update_book(&book_id, command).await.unwrap();
        assert_eq!(updated.title.as_str(), "Foucault's Pendulum");
    }

    #[tokio::test]
    async fn test_update_book_not_found() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));

        let command = UpdateBookCommand {
            title: Title::new("Foucault's Pendulum".to_string()).unwrap(),
            author: "Umberto Eco".to_string(),
            published_year: 1988,
        };

        let result = service.update_book(&BookId::new(), command).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_book_not_found() {
        let mut repository = MockTestBookRepository::new();

        let book_id = BookId::new();
        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(BookError::NotFound(book_id.to_string())));

        let service = BookService::new(Arc::new(repository));

        let result = service.delete_book(&book_id).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }
}
