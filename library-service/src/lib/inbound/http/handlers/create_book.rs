use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::book::errors::TitleError;
use crate::domain::book::models::Book;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Title;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<CreateBookResponseData>, ApiError> {
    state
        .book_service
        .create_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for creating a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    published_year: i32,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseBookRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] TitleError),

    #[error("Author cannot be empty")]
    EmptyAuthor,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, ParseBookRequestError> {
        let title = Title::new(self.title)?;
        if self.author.is_empty() {
            return Err(ParseBookRequestError::EmptyAuthor);
        }

        Ok(CreateBookCommand {
            title,
            author: self.author,
            published_year: self.published_year,
        })
    }
}

impl From<ParseBookRequestError> for ApiError {
    fn from(err: ParseBookRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateBookResponseData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl From<&Book> for CreateBookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author.clone(),
            published_year: book.published_year,
        }
    }
}
