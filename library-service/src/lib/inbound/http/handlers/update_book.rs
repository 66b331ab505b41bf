use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_book::CreateBookResponseData;
use super::create_book::ParseBookRequestError;
use super::ApiError;
use super::ApiSuccess;
use crate::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::models::Title;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for replacing a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequest {
    title: String,
    author: String,
    published_year: i32,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, ParseBookRequestError> {
        let title = Title::new(self.title)?;
        if self.author.is_empty() {
            return Err(ParseBookRequestError::EmptyAuthor);
        }

        Ok(UpdateBookCommand {
            title,
            author: self.author,
            published_year: self.published_year,
        })
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<ApiSuccess<CreateBookResponseData>, ApiError> {
    let book_id = BookId::from_string(&id).map_err(BookError::from)?;
    let command = req.try_into_command()?;

    state
        .book_service
        .update_book(&book_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
