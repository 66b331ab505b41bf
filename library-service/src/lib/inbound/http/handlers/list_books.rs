use axum::extract::State;
use axum::http::StatusCode;

use super::create_book::CreateBookResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CreateBookResponseData>>, ApiError> {
    state
        .book_service
        .list_books()
        .await
        .map_err(ApiError::from)
        .map(|books| {
            let book_data: Vec<CreateBookResponseData> = books.iter().map(|b| b.into()).collect();
            ApiSuccess::new(StatusCode::OK, book_data)
        })
}
