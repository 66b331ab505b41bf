use axum::extract::State;
use axum::http::StatusCode;

use super::get_user::GetUserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<GetUserResponseData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            let user_data: Vec<GetUserResponseData> = users.iter().map(|u| u.into()).collect();
            ApiSuccess::new(StatusCode::OK, user_data)
        })
}
