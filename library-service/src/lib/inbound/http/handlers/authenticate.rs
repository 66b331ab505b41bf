use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Login endpoint.
///
/// The unknown-email and wrong-password branches collapse to the same
/// response so callers cannot enumerate registered addresses.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    // Parse and validate email
    let email = EmailAddress::new(body.email).map_err(|_| invalid_credentials())?;

    // Look up the credential record
    let user = state
        .user_service
        .get_user_by_email(email.as_str())
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => invalid_credentials(),
            _ => ApiError::from(e),
        })?;

    // Verify password and issue the access token
    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, user.id, user.email.as_str())
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => invalid_credentials(),
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: result.access_token,
        },
    ))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}
