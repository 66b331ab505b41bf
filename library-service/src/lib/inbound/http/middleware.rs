use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity through the request.
///
/// Attached by the guard after token validation and dropped with the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Guard middleware for protected routes.
///
/// Extracts the bearer token, validates it, and attaches the authenticated
/// identity to the request. Every rejection - missing header, wrong scheme,
/// malformed, forged, or expired token - produces the same 401 response; the
/// specific cause is only logged. The guard never consults the user store, so
/// a token outlives changes to the credential record it was issued for.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        unauthorized()
    })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token validation failed");
        unauthorized()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(reason = %e, "Token subject is not a valid user ID");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid or missing authentication token".to_string()).into_response()
}
