use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_book::create_book;
use super::handlers::create_user::create_user;
use super::handlers::delete_book::delete_book;
use super::handlers::delete_user::delete_user;
use super::handlers::get_book::get_book;
use super::handlers::get_user::get_user;
use super::handlers::list_books::list_books;
use super::handlers::list_users::list_users;
use super::handlers::update_book::update_book;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::service::BookService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::book::InMemoryBookRepository;
use crate::outbound::repositories::user::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub book_service: Arc<BookService<InMemoryBookRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<InMemoryUserRepository>>,
    book_service: Arc<BookService<InMemoryBookRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        book_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth", post(authenticate))
        .route("/api/users", post(create_user));

    let protected_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/users/:user_id", put(update_user))
        .route("/api/users/:user_id", delete(delete_user))
        .route("/api/books", get(list_books))
        .route("/api/books", post(create_book))
        .route("/api/books/:book_id", get(get_book))
        .route("/api/books/:book_id", put(update_book))
        .route("/api/books/:book_id", delete(delete_book))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
