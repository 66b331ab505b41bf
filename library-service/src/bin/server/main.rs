use std::sync::Arc;

use auth::Authenticator;
use library_service::config::Config;
use library_service::domain::book::service::BookService;
use library_service::domain::user::service::UserService;
use library_service::inbound::http::router::create_router;
use library_service::outbound::repositories::InMemoryBookRepository;
use library_service::outbound::repositories::InMemoryUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "library-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let book_repository = Arc::new(InMemoryBookRepository::new());

    let user_service = Arc::new(UserService::new(user_repository));
    let book_service = Arc::new(BookService::new(book_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, book_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
