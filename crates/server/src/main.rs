//! Folio server entry point.

use std::sync::Arc;

use folio_api::{middleware::AppState, router};
use folio_common::Config;
use folio_core::{
    CoffeeChatService, CommentService, ContactService, EmailService, ForumService,
    GuestMessageService, SessionService,
};
use folio_db::repositories::{
    AdminSessionRepository, CoffeeChatRepository, CommentRepository, ContactRepository,
    ForumRepository, GuestMessageRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; real deployments configure through the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting folio server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = folio_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    folio_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let comment_repo = CommentRepository::new(Arc::clone(&db));
    let forum_repo = ForumRepository::new(Arc::clone(&db));
    let contact_repo = ContactRepository::new(Arc::clone(&db));
    let coffee_repo = CoffeeChatRepository::new(Arc::clone(&db));
    let guest_message_repo = GuestMessageRepository::new(Arc::clone(&db));
    let session_repo = AdminSessionRepository::new(Arc::clone(&db));

    // Initialize services
    let email_service = EmailService::new(config.mail.clone(), config.server.url.clone());
    if email_service.is_enabled() {
        info!("Outbound mail enabled");
    } else {
        info!("Outbound mail not configured, notifications will be skipped");
    }

    let state = AppState {
        comment_service: CommentService::new(comment_repo),
        forum_service: ForumService::new(forum_repo),
        contact_service: ContactService::new(contact_repo, email_service.clone()),
        coffee_service: CoffeeChatService::new(coffee_repo),
        guest_message_service: GuestMessageService::new(guest_message_repo, email_service),
        session_service: SessionService::new(session_repo, config.admin.password.clone()),
    };

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server with graceful shutdown
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
