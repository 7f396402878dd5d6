use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth_service::config::Config;
use auth_service::domain::staff::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::MockStaffDirectory;
use auth_service::outbound::repositories::DEFAULT_PASSWORD;
use axum::http::HeaderValue;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let token_ttl = config.token_ttl()?;

    tracing::info!(
        port = config.port,
        jwt_expires_in = %config.jwt_expires_in,
        cors_origin = %config.cors_origin,
        hash_cost = config.hash_cost,
        "Configuration loaded"
    );

    // Seeding finishes before the listener binds, so no login can race it
    let password_hasher = PasswordHasher::with_cost(config.hash_cost)?;
    let directory = MockStaffDirectory::seed(&password_hasher, DEFAULT_PASSWORD)?;
    tracing::info!(
        members = directory.members().len(),
        "Staff directory seeded"
    );
    log_available_users(&directory);

    let authenticator = Arc::new(Authenticator::with_hasher(
        config.jwt_secret.as_bytes(),
        password_hasher,
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(directory),
        authenticator,
        token_ttl,
    ));

    let cors_origin = HeaderValue::from_str(&config.cors_origin)?;

    let http_address = format!("0.0.0.0:{}", config.port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, cors_origin);

    match axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        Ok(()) => tracing::info!("Server exited successfully"),
        Err(e) => tracing::error!(error = %e, "Server error"),
    };

    Ok(())
}

fn log_available_users(directory: &MockStaffDirectory) {
    tracing::info!(password = DEFAULT_PASSWORD, "Mock users share one password");

    for member in directory.members() {
        tracing::info!(
            email = %member.email,
            staff_id = %member.staff_id,
            role = %member.role,
            "Available user"
        );
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
