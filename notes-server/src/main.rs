use notes_auth::{JwtValidator, TokenIssuer};
use notes_server::{AppState, build_router, logger};

use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration; missing signing secret or connection
    // string refuses to start here
    let config = notes_config::Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_colored)?;

    info!("Starting notes-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    info!("Connecting to database: {}", config.database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::from_str(&config.database_url)?
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5))
                .foreign_keys(true),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/notes-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Token issuance and verification share the configured secret
    let token_issuer = Arc::new(TokenIssuer::new(
        config.jwt_secret.as_bytes(),
        config.jwt_issuer.clone(),
        config.jwt_audience.clone(),
        config.token_ttl_days,
    ));
    let jwt_validator = Arc::new(JwtValidator::with_hs256(
        config.jwt_secret.as_bytes(),
        &config.jwt_issuer,
        &config.jwt_audience,
    ));
    info!("JWT: HS256 authentication enabled");

    // Build application state
    let app_state = AppState {
        pool,
        token_issuer,
        jwt_validator,
        bcrypt_cost: config.bcrypt_cost,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                }
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
