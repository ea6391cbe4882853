/**
 * DLVault Server Entry Point
 *
 * This is the main entry point for the DLVault backend server.
 * It loads configuration, connects to PostgreSQL, runs migrations,
 * and starts the Axum HTTP server.
 */

use dlvault::server::config::{connect_pool, run_migrations};
use dlvault::server::init::create_app;
use dlvault::server::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env()?;

    // Connect and migrate before serving any requests. Both are hard
    // failures: the store is required, not an optional service.
    let pool = connect_pool(&config).await?;
    run_migrations(&pool).await?;

    let app = create_app(&config, pool);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
