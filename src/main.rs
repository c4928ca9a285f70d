/**
 * Groovebox Server Entry Point
 *
 * Loads environment configuration, initializes tracing, and serves the
 * Axum application.
 */

use groovebox::server::config::AppConfig;
use groovebox::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = create_app(config).await?;

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
