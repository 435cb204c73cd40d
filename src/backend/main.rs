/**
 * ReqMarket Server Entry Point
 *
 * This is the main entry point for the ReqMarket backend server.
 * It loads configuration, initializes tracing, and starts the Axum HTTP
 * server. Missing required configuration (DATABASE_URL, JWT_SECRET) aborts
 * startup.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("server initialization started");

    let config = reqmarket::backend::server::config::AppConfig::from_env().map_err(|e| {
        tracing::error!("configuration error: {e}");
        e
    })?;

    let app = reqmarket::backend::server::init::create_app(config).await?;

    let port = std::env::var("SERVER_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
