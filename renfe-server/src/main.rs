use renfe_server::web::create_router;
use tracing_subscriber::EnvFilter;

/// Default bind address when LISTEN_ADDR is not set.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let app = create_router();

    tracing::info!(%addr, "train listing parser listening");
    tracing::info!("  GET  /health         - Health check");
    tracing::info!("  POST /listing/parse  - Parse results markup into train offers");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
