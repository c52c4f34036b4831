use appsynex::appsynex_config::ServerConfig;
use appsynex::logging::init_tracing;
use appsynex::metrics::{init_metrics, metrics_app};
use appsynex::router::init_router;
use appsynex::state::init_app_state;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize file logging: {err}");
    }

    let state = init_app_state();
    let mut app = init_router(state);

    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
        info!("Prometheus metrics available at /metrics");
    }

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr).await?;
    info!(addr = %server_config.bind_addr, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}
