use dotenvy::dotenv;
use hello_service::config::Settings;
use hello_service::observability::init_tracing;
use hello_service::startup::Application;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing("info");

    let settings = Settings::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(&settings).await.map_err(|e| {
        tracing::error!("Failed to start server: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    info!(
        "Starting {} v{} on port {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        app.port()
    );
    app.run_until_stopped().await?;

    Ok(())
}
