use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use ui_lib::{config::Settings, ws_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration; the subscriber is not up yet, so the
    // fallback announces itself on stdout
    let settings = Settings::load().or_else(|_| {
        println!("Trying to load config from config/default.toml");
        Settings::load_from("config/default.toml")
    })?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let bind_addr = settings.bind_addr;

    // Create application state and router
    let state = Arc::new(AppState::new(settings));
    let app = ws_router::create_router(state);

    // Start the server
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
