use std::sync::Arc;

use hunch_status::{ServiceConfig, StatusContext, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ServiceConfig::from_env();
    log::info!(
        "starting status probes for the {} track on port {}",
        config.variant().as_str(),
        config.port
    );

    let ctx = Arc::new(StatusContext::new(config.version));
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("status probes stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to install CTRL+C signal handler: {err}");
    }
}
