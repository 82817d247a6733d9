//! `dealdesk` server binary

use std::sync::Arc;

use anyhow::Context;
use dealdesk_api::utils::logging::init_tracing;
use dealdesk_api::{build_app, AppContext};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside development
    dotenvy::dotenv().ok();

    let config =
        dealdesk_infra::config::load_or_default().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;

    let bind_addr = config.server.bind_addr.clone();
    let context = AppContext::new_with_config(config)
        .await
        .context("failed to initialise application context")?;
    let app = build_app(Arc::new(context));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %listener.local_addr()?, "DealDesk listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("DealDesk stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM signal, shutting down gracefully"),
    }
}
