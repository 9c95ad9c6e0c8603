use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use crate::config::Config;
use crate::utils::cli::Args;
use crate::utils::state::AppState;

mod api;
mod config;
mod error;
mod service;
mod storage;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = validate_config(&args).await;
    let state = Arc::new(AppState::new(config));

    let app = api::create_router(state.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", state.config.host, state.config.port))
            .await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}

async fn validate_config(args: &Args) -> Config {
    let root_dir = Path::new(&args.root);
    if let Ok(meta) = tokio::fs::metadata(root_dir).await {
        if !meta.is_dir() {
            eprintln!(
                "IMAGE_STORE_ROOTDIR `{}` exists but is not a directory",
                args.root,
            );
            std::process::exit(1);
        }
    }

    Config {
        host: args.host.clone(),
        port: args.port,
        storage_typ: args.storage.clone(),
        root_dir: args.root.clone(),
    }
}
