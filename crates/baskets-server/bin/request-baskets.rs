use baskets_server::{
    BasketsServer,
    Config,
    StorageKind,
};

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize a tracing subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse().build();

    let storage = StorageKind::resolve(&config.db_type)?;
    tracing::info!(
        backend = ?storage,
        location = ?storage.location(&config),
        "Selected baskets storage"
    );

    if !config.baskets.is_empty() {
        tracing::info!(baskets = ?config.baskets, "Baskets to auto-create on startup");
    }

    let server = BasketsServer::bind(config).await?;
    let cancellation_token = CancellationToken::new();

    run_server(server, cancellation_token).await;

    Ok(())
}

async fn run_server(server: BasketsServer, cancellation_token: CancellationToken) {
    let mut boxed_server_future = Box::pin(server.run(cancellation_token.clone()));

    tokio::select! {
        result = &mut boxed_server_future => {
            handle_server_result(result);
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl-C signal, initiating graceful shutdown");
            cancellation_token.cancel();
            handle_server_result(boxed_server_future.await);
        }
    }
}

/// Handle the result of the server
fn handle_server_result(result: Result<()>) {
    match result {
        Ok(()) => tracing::info!("Server shutdown gracefully"),
        Err(e) => {
            tracing::error!("Server encountered an error: {}", e);
        }
    }
}
