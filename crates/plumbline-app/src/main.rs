use std::sync::Arc;
use std::time::Duration;

use plumbline_app::app::api::routes;
use plumbline_app::clock::ClockHandler;
use plumbline_app::config::ConfigHandler;
use plumbline_calendar::{NowTicker, ZonedClock};
use plumbline_core::config::load_config;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Plumbline scheduling server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let timezone = config.calendar.timezone()?;
    let shutdown = CancellationToken::new();
    let ticker = NowTicker::spawn_with_token(
        Arc::new(ZonedClock::new(timezone)),
        Duration::from_millis(config.calendar.now_refresh_ms),
        &shutdown,
    );

    tracing::info!(%timezone, now = %ticker.latest(), "Now ticker started");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(ConfigHandler::new(config))
        .hoop(ClockHandler::new(ticker.subscribe()))
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    let server = salvo::Server::new(acceptor);
    let handle = server.handle();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "Failed to listen for shutdown signal");
                }
            }
            () = signal_token.cancelled() => {}
        }
        tracing::info!("Shutting down");
        handle.stop_graceful(None);
    });

    server.serve(router).await;

    shutdown.cancel();
    ticker.shutdown().await;

    Ok(())
}
