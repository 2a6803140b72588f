use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use classbook::config::Config;
use classbook::schedule::Schedule;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    classbook::observability::init(config.metrics_port)?;

    let schedule = Schedule::in_memory(config.max_classes, config.max_bookings);
    let app = classbook::http::router(schedule);

    let addr = config.addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("classbook listening on http://{addr}");
    info!("  max_classes: {}", config.max_classes);
    info!("  max_bookings: {}", config.max_bookings);
    info!(
        "  metrics: {}",
        config
            .metrics_port
            .map_or("disabled".to_string(), |p| format!("http://0.0.0.0:{p}/metrics"))
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("classbook stopped");
    Ok(())
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!("failed to register SIGTERM handler: {e}");
                ctrl_c.await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await;
    }

    info!("shutdown signal received, draining connections");
}
