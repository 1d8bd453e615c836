use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, calculate::AppState},
    metrics,
    pricing::{CostCalculator, PriceTable},
    signals::setup_signal_handlers,
};

/// Start the cost calculator server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Builds the price table once and shares it with every handler
/// 3. Sets up signal handlers for graceful shutdown
/// 4. Binds to the configured address and serves until shutdown
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app_state = AppState {
        calculator: Arc::new(CostCalculator::new(Arc::new(PriceTable::standard()))),
    };

    let app = create_router(&config, app_state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting cost calculator on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    app_state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
) -> Router {
    let api_routes = Router::new()
        .route("/api/calculate", post(handlers::calculate::handle_calculate))
        .route("/api/prices", get(handlers::prices::list_prices))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route(
                &config.metrics.endpoint,
                get(handlers::metrics_handler::metrics),
            )
            .with_state(handle);
        router = router.merge(metrics_routes);
    }

    router
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
