use crate::cli::ServeArgs;
use crate::infra::{load_assistant, load_directory, AppState};
use crate::routes::with_assistant_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use krishi_assist::config::AppConfig;
use krishi_assist::error::AppError;
use krishi_assist::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // Catalog problems abort startup before the listener is bound.
    let assistant = Arc::new(load_assistant(&config.rules)?);
    let directory = Arc::new(load_directory(&config.rules)?);
    info!(
        topics = assistant.replies().len(),
        schemes = directory.catalog().schemes().len(),
        "rule catalogs validated"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_assistant_routes(assistant, directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "farmer assistant ready");

    axum::serve(listener, app).await?;
    Ok(())
}
