use crate::cli::ServeArgs;
use crate::infra::{sample_catalog, AppState};
use crate::routes::with_board_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use jobdeck::board::{CsvJobCatalog, JobBoard, JobListSource};
use jobdeck::config::AppConfig;
use jobdeck::error::AppError;
use jobdeck::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = match &config.catalog.jobs_csv {
        Some(path) => CsvJobCatalog::from_path(path)?,
        None => CsvJobCatalog::from_records(sample_catalog()),
    };
    let jobs = catalog.fetch_jobs().await?;
    info!(job_count = jobs.len(), "job catalog loaded");
    let board = Arc::new(JobBoard::new(jobs));

    let app = with_board_routes(board)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "jobdeck listing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
