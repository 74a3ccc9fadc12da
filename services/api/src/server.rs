use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::dashboard_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use shelterwatch::config::AppConfig;
use shelterwatch::dashboard::source::CsvShelterStore;
use shelterwatch::dashboard::DashboardSession;
use shelterwatch::error::AppError;
use shelterwatch::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(data_dir) = args.data_dir.take() {
        config.data.data_dir = data_dir;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The bulk load happens exactly once, here. A store failure is fatal
    // to startup and is not retried.
    let store = CsvShelterStore::new(config.data.data_dir.clone());
    let session = Arc::new(DashboardSession::initialize(
        &store,
        config.threat.reference_point,
    )?);

    let app = dashboard_router()
        .layer(Extension(session.clone()))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        shelters = session.shelters().len(),
        skipped = session.skipped_shelters(),
        max_range_km = session.max_range_km(),
        "shelter risk dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
