use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::dashboard_router;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use supplier_compliance::config::AppConfig;
use supplier_compliance::error::AppError;
use supplier_compliance::ComplianceApiClient;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let api = ComplianceApiClient::new(&config.api)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        api,
    };

    let app = dashboard_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        api = %config.api.base_url,
        "supplier compliance dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
