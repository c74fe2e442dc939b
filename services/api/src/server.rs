use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryIntelligenceRepository};
use crate::routes::with_intelligence_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pharma_intel::config::AppConfig;
use pharma_intel::error::AppError;
use pharma_intel::telemetry;
use pharma_intel::workflows::submissions::IntelligenceService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    config.server.override_with(args.host, args.port);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryIntelligenceRepository::default());
    let service = Arc::new(
        IntelligenceService::new(repository)
            .with_default_markets(config.intelligence.target_markets.clone()),
    );

    let app = with_intelligence_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pharma intelligence service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
