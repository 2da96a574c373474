use crate::cli::ServeArgs;
use crate::infra::{AppState, FileSystemTextExtractor};
use crate::routes::with_validation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gazette_validation::config::AppConfig;
use gazette_validation::documents::{DocumentTypeRegistry, DocumentValidationService};
use gazette_validation::error::AppError;
use gazette_validation::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let registry = Arc::new(DocumentTypeRegistry::standard()?);
    let extractor = Arc::new(FileSystemTextExtractor::new(
        config.validation.document_root.clone(),
    ));
    let policy = config.validation.scoring_policy()?;
    let validation_service = Arc::new(DocumentValidationService::new(registry, extractor, policy));

    let app = with_validation_routes(validation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        document_root = %config.validation.document_root.display(),
        pass_threshold = policy.pass_threshold(),
        "gazette document validation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
