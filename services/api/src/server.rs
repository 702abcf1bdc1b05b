use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryConversationStore};
use crate::routes::with_assistant_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dento_care::assistant::AssistantCatalog;
use dento_care::config::AppConfig;
use dento_care::conversation::ConversationService;
use dento_care::directory::SearchHistory;
use dento_care::error::AppError;
use dento_care::telemetry;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
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

    let catalog = Arc::new(AssistantCatalog::standard()?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: catalog.clone(),
        search_history: Arc::new(Mutex::new(SearchHistory::with_limit(
            config.assistant.search_history_limit,
        ))),
    };

    let store = Arc::new(InMemoryConversationStore::default());
    let conversation_service = Arc::new(ConversationService::new(
        catalog,
        store,
        &config.assistant,
    ));

    let app = with_assistant_routes(conversation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "dento care assistant ready");

    axum::serve(listener, app).await?;
    Ok(())
}
