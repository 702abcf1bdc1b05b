use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use dento_care::conversation::{assistant_router, ConversationService, ConversationStore};
use dento_care::directory::{SearchFilter, SearchResults};
use dento_care::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) q: String,
    #[serde(default)]
    pub(crate) filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) term: String,
    pub(crate) filter: SearchFilter,
    pub(crate) total: usize,
    pub(crate) results: SearchResults,
    pub(crate) history: Vec<String>,
}

pub(crate) fn with_assistant_routes<S>(service: Arc<ConversationService<S>>) -> axum::Router
where
    S: ConversationStore + 'static,
{
    assistant_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/search", axum::routing::get(search_endpoint))
        .route(
            "/api/v1/search/history",
            axum::routing::get(search_history_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn search_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let SearchQuery { q, filter } = query;

    let filter = match filter.as_deref() {
        None => SearchFilter::All,
        Some(raw) => SearchFilter::parse(raw)
            .ok_or_else(|| AppError::Request(format!("unknown search filter '{raw}'")))?,
    };

    let results = state.catalog.directory().search(&q, filter);
    let history = state.remember_search(&q);
    debug!(term = %q, ?filter, total = results.total(), "directory search");

    Ok(Json(SearchResponse {
        term: q,
        filter,
        total: results.total(),
        results,
        history,
    }))
}

pub(crate) async fn search_history_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<serde_json::Value> {
    Json(json!({ "history": state.recent_searches() }))
}
