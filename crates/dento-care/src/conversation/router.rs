use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{ConversationId, PatientMessage, StartConversation};
use super::repository::{ConversationStore, StoreError};
use super::service::{ConversationError, ConversationService};
use crate::assistant::{AssistantKind, UnknownAssistant};
use crate::error::{conversation_status, AppError};

/// Greeting and quick prompts shown when an assistant panel opens.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantProfile {
    pub assistant: AssistantKind,
    pub greeting: String,
    pub accepts_images: bool,
    pub quick_prompts: Vec<String>,
}

/// Router builder exposing the assistant and conversation endpoints.
pub fn assistant_router<S>(service: Arc<ConversationService<S>>) -> Router
where
    S: ConversationStore + 'static,
{
    Router::new()
        .route("/api/v1/assistants/:kind", get(profile_handler::<S>))
        .route("/api/v1/assistants/:kind/replies", post(reply_handler::<S>))
        .route("/api/v1/conversations", post(start_handler::<S>))
        .route(
            "/api/v1/conversations/:conversation_id",
            get(transcript_handler::<S>),
        )
        .route(
            "/api/v1/conversations/:conversation_id/messages",
            post(message_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<ConversationService<S>>>,
    Path(kind): Path<String>,
) -> Response
where
    S: ConversationStore + 'static,
{
    let kind = match kind.parse::<AssistantKind>() {
        Ok(kind) => kind,
        Err(error) => return unknown_assistant(error),
    };

    let assistant = service.catalog().assistant(kind);
    let profile = AssistantProfile {
        assistant: kind,
        greeting: assistant.greeting(service.default_patient_name()),
        accepts_images: assistant.accepts_images(),
        quick_prompts: assistant.quick_prompts().to_vec(),
    };
    (StatusCode::OK, axum::Json(profile)).into_response()
}

pub(crate) async fn reply_handler<S>(
    State(service): State<Arc<ConversationService<S>>>,
    Path(kind): Path<String>,
    axum::Json(message): axum::Json<PatientMessage>,
) -> Response
where
    S: ConversationStore + 'static,
{
    let kind = match kind.parse::<AssistantKind>() {
        Ok(kind) => kind,
        Err(error) => return unknown_assistant(error),
    };

    let routed = service.catalog().reply(kind, &message.text, message.image);
    (StatusCode::OK, axum::Json(routed)).into_response()
}

pub(crate) async fn start_handler<S>(
    State(service): State<Arc<ConversationService<S>>>,
    axum::Json(request): axum::Json<StartConversation>,
) -> Response
where
    S: ConversationStore + 'static,
{
    match service.start(request) {
        Ok(conversation) => (StatusCode::CREATED, axum::Json(conversation)).into_response(),
        Err(ConversationError::Store(StoreError::Conflict)) => {
            let payload = json!({
                "error": "conversation already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => conversation_failure(other),
    }
}

pub(crate) async fn transcript_handler<S>(
    State(service): State<Arc<ConversationService<S>>>,
    Path(conversation_id): Path<String>,
) -> Response
where
    S: ConversationStore + 'static,
{
    let id = ConversationId(conversation_id);
    match service.get(&id) {
        Ok(conversation) => (StatusCode::OK, axum::Json(conversation)).into_response(),
        Err(ConversationError::Store(StoreError::NotFound)) => not_found(&id),
        Err(other) => conversation_failure(other),
    }
}

pub(crate) async fn message_handler<S>(
    State(service): State<Arc<ConversationService<S>>>,
    Path(conversation_id): Path<String>,
    axum::Json(message): axum::Json<PatientMessage>,
) -> Response
where
    S: ConversationStore + 'static,
{
    let id = ConversationId(conversation_id);
    match service.post_message(&id, message) {
        Ok(exchange) => (StatusCode::OK, axum::Json(exchange)).into_response(),
        Err(ConversationError::EmptyMessage) => {
            let payload = json!({
                "error": ConversationError::EmptyMessage.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ConversationError::Store(StoreError::NotFound)) => not_found(&id),
        Err(other) => conversation_failure(other),
    }
}

fn unknown_assistant(error: UnknownAssistant) -> Response {
    AppError::from(error).into_response()
}

fn not_found(id: &ConversationId) -> Response {
    let payload = json!({
        "conversation_id": id.0,
        "error": "conversation not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn conversation_failure(error: ConversationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (conversation_status(&error), axum::Json(payload)).into_response()
}
