use crate::assistant::{RuleTableError, UnknownAssistant};
use crate::config::ConfigError;
use crate::conversation::{ConversationError, StoreError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Catalog(RuleTableError),
    UnknownAssistant(UnknownAssistant),
    Conversation(ConversationError),
    Request(String),
    Io(std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Request(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownAssistant(_) => StatusCode::NOT_FOUND,
            AppError::Conversation(err) => conversation_status(err),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Catalog(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Status for a conversation failure; shared with the conversation router.
pub(crate) fn conversation_status(error: &ConversationError) -> StatusCode {
    match error {
        ConversationError::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
        ConversationError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        ConversationError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        ConversationError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Catalog(err) => write!(f, "assistant catalog error: {}", err),
            AppError::UnknownAssistant(err) => write!(f, "{}", err),
            AppError::Conversation(err) => write!(f, "conversation error: {}", err),
            AppError::Request(reason) => write!(f, "invalid request: {}", reason),
            AppError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::UnknownAssistant(err) => Some(err),
            AppError::Conversation(err) => Some(err),
            AppError::Request(_) => None,
            AppError::Io(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<RuleTableError> for AppError {
    fn from(value: RuleTableError) -> Self {
        Self::Catalog(value)
    }
}

impl From<UnknownAssistant> for AppError {
    fn from(value: UnknownAssistant) -> Self {
        Self::UnknownAssistant(value)
    }
}

impl From<ConversationError> for AppError {
    fn from(value: ConversationError) -> Self {
        Self::Conversation(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_assistant_maps_to_not_found() {
        let err = AppError::from(UnknownAssistant("billing".to_string()));
        assert!(err.to_string().contains("billing"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn request_errors_map_to_bad_request() {
        let err = AppError::Request("unknown search filter 'patients'".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn catalog_errors_map_to_internal_error() {
        let err = AppError::from(RuleTableError::EmptyTriggers { index: 3 });
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn conversation_errors_keep_their_own_statuses() {
        let unavailable = AppError::from(ConversationError::Store(StoreError::Unavailable(
            "database offline".to_string(),
        )));
        assert!(unavailable.to_string().starts_with("conversation error:"));
        assert_eq!(unavailable.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = AppError::from(ConversationError::Store(StoreError::NotFound));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let empty = AppError::from(ConversationError::EmptyMessage);
        assert_eq!(empty.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
