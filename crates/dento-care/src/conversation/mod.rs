//! Caller-owned chat transcripts built on top of the assistant catalog.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Conversation, ConversationId, PatientMessage, Speaker, StartConversation, Turn, TurnExchange,
};
pub use repository::{ConversationStore, StoreError};
pub use router::{assistant_router, AssistantProfile};
pub use service::{ConversationError, ConversationService};
