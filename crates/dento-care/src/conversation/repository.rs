use super::domain::{Conversation, ConversationId};

/// Storage abstraction so the conversation service can be exercised in isolation.
pub trait ConversationStore: Send + Sync {
    fn insert(&self, conversation: Conversation) -> Result<Conversation, StoreError>;
    /// Runs `apply` against the stored conversation under the store's lock.
    fn append<R>(
        &self,
        id: &ConversationId,
        apply: impl FnOnce(&mut Conversation) -> R,
    ) -> Result<R, StoreError>;
    fn fetch(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("conversation already exists")]
    Conflict,
    #[error("conversation not found")]
    NotFound,
    #[error("conversation store unavailable: {0}")]
    Unavailable(String),
}
