use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assistant::{AssistantCatalog, AssistantKind};
use crate::config::AssistantConfig;
use crate::conversation::domain::{Conversation, ConversationId, StartConversation};
use crate::conversation::repository::{ConversationStore, StoreError};
use crate::conversation::{assistant_router, ConversationService};

pub(super) fn catalog() -> Arc<AssistantCatalog> {
    Arc::new(AssistantCatalog::standard().expect("standard catalog loads"))
}

pub(super) fn start_request(assistant: AssistantKind) -> StartConversation {
    StartConversation {
        assistant,
        patient_name: Some("أحمد".to_string()),
    }
}

pub(super) fn build_service() -> (ConversationService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = ConversationService::new(catalog(), store.clone(), &AssistantConfig::default());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) conversations: Arc<Mutex<HashMap<ConversationId, Conversation>>>,
}

impl ConversationStore for MemoryStore {
    fn insert(&self, conversation: Conversation) -> Result<Conversation, StoreError> {
        let mut guard = self.conversations.lock().expect("store mutex poisoned");
        if guard.contains_key(&conversation.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(conversation.id.clone(), conversation.clone());
        Ok(conversation)
    }

    fn append<R>(
        &self,
        id: &ConversationId,
        apply: impl FnOnce(&mut Conversation) -> R,
    ) -> Result<R, StoreError> {
        let mut guard = self.conversations.lock().expect("store mutex poisoned");
        let conversation = guard.get_mut(id).ok_or(StoreError::NotFound)?;
        Ok(apply(conversation))
    }

    fn fetch(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        let guard = self.conversations.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Holds every `append` caller at a barrier before touching the inner store.
pub(super) struct RendezvousStore {
    pub(super) inner: MemoryStore,
    pub(super) barrier: Barrier,
}

impl RendezvousStore {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            inner: MemoryStore::default(),
            barrier: Barrier::new(parties),
        }
    }
}

impl ConversationStore for RendezvousStore {
    fn insert(&self, conversation: Conversation) -> Result<Conversation, StoreError> {
        self.inner.insert(conversation)
    }

    fn append<R>(
        &self,
        id: &ConversationId,
        apply: impl FnOnce(&mut Conversation) -> R,
    ) -> Result<R, StoreError> {
        self.barrier.wait();
        self.inner.append(id, apply)
    }

    fn fetch(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        self.inner.fetch(id)
    }
}

pub(super) struct ConflictStore;

impl ConversationStore for ConflictStore {
    fn insert(&self, _conversation: Conversation) -> Result<Conversation, StoreError> {
        Err(StoreError::Conflict)
    }

    fn append<R>(
        &self,
        _id: &ConversationId,
        _apply: impl FnOnce(&mut Conversation) -> R,
    ) -> Result<R, StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        Ok(None)
    }
}

pub(super) struct UnavailableStore;

impl ConversationStore for UnavailableStore {
    fn insert(&self, _conversation: Conversation) -> Result<Conversation, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn append<R>(
        &self,
        _id: &ConversationId,
        _apply: impl FnOnce(&mut Conversation) -> R,
    ) -> Result<R, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn service_with<S: ConversationStore + 'static>(
    store: S,
) -> Arc<ConversationService<S>> {
    Arc::new(ConversationService::new(
        catalog(),
        Arc::new(store),
        &AssistantConfig::default(),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: ConversationService<MemoryStore>) -> axum::Router {
    assistant_router(Arc::new(service))
}
