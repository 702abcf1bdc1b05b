use dento_care::assistant::AssistantCatalog;
use dento_care::conversation::{Conversation, ConversationId, ConversationStore, StoreError};
use dento_care::directory::SearchHistory;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<AssistantCatalog>,
    pub(crate) search_history: Arc<Mutex<SearchHistory>>,
}

impl AppState {
    /// Records a term and returns the updated history.
    pub(crate) fn remember_search(&self, term: &str) -> Vec<String> {
        let mut history = self
            .search_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        history.record(term);
        history.terms()
    }

    pub(crate) fn recent_searches(&self) -> Vec<String> {
        self.search_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .terms()
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryConversationStore {
    conversations: Arc<Mutex<HashMap<ConversationId, Conversation>>>,
}

impl ConversationStore for InMemoryConversationStore {
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

impl InMemoryConversationStore {
    pub(crate) fn len(&self) -> usize {
        self.conversations
            .lock()
            .expect("store mutex poisoned")
            .len()
    }
}
