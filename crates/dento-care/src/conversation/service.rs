use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{
    Conversation, ConversationId, PatientMessage, StartConversation, TurnExchange,
};
use super::repository::{ConversationStore, StoreError};
use crate::assistant::{AssistantCatalog, IMAGE_UPLOAD_NOTE};
use crate::config::AssistantConfig;

/// Service composing the assistant catalog with a conversation store.
pub struct ConversationService<S> {
    catalog: Arc<AssistantCatalog>,
    store: Arc<S>,
    default_patient_name: String,
}

static CONVERSATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_conversation_id() -> ConversationId {
    let id = CONVERSATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ConversationId(format!("conv-{id:06}"))
}

impl<S> ConversationService<S>
where
    S: ConversationStore + 'static,
{
    pub fn new(catalog: Arc<AssistantCatalog>, store: Arc<S>, config: &AssistantConfig) -> Self {
        Self {
            catalog,
            store,
            default_patient_name: config.default_patient_name.clone(),
        }
    }

    pub fn catalog(&self) -> &AssistantCatalog {
        &self.catalog
    }

    pub fn default_patient_name(&self) -> &str {
        &self.default_patient_name
    }

    /// Open a conversation seeded with the assistant's greeting.
    pub fn start(&self, request: StartConversation) -> Result<Conversation, ConversationError> {
        let patient_name = request
            .patient_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.default_patient_name.clone());

        let greeting = self
            .catalog
            .assistant(request.assistant)
            .greeting(&patient_name);

        let conversation = Conversation::open(
            next_conversation_id(),
            request.assistant,
            patient_name,
            greeting,
            Utc::now(),
        );

        let stored = self.store.insert(conversation)?;
        info!(conversation = %stored.id.0, assistant = %stored.assistant, "conversation started");
        Ok(stored)
    }

    /// Append the patient's message and the assistant's reply.
    pub fn post_message(
        &self,
        conversation_id: &ConversationId,
        message: PatientMessage,
    ) -> Result<TurnExchange, ConversationError> {
        if message.is_blank() {
            return Err(ConversationError::EmptyMessage);
        }

        let catalog = &self.catalog;
        let PatientMessage { text, image } = message;
        let now = Utc::now();

        let (user, assistant, provenance) =
            self.store.append(conversation_id, |conversation| {
                let routed = catalog.reply(conversation.assistant, &text, image);
                let content = if image && text.trim().is_empty() {
                    IMAGE_UPLOAD_NOTE.to_string()
                } else {
                    text
                };
                let user = conversation.push_user(content, image, now);
                let assistant = conversation.push_assistant(routed.reply, now);
                (user, assistant, routed.provenance)
            })?;
        debug!(
            conversation = %conversation_id.0,
            turn = user.id,
            provenance = ?provenance,
            "assistant reply recorded"
        );

        Ok(TurnExchange {
            conversation_id: conversation_id.clone(),
            user,
            assistant,
            provenance,
        })
    }

    /// Fetch the full transcript.
    pub fn get(&self, conversation_id: &ConversationId) -> Result<Conversation, ConversationError> {
        let conversation = self
            .store
            .fetch(conversation_id)?
            .ok_or(StoreError::NotFound)?;
        Ok(conversation)
    }
}

/// Error raised by the conversation service.
#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("message must contain text or an image")]
    EmptyMessage,
    #[error(transparent)]
    Store(#[from] StoreError),
}
