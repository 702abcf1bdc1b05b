use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assistant::{AssistantKind, AssistantReply, Provenance};
use crate::directory::DoctorCard;

/// Opaque identifier assigned when a conversation starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: u32,
    pub speaker: Speaker,
    pub content: String,
    #[serde(default)]
    pub image_attached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_doctors: Vec<DoctorCard>,
    pub sent_at: DateTime<Utc>,
}

/// Ordered log of turns between a patient and one assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub assistant: AssistantKind,
    pub patient_name: String,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<Turn>,
}

impl Conversation {
    pub(crate) fn open(
        id: ConversationId,
        assistant: AssistantKind,
        patient_name: String,
        greeting: String,
        now: DateTime<Utc>,
    ) -> Self {
        let mut conversation = Self {
            id,
            assistant,
            patient_name,
            started_at: now,
            turns: Vec::new(),
        };
        conversation.push_assistant(
            AssistantReply {
                message: greeting,
                suggested_category: None,
                suggested_doctors: Vec::new(),
            },
            now,
        );
        conversation
    }

    pub(crate) fn push_user(
        &mut self,
        content: String,
        image_attached: bool,
        now: DateTime<Utc>,
    ) -> Turn {
        let turn = Turn {
            id: self.next_turn_id(),
            speaker: Speaker::User,
            content,
            image_attached,
            suggested_category: None,
            suggested_doctors: Vec::new(),
            sent_at: now,
        };
        self.turns.push(turn.clone());
        turn
    }

    pub(crate) fn push_assistant(&mut self, reply: AssistantReply, now: DateTime<Utc>) -> Turn {
        let turn = Turn {
            id: self.next_turn_id(),
            speaker: Speaker::Assistant,
            content: reply.message,
            image_attached: false,
            suggested_category: reply.suggested_category,
            suggested_doctors: reply.suggested_doctors,
            sent_at: now,
        };
        self.turns.push(turn.clone());
        turn
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    fn next_turn_id(&self) -> u32 {
        self.turns.len() as u32 + 1
    }
}

/// Request to open a conversation with an assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartConversation {
    pub assistant: AssistantKind,
    #[serde(default)]
    pub patient_name: Option<String>,
}

/// Text typed by the patient, optionally with an uploaded photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image: bool,
}

impl PatientMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: false,
        }
    }

    pub fn image() -> Self {
        Self {
            text: String::new(),
            image: true,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        !self.image && self.text.trim().is_empty()
    }
}

/// The pair of turns appended by one patient message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnExchange {
    pub conversation_id: ConversationId,
    pub user: Turn,
    pub assistant: Turn,
    pub provenance: Provenance,
}
