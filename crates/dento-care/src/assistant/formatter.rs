use serde::{Deserialize, Serialize};

use super::matcher::MatchResult;
use crate::directory::{Directory, DoctorCard};

/// Display payload for one assistant chat bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_doctors: Vec<DoctorCard>,
}

pub fn format_reply(result: &MatchResult<'_>, directory: &Directory) -> AssistantReply {
    AssistantReply {
        message: result.outcome.message.clone(),
        suggested_category: result.outcome.category.clone(),
        suggested_doctors: directory.cards(&result.outcome.referrals),
    }
}
