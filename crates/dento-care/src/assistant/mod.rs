//! Keyword routing for the patient chat assistants.
//!
//! Each assistant owns an ordered [`RuleTable`]. A message is lowercased and
//! scanned rule by rule; the first rule with a trigger contained anywhere in
//! the text decides the reply, and unmatched text gets the table's fallback.

mod catalog;
mod formatter;
mod matcher;
mod rules;
mod tables;

pub use catalog::{
    Assistant, AssistantCatalog, AssistantKind, Provenance, RoutedReply, UnknownAssistant,
};
pub use formatter::{format_reply, AssistantReply};
pub use matcher::{match_text, MatchResult, MatchSource};
pub use rules::{Outcome, Rule, RuleTable, RuleTableError};
pub use tables::IMAGE_UPLOAD_NOTE;
