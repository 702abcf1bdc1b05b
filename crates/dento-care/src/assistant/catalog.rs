use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::formatter::{format_reply, AssistantReply};
use super::matcher::{match_text, MatchResult, MatchSource};
use super::rules::{Outcome, RuleTable, RuleTableError};
use super::tables;
use crate::directory::Directory;

/// The three chat assistants offered to patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantKind {
    /// Full-page symptom checker that suggests a clinic.
    SymptomChecker,
    /// Floating widget that suggests a clinic and the doctors who staff it.
    FloatingTriage,
    /// General questions about booking, prices, hours and so on.
    Faq,
}

impl AssistantKind {
    pub const ALL: [AssistantKind; 3] = [
        AssistantKind::SymptomChecker,
        AssistantKind::FloatingTriage,
        AssistantKind::Faq,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AssistantKind::SymptomChecker => "symptom_checker",
            AssistantKind::FloatingTriage => "floating_triage",
            AssistantKind::Faq => "faq",
        }
    }
}

impl fmt::Display for AssistantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assistant '{0}' (expected symptom_checker, floating_triage or faq)")]
pub struct UnknownAssistant(pub String);

impl FromStr for AssistantKind {
    type Err = UnknownAssistant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "symptom_checker" | "symptoms" => Ok(AssistantKind::SymptomChecker),
            "floating_triage" | "triage" => Ok(AssistantKind::FloatingTriage),
            "faq" => Ok(AssistantKind::Faq),
            _ => Err(UnknownAssistant(value.to_string())),
        }
    }
}

/// A routing table plus the presentation bits of one assistant.
#[derive(Debug, Clone)]
pub struct Assistant {
    kind: AssistantKind,
    table: RuleTable,
    image_outcome: Option<Outcome>,
    greeting: &'static str,
    quick_prompts: Vec<String>,
}

impl Assistant {
    pub fn kind(&self) -> AssistantKind {
        self.kind
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn accepts_images(&self) -> bool {
        self.image_outcome.is_some()
    }

    pub fn quick_prompts(&self) -> &[String] {
        &self.quick_prompts
    }

    /// Opening message, personalised for assistants that address the patient by name.
    pub fn greeting(&self, patient_name: &str) -> String {
        self.greeting.replace("{patient}", patient_name)
    }

    /// Picks the outcome for one patient message. An uploaded image bypasses
    /// text matching on assistants that accept images.
    pub fn route(&self, text: &str, image_attached: bool) -> MatchResult<'_> {
        if image_attached {
            if let Some(outcome) = &self.image_outcome {
                return MatchResult {
                    outcome,
                    source: MatchSource::ImageUpload,
                };
            }
        }

        match_text(&self.table, text)
    }
}

/// Every assistant and the directory used to resolve doctor referrals.
///
/// Built once at start-up and shared read-only between request handlers.
#[derive(Debug, Clone)]
pub struct AssistantCatalog {
    symptom_checker: Assistant,
    floating_triage: Assistant,
    faq: Assistant,
    directory: Directory,
}

impl AssistantCatalog {
    pub fn standard() -> Result<Self, RuleTableError> {
        let symptom_checker = Assistant {
            kind: AssistantKind::SymptomChecker,
            table: tables::symptom_checker()?,
            image_outcome: Some(tables::symptom_checker_image()),
            greeting: tables::SYMPTOM_CHECKER_GREETING,
            quick_prompts: Vec::new(),
        };
        let floating_triage = Assistant {
            kind: AssistantKind::FloatingTriage,
            table: tables::floating_triage()?,
            image_outcome: Some(tables::floating_triage_image()),
            greeting: tables::FLOATING_TRIAGE_GREETING,
            quick_prompts: to_strings(&tables::FLOATING_QUICK_PROMPTS),
        };
        let faq = Assistant {
            kind: AssistantKind::Faq,
            table: tables::faq()?,
            image_outcome: None,
            greeting: tables::FAQ_GREETING,
            quick_prompts: to_strings(&tables::FAQ_QUICK_PROMPTS),
        };

        info!(
            symptom_rules = symptom_checker.table.len(),
            triage_rules = floating_triage.table.len(),
            faq_rules = faq.table.len(),
            "assistant catalog loaded"
        );

        Ok(Self {
            symptom_checker,
            floating_triage,
            faq,
            directory: Directory::standard(),
        })
    }

    pub fn assistant(&self, kind: AssistantKind) -> &Assistant {
        match kind {
            AssistantKind::SymptomChecker => &self.symptom_checker,
            AssistantKind::FloatingTriage => &self.floating_triage,
            AssistantKind::Faq => &self.faq,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Routes a message and formats the reply in one step.
    pub fn reply(&self, kind: AssistantKind, text: &str, image_attached: bool) -> RoutedReply {
        let result = self.assistant(kind).route(text, image_attached);
        RoutedReply {
            assistant: kind,
            reply: format_reply(&result, &self.directory),
            provenance: Provenance::from(&result),
        }
    }
}

/// Formatted reply together with how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedReply {
    pub assistant: AssistantKind,
    pub reply: AssistantReply,
    pub provenance: Provenance,
}

/// Owned summary of a [`MatchSource`], suitable for responses and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Provenance {
    Rule { index: usize, trigger: String },
    Fallback,
    ImageUpload,
}

impl From<&MatchResult<'_>> for Provenance {
    fn from(result: &MatchResult<'_>) -> Self {
        match result.source {
            MatchSource::Rule { index, trigger } => Provenance::Rule {
                index,
                trigger: trigger.to_string(),
            },
            MatchSource::Fallback => Provenance::Fallback,
            MatchSource::ImageUpload => Provenance::ImageUpload,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AssistantCatalog {
        AssistantCatalog::standard().expect("standard catalog loads")
    }

    #[test]
    fn parses_assistant_slugs() {
        assert_eq!(
            "symptom-checker".parse::<AssistantKind>(),
            Ok(AssistantKind::SymptomChecker)
        );
        assert_eq!("FAQ".parse::<AssistantKind>(), Ok(AssistantKind::Faq));
        assert!("billing".parse::<AssistantKind>().is_err());
        for kind in AssistantKind::ALL {
            assert_eq!(kind.slug().parse::<AssistantKind>(), Ok(kind));
        }
    }

    #[test]
    fn greeting_uses_patient_name() {
        let catalog = catalog();
        let greeting = catalog
            .assistant(AssistantKind::FloatingTriage)
            .greeting("أحمد");
        assert!(greeting.starts_with("مرحباً أحمد!"));
        assert!(!greeting.contains("{patient}"));
    }

    #[test]
    fn faq_greeting_is_fixed() {
        let catalog = catalog();
        let faq = catalog.assistant(AssistantKind::Faq);
        assert_eq!(faq.greeting("أحمد"), faq.greeting("سارة"));
    }

    #[test]
    fn faq_ignores_image_flag() {
        let catalog = catalog();
        let faq = catalog.assistant(AssistantKind::Faq);
        assert!(!faq.accepts_images());
        let result = faq.route("ما ساعات العمل؟", true);
        assert_eq!(result.outcome.category.as_deref(), Some("hours"));
    }

    #[test]
    fn reply_reports_provenance() {
        let catalog = catalog();
        let routed = catalog.reply(AssistantKind::SymptomChecker, "عندي نزيف", false);
        assert_eq!(
            routed.provenance,
            Provenance::Rule {
                index: 1,
                trigger: "نزيف".to_string()
            }
        );
        assert_eq!(routed.reply.suggested_category.as_deref(), Some("اللثة"));
    }
}
