use serde::{Deserialize, Serialize};

/// Category label, reply template and doctor referrals attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub category: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub referrals: Vec<String>,
}

impl Outcome {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            message: message.into(),
            referrals: Vec::new(),
        }
    }

    /// Outcome with no category badge, used by the FAQ fallback.
    pub fn uncategorized(message: impl Into<String>) -> Self {
        Self {
            category: None,
            message: message.into(),
            referrals: Vec::new(),
        }
    }

    pub fn with_referrals<I, S>(mut self, doctor_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.referrals = doctor_ids.into_iter().map(Into::into).collect();
        self
    }
}

/// One ordered trigger list and the outcome it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub triggers: Vec<String>,
    pub outcome: Outcome,
}

impl Rule {
    pub fn new<I, S>(triggers: I, outcome: Outcome) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            outcome,
        }
    }
}

/// Ordered rules plus the fallback outcome returned when nothing matches.
///
/// Rules are evaluated in declaration order and the first hit wins, so the
/// order of `rules` is part of the table's behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: Outcome,
}

impl RuleTable {
    /// Validates and normalizes the rules. Triggers are stored lowercase.
    pub fn new(rules: Vec<Rule>, fallback: Outcome) -> Result<Self, RuleTableError> {
        let mut normalized = Vec::with_capacity(rules.len());

        for (index, rule) in rules.into_iter().enumerate() {
            if rule.triggers.is_empty() {
                return Err(RuleTableError::EmptyTriggers { index });
            }

            let mut triggers = Vec::with_capacity(rule.triggers.len());
            for trigger in rule.triggers {
                if trigger.trim().is_empty() {
                    return Err(RuleTableError::BlankTrigger { index });
                }
                triggers.push(trigger.to_lowercase());
            }

            normalized.push(Rule {
                triggers,
                outcome: rule.outcome,
            });
        }

        Ok(Self {
            rules: normalized,
            fallback,
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Outcome {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleTableError {
    #[error("rule {index} declares no trigger keywords")]
    EmptyTriggers { index: usize },
    #[error("rule {index} declares a blank trigger keyword")]
    BlankTrigger { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> Outcome {
        Outcome::uncategorized("fallback")
    }

    #[test]
    fn lowercases_triggers_on_load() {
        let table = RuleTable::new(
            vec![Rule::new(["Implant", "PAIN"], Outcome::new("implants", "see implants"))],
            fallback(),
        )
        .expect("valid table");

        assert_eq!(table.rules()[0].triggers, vec!["implant", "pain"]);
    }

    #[test]
    fn rejects_rule_without_triggers() {
        let err = RuleTable::new(
            vec![
                Rule::new(["pain"], Outcome::new("a", "a")),
                Rule::new(Vec::<String>::new(), Outcome::new("b", "b")),
            ],
            fallback(),
        )
        .expect_err("empty trigger list rejected");

        assert_eq!(err, RuleTableError::EmptyTriggers { index: 1 });
    }

    #[test]
    fn rejects_blank_trigger() {
        let err = RuleTable::new(
            vec![Rule::new(["pain", "  "], Outcome::new("a", "a"))],
            fallback(),
        )
        .expect_err("blank trigger rejected");

        assert_eq!(err, RuleTableError::BlankTrigger { index: 0 });
    }

    #[test]
    fn table_without_rules_is_still_valid() {
        let table = RuleTable::new(Vec::new(), fallback()).expect("fallback-only table");
        assert!(table.is_empty());
        assert_eq!(table.fallback().message, "fallback");
    }
}
