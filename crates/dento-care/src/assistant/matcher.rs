use tracing::debug;

use super::rules::{Outcome, RuleTable};

/// Where a [`MatchResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource<'a> {
    Rule { index: usize, trigger: &'a str },
    Fallback,
    ImageUpload,
}

/// Outcome selected for one input, borrowed from the table that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub outcome: &'a Outcome,
    pub source: MatchSource<'a>,
}

impl MatchResult<'_> {
    pub fn rule_index(&self) -> Option<usize> {
        match self.source {
            MatchSource::Rule { index, .. } => Some(index),
            MatchSource::Fallback | MatchSource::ImageUpload => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, MatchSource::Fallback)
    }
}

/// First-match scan over the table. Total: unmatched input gets the fallback.
pub fn match_text<'a>(table: &'a RuleTable, input: &str) -> MatchResult<'a> {
    let normalized = input.to_lowercase();

    for (index, rule) in table.rules().iter().enumerate() {
        if let Some(trigger) = rule
            .triggers
            .iter()
            .find(|trigger| normalized.contains(trigger.as_str()))
        {
            debug!(rule = index, trigger = %trigger, "routing rule matched");
            return MatchResult {
                outcome: &rule.outcome,
                source: MatchSource::Rule {
                    index,
                    trigger: trigger.as_str(),
                },
            };
        }
    }

    debug!("no routing rule matched, using fallback");
    MatchResult {
        outcome: table.fallback(),
        source: MatchSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::rules::Rule;

    fn table() -> RuleTable {
        RuleTable::new(
            vec![
                Rule::new(["pain", "ache"], Outcome::new("endo", "endo message")),
                Rule::new(["gum", "bleed"], Outcome::new("perio", "perio message")),
            ],
            Outcome::new("imaging", "fallback message"),
        )
        .expect("valid table")
    }

    #[test]
    fn empty_input_falls_back() {
        let table = table();
        let result = match_text(&table, "");
        assert!(result.is_fallback());
        assert_eq!(result.rule_index(), None);
        assert_eq!(result.outcome.category.as_deref(), Some("imaging"));
    }

    #[test]
    fn later_rule_matches_when_only_its_trigger_is_present() {
        let table = table();
        let result = match_text(&table, "my gums hurt");
        assert_eq!(result.rule_index(), Some(1));
        assert_eq!(
            result.source,
            MatchSource::Rule {
                index: 1,
                trigger: "gum"
            }
        );
    }

    #[test]
    fn earlier_rule_wins_when_both_match() {
        let table = table();
        let result = match_text(&table, "bleeding and pain");
        assert_eq!(result.rule_index(), Some(0));
    }

    #[test]
    fn reports_first_trigger_in_declaration_order() {
        let table = table();
        let result = match_text(&table, "ache then pain");
        assert_eq!(
            result.source,
            MatchSource::Rule {
                index: 0,
                trigger: "pain"
            }
        );
    }

    #[test]
    fn matching_ignores_case_and_word_boundaries() {
        let table = table();
        assert_eq!(match_text(&table, "PAIN").rule_index(), Some(0));
        assert_eq!(match_text(&table, "painful").rule_index(), Some(0));
        assert_eq!(match_text(&table, "PAIN"), match_text(&table, "pain"));
    }

    #[test]
    fn whitespace_only_input_falls_back() {
        let table = table();
        assert!(match_text(&table, "   \n\t").is_fallback());
    }
}
