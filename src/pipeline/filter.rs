//! Regex record filtering.
//!
//! Filtering removes a record from all output entirely. This is distinct
//! from the not-fitted state, which keeps a record visible in the DNF
//! rows of the finished document.

use regex::{Regex, RegexBuilder};

use crate::config::{FilterMode, FilterRule, REFERENCES_COLUMN};
use crate::error::{BomError, Result};
use crate::model::ComponentRecord;

/// A filter rule with its pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    field: String,
    regex: Regex,
    mode: FilterMode,
}

/// Compile filter rules, rejecting invalid patterns.
pub fn compile_rules(rules: &[FilterRule]) -> Result<Vec<CompiledRule>> {
    rules
        .iter()
        .map(|rule| {
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(rule.case_insensitive)
                .build()
                .map_err(|source| BomError::InvalidRegex {
                    field: rule.field.clone(),
                    pattern: rule.pattern.clone(),
                    source,
                })?;
            Ok(CompiledRule {
                field: rule.field.clone(),
                regex,
                mode: rule.mode,
            })
        })
        .collect()
}

/// Apply the rules: exclude-any drops a record outright, and when any
/// include-only rules exist a surviving record must match at least one.
pub fn apply(records: Vec<ComponentRecord>, rules: &[CompiledRule]) -> Vec<ComponentRecord> {
    if rules.is_empty() {
        return records;
    }
    let has_includes = rules
        .iter()
        .any(|r| r.mode == FilterMode::IncludeOnly);

    records
        .into_iter()
        .filter(|record| {
            let excluded = rules
                .iter()
                .filter(|r| r.mode == FilterMode::ExcludeAny)
                .any(|r| r.matches(record));
            if excluded {
                return false;
            }
            if has_includes {
                return rules
                    .iter()
                    .filter(|r| r.mode == FilterMode::IncludeOnly)
                    .any(|r| r.matches(record));
            }
            true
        })
        .collect()
}

impl CompiledRule {
    fn matches(&self, record: &ComponentRecord) -> bool {
        let value = if self.field.eq_ignore_ascii_case(REFERENCES_COLUMN) {
            record.reference.as_str()
        } else {
            record.field(&self.field).unwrap_or("")
        };
        self.regex.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BomConfig;

    fn records() -> Vec<ComponentRecord> {
        vec![
            ComponentRecord::new("R1").with_field("Footprint", "R_0805"),
            ComponentRecord::new("C1").with_field("Footprint", "C_0603"),
            ComponentRecord::new("TP1").with_field("Footprint", "TestPoint"),
        ]
    }

    #[test]
    fn test_no_rules_is_a_no_op() {
        let filtered = apply(records(), &[]);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_default_exclusions_drop_test_points() {
        let rules = compile_rules(&BomConfig::default_exclusions()).unwrap();
        let filtered = apply(records(), &rules);
        let refs: Vec<_> = filtered.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, ["R1", "C1"]);
    }

    #[test]
    fn test_include_only_requires_a_match() {
        let rules = compile_rules(&[FilterRule::new(
            "Footprint",
            "0805",
            FilterMode::IncludeOnly,
        )])
        .unwrap();
        let filtered = apply(records(), &rules);
        let refs: Vec<_> = filtered.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, ["R1"]);
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let rules = compile_rules(&[
            FilterRule::new("Footprint", "0805", FilterMode::IncludeOnly),
            FilterRule::new(REFERENCES_COLUMN, "^R", FilterMode::ExcludeAny),
        ])
        .unwrap();
        let filtered = apply(records(), &rules);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_case_sensitivity_is_per_rule() {
        let sensitive =
            compile_rules(&[FilterRule::new("Footprint", "r_0805", FilterMode::ExcludeAny)])
                .unwrap();
        assert_eq!(apply(records(), &sensitive).len(), 3);

        let insensitive = compile_rules(&[FilterRule::new(
            "Footprint",
            "r_0805",
            FilterMode::ExcludeAny,
        )
        .case_insensitive()])
        .unwrap();
        assert_eq!(apply(records(), &insensitive).len(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let err = compile_rules(&[FilterRule::new("Value", "[oops", FilterMode::ExcludeAny)])
            .unwrap_err();
        assert!(matches!(err, BomError::InvalidRegex { .. }));
    }
}
