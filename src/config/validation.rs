//! Configuration validation.
//!
//! Structural misconfiguration aborts a run before any output is
//! produced, so every fallible setting is checked up front here.

use regex::RegexBuilder;

use super::types::{BomConfig, SortMode};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The setting that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for BomConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.group_components && self.group_fields.is_empty() {
            errors.push(ConfigError {
                field: "group_fields".to_string(),
                message: "at least one grouping field is required when grouping is enabled"
                    .to_string(),
            });
        }

        if self.columns.is_empty() {
            errors.push(ConfigError {
                field: "columns".to_string(),
                message: "at least one output column is required".to_string(),
            });
        }

        let mut seen = Vec::new();
        for column in &self.columns {
            let name = column.output_name().to_lowercase();
            if seen.contains(&name) {
                errors.push(ConfigError {
                    field: "columns".to_string(),
                    message: format!("duplicate output column '{}'", column.output_name()),
                });
            }
            seen.push(name);
        }

        for (i, rule) in self.filters.iter().enumerate() {
            if rule.field.is_empty() {
                errors.push(ConfigError {
                    field: format!("filters[{i}].field"),
                    message: "filter rules require a field name".to_string(),
                });
            }
            if let Err(e) = RegexBuilder::new(&rule.pattern)
                .case_insensitive(rule.case_insensitive)
                .build()
            {
                errors.push(ConfigError {
                    field: format!("filters[{i}].pattern"),
                    message: format!("invalid regex '{}': {e}", rule.pattern),
                });
            }
        }

        if self.sort_mode == SortMode::TypeRank && self.sort_order.is_empty() {
            errors.push(ConfigError {
                field: "sort_order".to_string(),
                message: "the type-rank sorter requires a priority table".to_string(),
            });
        }

        if self.ref_separator.is_empty() {
            errors.push(ConfigError {
                field: "ref_separator".to_string(),
                message: "the reference separator must not be empty".to_string(),
            });
        }

        if self.number_boards == 0 {
            errors.push(ConfigError {
                field: "number_boards".to_string(),
                message: "at least one board is required".to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnSpec, FilterMode, FilterRule};

    #[test]
    fn test_default_config_is_valid() {
        assert!(BomConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let mut config = BomConfig::default();
        config.filters.push(FilterRule::new(
            "Value",
            "[unclosed",
            FilterMode::ExcludeAny,
        ));

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].field.starts_with("filters["));
        assert!(errors[0].message.contains("[unclosed"));
    }

    #[test]
    fn test_empty_group_fields_rejected_only_when_grouping() {
        let mut config = BomConfig::default();
        config.group_fields.clear();
        assert!(!config.is_valid());

        config.group_components = false;
        assert!(config.is_valid());
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let mut config = BomConfig::default();
        config.columns.push(ColumnSpec::new("value"));

        let errors = config.validate();
        assert!(errors.iter().any(|e| e.message.contains("duplicate")));
    }

    #[test]
    fn test_zero_boards_rejected() {
        let mut config = BomConfig::default();
        config.number_boards = 0;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "columns".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "columns: boom");
    }
}
