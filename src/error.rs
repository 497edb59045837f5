//! Unified error types for bomgen.
//!
//! Configuration problems (unknown columns, invalid regexes) are fatal and
//! abort a run before any output is produced; everything else in the
//! pipeline degrades gracefully and is surfaced as diagnostics instead.

use thiserror::Error;

/// Main error type for BOM generation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomError {
    /// Invalid configuration, reported before any output is written
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A configured output column does not resolve to any component field
    #[error("Unknown output column '{0}'")]
    UnknownColumn(String),

    /// A filter rule carries a pattern that does not compile
    #[error("Invalid regex '{pattern}' for field '{field}'")]
    InvalidRegex {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Report generation failed
    #[error("Report generation failed")]
    Report(#[from] crate::reports::ReportError),
}

/// Convenient Result type for bomgen operations
pub type Result<T> = std::result::Result<T, BomError>;

impl BomError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an unknown-column error
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BomError::unknown_column("Tolerance");
        assert_eq!(err.to_string(), "Unknown output column 'Tolerance'");

        let err = BomError::config("grouping fields must not be empty");
        assert!(err.to_string().contains("grouping fields"));
    }

    #[test]
    fn test_regex_error_carries_source() {
        let source = regex::Regex::new("[unclosed").unwrap_err();
        let err = BomError::InvalidRegex {
            field: "Value".to_string(),
            pattern: "[unclosed".to_string(),
            source,
        };
        let display = err.to_string();
        assert!(display.contains("[unclosed"));
        assert!(display.contains("Value"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
