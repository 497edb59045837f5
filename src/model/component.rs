//! Component record model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One schematic symbol instance, with all field values already resolved
/// by the upstream source.
///
/// Records are immutable once built: the pipeline consumes them read-only
/// and never writes field values back. Field names are looked up
/// case-insensitively but stored with their original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Reference designator, e.g. `R7`
    pub reference: String,
    /// Ordered field map: Value, Footprint, Datasheet, Part, free-form
    pub fields: IndexMap<String, String>,
    /// Whether this instance is fitted on the board
    pub fitted: bool,
    /// Explicit "Do Not Change" marker
    pub dnc: bool,
    /// Resolved sheet path, empty for the root sheet
    #[serde(default)]
    pub sheet_path: String,
    /// Which physical unit of a multi-unit symbol this instance is (1-based)
    #[serde(default = "default_unit")]
    pub unit: u32,
}

fn default_unit() -> u32 {
    1
}

impl ComponentRecord {
    /// Create a fitted record with no fields.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            fields: IndexMap::new(),
            fitted: true,
            dnc: false,
            sheet_path: String::new(),
            unit: 1,
        }
    }

    /// Add a field value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the fitted flag.
    #[must_use]
    pub fn with_fitted(mut self, fitted: bool) -> Self {
        self.fitted = fitted;
        self
    }

    /// Set the DNC flag.
    #[must_use]
    pub fn with_dnc(mut self, dnc: bool) -> Self {
        self.dnc = dnc;
        self
    }

    /// Set the sheet path.
    #[must_use]
    pub fn with_sheet_path(mut self, path: impl Into<String>) -> Self {
        self.sheet_path = path.into();
        self
    }

    /// Set the multi-unit index.
    #[must_use]
    pub fn with_unit(mut self, unit: u32) -> Self {
        self.unit = unit;
        self
    }

    /// Look up a field value by name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Value` field, or the empty string.
    pub fn value(&self) -> &str {
        self.field("Value").unwrap_or("")
    }

    /// Comma-separated markers carried by the `Config` field, lowercased.
    fn config_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.field("Config")
            .unwrap_or("")
            .split(',')
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
    }

    /// Whether this record counts as fitted.
    ///
    /// The explicit flag is combined with `Config` field markers: a `dnf`
    /// or `do_not_fit` token forces not-fitted regardless of the flag.
    pub fn is_fitted(&self) -> bool {
        self.fitted
            && !self
                .config_tokens()
                .any(|t| t == "dnf" || t == "do_not_fit")
    }

    /// Whether this record carries the "Do Not Change" annotation.
    ///
    /// Set by the explicit flag, a `dnc` token in the `Config` field, or a
    /// `Value` ending in ` DNC`.
    pub fn is_dnc(&self) -> bool {
        if self.dnc || self.config_tokens().any(|t| t == "dnc") {
            return true;
        }
        let value = self.value();
        value == "DNC" || value.ends_with(" DNC")
    }
}
