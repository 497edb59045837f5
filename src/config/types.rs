//! Configuration types for BOM generation.
//!
//! All values here arrive already resolved (config-file loading and CLI
//! handling live outside this crate). `BomConfig::default()` reproduces
//! the stock behavior: grouped output, merged blank fields, connectors
//! grouped regardless of value, DNF rows kept out of single-table
//! formats, type-rank sorting.

use serde::{Deserialize, Serialize};

use crate::pipeline::AliasTable;

// ============================================================================
// Well-known column names
// ============================================================================

/// Numbering column
pub const ROW_COLUMN: &str = "Row";
/// Grouped reference list column
pub const REFERENCES_COLUMN: &str = "References";
/// Per-board quantity column
pub const QUANTITY_COLUMN: &str = "Quantity Per PCB";
/// Sheet path column
pub const SHEETPATH_COLUMN: &str = "Sheetpath";

// ============================================================================
// Filter rules
// ============================================================================

/// How a filter rule treats matching records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Record must match at least one include-only rule to be retained
    IncludeOnly,
    /// Record matching this rule is dropped unconditionally
    ExcludeAny,
}

/// One regex filter rule over a record field.
///
/// Patterns are unanchored and case-sensitive unless `case_insensitive`
/// is set. The pseudo-field `References` matches the reference designator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Field the rule applies to
    pub field: String,
    /// Unanchored regex pattern
    pub pattern: String,
    /// Include-only or exclude-any
    pub mode: FilterMode,
    /// Compile the pattern case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,
}

impl FilterRule {
    /// Create a case-sensitive rule.
    pub fn new(field: impl Into<String>, pattern: impl Into<String>, mode: FilterMode) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
            mode,
            case_insensitive: false,
        }
    }

    /// Make the rule case-insensitive.
    #[must_use]
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }
}

// ============================================================================
// Output columns
// ============================================================================

/// One output column: a source field, an optional rename, and optional
/// extra fields joined onto the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Source field or virtual column name, matched case-insensitively
    pub source: String,
    /// Output header text; defaults to `source` verbatim
    #[serde(default)]
    pub rename: Option<String>,
    /// Extra source fields appended to the cell value
    #[serde(default)]
    pub join: Vec<String>,
    /// Separator between joined values
    #[serde(default = "default_join_separator")]
    pub separator: String,
}

fn default_join_separator() -> String {
    " ".to_string()
}

impl ColumnSpec {
    /// Straight pass-through column.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            rename: None,
            join: Vec::new(),
            separator: default_join_separator(),
        }
    }

    /// Renamed column.
    pub fn renamed(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rename: Some(name.into()),
            ..Self::new(source)
        }
    }

    /// Append another source field to the cell value.
    #[must_use]
    pub fn join_field(mut self, field: impl Into<String>) -> Self {
        self.join.push(field.into());
        self
    }

    /// Set the join separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Header text this column renders as.
    pub fn output_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.source)
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Group ordering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Rank by reference-prefix class, then lowest member reference
    #[default]
    TypeRank,
    /// Preserve grouper emission order
    None,
}

// ============================================================================
// Per-format options
// ============================================================================

/// HTML renderer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Emit the separate DNF table when DNF rows exist
    pub generate_dnf: bool,
    /// Document title; `None` omits the heading
    pub title: Option<String>,
    /// Show the schematic info block
    pub show_info: bool,
    /// Show the statistics block
    pub show_stats: bool,
    /// Render `http(s)` cell values as links
    pub link_urls: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            generate_dnf: true,
            title: Some("Bill of Materials".to_string()),
            show_info: true,
            show_stats: true,
            link_urls: true,
        }
    }
}

/// Named XLSX color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XlsxTheme {
    /// Blue header bands
    #[default]
    ModernBlue,
    /// Green header bands
    ModernGreen,
    /// Red header bands
    ModernRed,
    /// Plain grey, no accent colors
    Classic,
}

/// XLSX renderer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XlsxOptions {
    /// Worksheet title row; `None` omits it
    pub title: Option<String>,
    /// Show the schematic info block
    pub show_info: bool,
    /// Show the statistics block
    pub show_stats: bool,
    /// PNG logo image anchored at the top-left corner
    #[serde(skip)]
    pub logo: Option<Vec<u8>>,
    /// Color theme for the title and header bands
    pub theme: XlsxTheme,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            title: Some("Bill of Materials".to_string()),
            show_info: true,
            show_stats: true,
            logo: None,
            theme: XlsxTheme::default(),
        }
    }
}

// ============================================================================
// Top-level configuration
// ============================================================================

/// Resolved configuration for one BOM generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BomConfig {
    /// Group matching components; false emits one singleton group per record
    pub group_components: bool,
    /// Fields forming the group equality key, compared case-insensitively
    pub group_fields: Vec<String>,
    /// Type alias table consulted for the `Part` key field
    pub aliases: AliasTable,
    /// Let blank key fields match any value, and fill merged blanks
    pub merge_blank_fields: bool,
    /// Drop `Value` from the key for connector-class references
    pub group_connectors: bool,
    /// Reference prefixes treated as connector-class
    pub connector_prefixes: Vec<String>,
    /// Compact reference lists into range notation (`R1-R5`)
    pub use_alt: bool,
    /// Separator between reference tokens
    pub ref_separator: String,
    /// Output columns, in order
    pub columns: Vec<ColumnSpec>,
    /// Emit the numbering column; false drops any `Row` column
    pub number_rows: bool,
    /// Keep DNF rows out of the single-table formats
    pub ignore_dnf: bool,
    /// Regex filter rules applied before grouping
    pub filters: Vec<FilterRule>,
    /// Group ordering mode
    pub sort_mode: SortMode,
    /// Reference-prefix class priority for `SortMode::TypeRank`;
    /// `~` is the slot for unlisted prefixes
    pub sort_order: Vec<String>,
    /// Number of boards built, for the total-components statistic
    pub number_boards: u32,
    /// HTML renderer options
    pub html: HtmlOptions,
    /// XLSX renderer options
    pub xlsx: XlsxOptions,
}

impl Default for BomConfig {
    fn default() -> Self {
        Self {
            group_components: true,
            group_fields: vec![
                "Part".to_string(),
                "Value".to_string(),
                "Footprint".to_string(),
            ],
            aliases: AliasTable::with_builtins(),
            merge_blank_fields: true,
            group_connectors: true,
            connector_prefixes: vec!["J".to_string(), "P".to_string()],
            use_alt: false,
            ref_separator: " ".to_string(),
            columns: Self::default_columns(),
            number_rows: true,
            ignore_dnf: true,
            filters: Self::default_exclusions(),
            sort_mode: SortMode::default(),
            sort_order: Self::default_sort_order(),
            number_boards: 1,
            html: HtmlOptions::default(),
            xlsx: XlsxOptions::default(),
        }
    }
}

impl BomConfig {
    /// Create a configuration with stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock output column set.
    pub fn default_columns() -> Vec<ColumnSpec> {
        [
            ROW_COLUMN,
            "Description",
            "Part",
            REFERENCES_COLUMN,
            "Value",
            "Footprint",
            QUANTITY_COLUMN,
            "Datasheet",
            "Config",
        ]
        .into_iter()
        .map(ColumnSpec::new)
        .collect()
    }

    /// The stock exclusion rules: test points, fiducials, mounting holes,
    /// solder bridges.
    pub fn default_exclusions() -> Vec<FilterRule> {
        let rules = [
            (REFERENCES_COLUMN, "^TP[0-9]*"),
            (REFERENCES_COLUMN, "^FID"),
            ("Part", "mount.*hole"),
            ("Part", "solder.*bridge"),
            ("Part", "test.*point"),
            ("Footprint", "test.*point"),
            ("Footprint", "mount.*hole"),
            ("Footprint", "fiducial"),
        ];
        rules
            .into_iter()
            .map(|(field, pattern)| {
                FilterRule::new(field, pattern, FilterMode::ExcludeAny).case_insensitive()
            })
            .collect()
    }

    /// The stock reference-prefix class priority.
    pub fn default_sort_order() -> Vec<String> {
        [
            "C", "R", "L", "D", "U", "Y", "X", "F", "SW", "A", "~", "HS", "CNN", "J", "P", "NT",
            "MH",
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }

    /// Whether a reference designator belongs to a connector class.
    pub fn is_connector(&self, reference: &str) -> bool {
        let prefix = crate::model::refdes::class_prefix(reference);
        self.connector_prefixes
            .iter()
            .any(|p| p.eq_ignore_ascii_case(prefix))
    }
}
