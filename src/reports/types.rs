//! Output document and metadata types.

use serde::{Deserialize, Serialize};

use crate::model::FieldCollision;

/// Output format for the finished document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flat comma-separated table
    Csv,
    /// Standalone page with fitted and DNF tables
    Html,
    /// One element per group
    Xml,
    /// Workbook with optional title/info/stats header blocks
    Xlsx,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "xml" => Ok(OutputFormat::Xml),
            "xlsx" => Ok(OutputFormat::Xlsx),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Schematic-level metadata rendered in document header blocks.
///
/// All values arrive already resolved; absent values render empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Schematic name
    pub schematic: Option<String>,
    /// Assembly variant name
    pub variant: Option<String>,
    /// Schematic revision
    pub revision: Option<String>,
    /// Schematic date string
    pub date: Option<String>,
    /// KiCad version string
    pub kicad_version: Option<String>,
}

impl DocumentInfo {
    /// Create empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schematic name.
    #[must_use]
    pub fn with_schematic(mut self, name: impl Into<String>) -> Self {
        self.schematic = Some(name.into());
        self
    }

    /// Set the variant name.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the revision.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Set the date string.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the KiCad version string.
    #[must_use]
    pub fn with_kicad_version(mut self, version: impl Into<String>) -> Self {
        self.kicad_version = Some(version.into());
        self
    }

    /// Label/value pairs in header-block order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Schematic:", self.schematic.as_deref().unwrap_or("")),
            ("Variant:", self.variant.as_deref().unwrap_or("")),
            ("Revision:", self.revision.as_deref().unwrap_or("")),
            ("Date:", self.date.as_deref().unwrap_or("")),
            ("KiCad Version:", self.kicad_version.as_deref().unwrap_or("")),
        ]
    }
}

/// Derived statistics over the grouped document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomStats {
    /// Number of groups, DNF groups included
    pub n_groups: usize,
    /// Number of grouped components, not-fitted included
    pub n_components: usize,
    /// Number of fitted components
    pub n_fitted: usize,
    /// Number of boards built
    pub number_boards: u32,
    /// Fitted components across all boards
    pub n_build: usize,
}

impl BomStats {
    /// Label/value pairs in header-block order.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Component Groups:", self.n_groups.to_string()),
            ("Component Count:", self.n_components.to_string()),
            ("Fitted Components:", self.n_fitted.to_string()),
            ("Number of PCBs:", self.number_boards.to_string()),
            ("Total components:", self.n_build.to_string()),
        ]
    }
}

/// The finished abstract table, shared by every renderer.
///
/// Cell text is final here; renderers only add structural encoding, so
/// the same logical data matches byte-for-byte across formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BomDocument {
    /// Output column names, post rename/join/projection
    pub columns: Vec<String>,
    /// Rows for fitted groups
    pub fitted_rows: Vec<Vec<String>>,
    /// Rows for DNF groups, same column layout
    pub dnf_rows: Vec<Vec<String>>,
    /// Derived statistics
    pub stats: BomStats,
    /// Schematic metadata
    pub info: DocumentInfo,
    /// Field collisions recorded while grouping
    pub collisions: Vec<FieldCollision>,
}

impl BomDocument {
    /// Fitted rows followed by DNF rows when `include_dnf` is set.
    pub fn rows(&self, include_dnf: bool) -> impl Iterator<Item = &Vec<String>> {
        self.fitted_rows
            .iter()
            .chain(self.dnf_rows.iter().filter(move |_| include_dnf))
    }
}
