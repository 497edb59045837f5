//! CSV renderer.
//!
//! Header row, then one row per group in projected order. DNF rows are
//! appended to the same flat sequence when `ignore_dnf` is off; CSV never
//! emits a second table.

use super::escape::escape_csv;
use super::{BomDocument, BomRenderer, OutputFormat, ReportError};
use crate::config::BomConfig;

/// CSV renderer.
#[derive(Debug, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }

    fn line(cells: &[String]) -> String {
        cells
            .iter()
            .map(|c| escape_csv(c))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl BomRenderer for CsvRenderer {
    fn render(&self, document: &BomDocument, config: &BomConfig) -> Result<Vec<u8>, ReportError> {
        let mut content = String::new();
        content.push_str(&Self::line(&document.columns));
        content.push('\n');
        for row in document.rows(!config.ignore_dnf) {
            content.push_str(&Self::line(row));
            content.push('\n');
        }
        Ok(content.into_bytes())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}
