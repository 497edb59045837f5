//! Renderers for the finished document.
//!
//! Every format consumes the same abstract [`BomDocument`]: the projector
//! fixes cell text once, renderers add only structural encoding. That is
//! what guarantees column headers and row values match byte-for-byte
//! across CSV, HTML, XML and XLSX output for the same logical data.

mod csv;
pub mod escape;
mod html;
mod types;
mod xlsx;
mod xml;

pub use csv::CsvRenderer;
pub use html::HtmlRenderer;
pub use types::{BomDocument, BomStats, DocumentInfo, OutputFormat};
pub use xlsx::XlsxRenderer;
pub use xml::XmlRenderer;

use std::io::Write;
use thiserror::Error;

use crate::config::BomConfig;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("XML serialization failed: {0}")]
    Xml(String),

    #[error("Workbook generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Trait for document renderers.
///
/// `render` produces the complete output as bytes (text formats are
/// UTF-8); `write_report` is a convenience that renders and writes.
pub trait BomRenderer {
    /// Render the document to its final byte representation.
    fn render(&self, document: &BomDocument, config: &BomConfig) -> Result<Vec<u8>, ReportError>;

    /// Render the document and write it to a sink.
    fn write_report(
        &self,
        document: &BomDocument,
        config: &BomConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let bytes = self.render(document, config)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Get the format this renderer produces
    fn format(&self) -> OutputFormat;
}

/// Create a renderer for the given format
#[must_use]
pub fn create_renderer(format: OutputFormat) -> Box<dyn BomRenderer> {
    match format {
        OutputFormat::Csv => Box::new(CsvRenderer::new()),
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Xml => Box::new(XmlRenderer::new()),
        OutputFormat::Xlsx => Box::new(XlsxRenderer::new()),
    }
}
