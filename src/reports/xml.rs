//! XML renderer.
//!
//! One `<group>` element per row, one child element per column. Column
//! names are sanitized into tag names, so read-back is by name, never by
//! position.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::escape::sanitize_xml_name;
use super::{BomDocument, BomRenderer, OutputFormat, ReportError};
use crate::config::BomConfig;

/// XML renderer.
#[derive(Debug, Default)]
pub struct XmlRenderer;

impl XmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), ReportError> {
    writer
        .write_event(event)
        .map_err(|e| ReportError::Xml(e.to_string()))
}

impl BomRenderer for XmlRenderer {
    fn render(&self, document: &BomDocument, config: &BomConfig) -> Result<Vec<u8>, ReportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        emit(&mut writer, Event::Start(BytesStart::new("bom")))?;

        let tags: Vec<String> = document
            .columns
            .iter()
            .map(|c| sanitize_xml_name(c))
            .collect();

        for row in document.rows(!config.ignore_dnf) {
            emit(&mut writer, Event::Start(BytesStart::new("group")))?;
            for (tag, cell) in tags.iter().zip(row) {
                emit(&mut writer, Event::Start(BytesStart::new(tag.as_str())))?;
                emit(&mut writer, Event::Text(BytesText::new(cell)))?;
                emit(&mut writer, Event::End(BytesEnd::new(tag.as_str())))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new("group")))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("bom")))?;
        Ok(writer.into_inner())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Xml
    }
}
