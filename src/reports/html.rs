//! HTML renderer.
//!
//! A standalone page with embedded styles: optional title/info/stats
//! header blocks, the main table, and a separate DNF table with identical
//! headers when DNF rows are kept out of the main table.

use std::fmt::Write as _;

use super::escape::escape_html;
use super::{BomDocument, BomRenderer, OutputFormat, ReportError};
use crate::config::BomConfig;

/// HTML renderer.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn get_styles() -> &'static str {
        r#"
    <style>
        :root {
            --text-color: #24292f;
            --accent-color: #0a5dab;
            --border-color: #d0d7de;
            --band-bg: #dce8f5;
            --dnf-band-bg: #f5e0dc;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: var(--text-color);
            margin: 0;
            padding: 20px;
            line-height: 1.5;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
        }

        h1, h2 {
            color: var(--accent-color);
        }

        .meta p, .stats p {
            margin: 2px 0;
        }

        .label {
            display: inline-block;
            min-width: 10em;
            font-weight: 600;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 30px;
        }

        th, td {
            padding: 6px 10px;
            text-align: left;
            border: 1px solid var(--border-color);
        }

        th {
            background-color: var(--band-bg);
            font-weight: 600;
        }

        table.dnf th {
            background-color: var(--dnf-band-bg);
        }
    </style>
"#
    }

    fn write_table<'a>(
        out: &mut String,
        columns: &[String],
        rows: impl Iterator<Item = &'a Vec<String>>,
        link_urls: bool,
        dnf: bool,
    ) -> std::fmt::Result {
        let class = if dnf { " class=\"dnf\"" } else { "" };
        writeln!(out, "<table{class}>")?;
        writeln!(out, "<thead><tr>")?;
        for column in columns {
            writeln!(out, "<th>{}</th>", escape_html(column))?;
        }
        writeln!(out, "</tr></thead>")?;
        writeln!(out, "<tbody>")?;
        for row in rows {
            write!(out, "<tr>")?;
            for cell in row {
                if link_urls && (cell.starts_with("http://") || cell.starts_with("https://")) {
                    let escaped = escape_html(cell);
                    write!(out, "<td><a href=\"{escaped}\">{escaped}</a></td>")?;
                } else {
                    write!(out, "<td>{}</td>", escape_html(cell))?;
                }
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</tbody>")?;
        writeln!(out, "</table>")?;
        Ok(())
    }
}

impl BomRenderer for HtmlRenderer {
    fn render(&self, document: &BomDocument, config: &BomConfig) -> Result<Vec<u8>, ReportError> {
        let options = &config.html;
        let mut out = String::new();

        let page_title = options.title.as_deref().unwrap_or("Bill of Materials");
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape_html(page_title))?;
        out.push_str(Self::get_styles());
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<div class=\"container\">")?;

        if let Some(title) = &options.title {
            writeln!(out, "<h1>{}</h1>", escape_html(title))?;
        }

        if options.show_info {
            writeln!(out, "<div class=\"meta\">")?;
            for (label, value) in document.info.rows() {
                writeln!(
                    out,
                    "<p><span class=\"label\">{}</span> {}</p>",
                    escape_html(label),
                    escape_html(value)
                )?;
            }
            writeln!(out, "</div>")?;
        }

        if options.show_stats {
            writeln!(out, "<div class=\"stats\">")?;
            for (label, value) in document.stats.rows() {
                writeln!(
                    out,
                    "<p><span class=\"label\">{}</span> {}</p>",
                    escape_html(label),
                    escape_html(&value)
                )?;
            }
            writeln!(out, "</div>")?;
        }

        Self::write_table(
            &mut out,
            &document.columns,
            document.rows(!config.ignore_dnf),
            options.link_urls,
            false,
        )?;

        if config.ignore_dnf && options.generate_dnf && !document.dnf_rows.is_empty() {
            writeln!(out, "<h2>Optional Components (DNF)</h2>")?;
            Self::write_table(
                &mut out,
                &document.columns,
                document.dnf_rows.iter(),
                options.link_urls,
                true,
            )?;
        }

        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out.into_bytes())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> BomDocument {
        BomDocument {
            columns: vec!["References".to_string(), "Datasheet".to_string()],
            fitted_rows: vec![vec![
                "R1".to_string(),
                "https://example.com/r.pdf".to_string(),
            ]],
            dnf_rows: vec![vec!["R6".to_string(), String::new()]],
            ..BomDocument::default()
        }
    }

    fn render_to_string(config: &BomConfig) -> String {
        let bytes = HtmlRenderer::new().render(&document(), config).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_two_tables_with_identical_headers() {
        let out = render_to_string(&BomConfig::default());
        assert_eq!(out.matches("<table").count(), 2);
        assert_eq!(out.matches("<th>References</th>").count(), 2);
        assert!(out.contains("Optional Components (DNF)"));
        assert!(out.contains("<td>R6</td>"));
    }

    #[test]
    fn test_dnf_table_suppressed() {
        let mut config = BomConfig::default();
        config.html.generate_dnf = false;
        let out = render_to_string(&config);
        assert_eq!(out.matches("<table").count(), 1);
        assert!(!out.contains("R6"));
    }

    #[test]
    fn test_dnf_rows_flatten_into_main_table() {
        let mut config = BomConfig::default();
        config.ignore_dnf = false;
        let out = render_to_string(&config);
        // One table holding both fitted and DNF rows
        assert_eq!(out.matches("<table").count(), 1);
        assert!(out.contains("<td>R6</td>"));
    }

    #[test]
    fn test_empty_dnf_set_omits_the_table() {
        let mut doc = document();
        doc.dnf_rows.clear();
        let out = String::from_utf8(
            HtmlRenderer::new()
                .render(&doc, &BomConfig::default())
                .unwrap(),
        )
        .unwrap();
        assert_eq!(out.matches("<table").count(), 1);
    }

    #[test]
    fn test_url_cells_become_links() {
        let out = render_to_string(&BomConfig::default());
        assert!(out.contains("<a href=\"https://example.com/r.pdf\">"));

        let mut config = BomConfig::default();
        config.html.link_urls = false;
        let out = render_to_string(&config);
        assert!(!out.contains("<a href"));
    }

    #[test]
    fn test_header_blocks_toggle() {
        let out = render_to_string(&BomConfig::default());
        assert!(out.contains("Schematic:"));
        assert!(out.contains("Component Groups:"));
        assert!(out.contains("<h1>Bill of Materials</h1>"));

        let mut config = BomConfig::default();
        config.html.title = None;
        config.html.show_info = false;
        config.html.show_stats = false;
        let out = render_to_string(&config);
        assert!(!out.contains("Schematic:"));
        assert!(!out.contains("Component Groups:"));
        assert!(!out.contains("<h1>"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let mut doc = document();
        doc.fitted_rows[0][0] = "R<1>".to_string();
        let out = String::from_utf8(
            HtmlRenderer::new()
                .render(&doc, &BomConfig::default())
                .unwrap(),
        )
        .unwrap();
        assert!(out.contains("<td>R&lt;1&gt;</td>"));
    }
}
