//! XLSX renderer.
//!
//! Workbook layout: optional title row, optional info block, optional
//! stats block (sharing rows with the info block, two columns to its
//! right), then the header row and data rows. Each block can be disabled
//! independently and removes exactly its own cells. An optional logo
//! image floats at the top-right corner without shifting any cells.

use rust_xlsxwriter::{Color, Format, FormatBorder, Image, Workbook};

use super::{BomDocument, BomRenderer, OutputFormat, ReportError};
use crate::config::{BomConfig, XlsxOptions, XlsxTheme};

/// XLSX renderer.
#[derive(Debug, Default)]
pub struct XlsxRenderer;

impl XlsxRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Accent colors of a named theme: (band, light band, band font).
fn theme_colors(theme: XlsxTheme) -> (Color, Color, Color) {
    match theme {
        XlsxTheme::ModernBlue => (Color::RGB(0x4F81BD), Color::RGB(0xDCE6F1), Color::White),
        XlsxTheme::ModernGreen => (Color::RGB(0x9BBB59), Color::RGB(0xEBF1DE), Color::White),
        XlsxTheme::ModernRed => (Color::RGB(0xC0504D), Color::RGB(0xF2DCDB), Color::White),
        XlsxTheme::Classic => (Color::RGB(0xD9D9D9), Color::RGB(0xF2F2F2), Color::Black),
    }
}

/// The cell grid above the header row: title, info and stats blocks.
///
/// Kept separate from workbook serialization so the layout itself is
/// directly testable. With both blocks enabled they share five rows, the
/// info block in columns 0/1 and the stats block in columns 2/3.
pub(crate) fn header_grid(document: &BomDocument, options: &XlsxOptions) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<String>> = Vec::new();

    if let Some(title) = &options.title {
        grid.push(vec![title.clone()]);
    }

    if options.show_info || options.show_stats {
        let info = document.info.rows();
        let stats = document.stats.rows();
        for i in 0..5 {
            let mut row = Vec::new();
            if options.show_info {
                row.push(info[i].0.to_string());
                row.push(info[i].1.to_string());
            }
            if options.show_stats {
                row.push(stats[i].0.to_string());
                row.push(stats[i].1.clone());
            }
            grid.push(row);
        }
    }

    grid
}

impl BomRenderer for XlsxRenderer {
    fn render(&self, document: &BomDocument, config: &BomConfig) -> Result<Vec<u8>, ReportError> {
        let options = &config.xlsx;
        let (band, light, band_font) = theme_colors(options.theme);

        let title_format = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_background_color(light);
        let label_format = Format::new().set_bold();
        let header_format = Format::new()
            .set_bold()
            .set_background_color(band)
            .set_font_color(band_font)
            .set_border(FormatBorder::Thin);
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("BOM")?;

        if let Some(logo) = &options.logo {
            let image = Image::new_from_buffer(logo)?;
            let anchor_col = document.columns.len() as u16 + 1;
            worksheet.insert_image(0, anchor_col, &image)?;
        }

        let mut row_index: u32 = 0;
        let title_rows = usize::from(options.title.is_some());
        for (i, grid_row) in header_grid(document, options).iter().enumerate() {
            for (col, text) in grid_row.iter().enumerate() {
                let is_title = i < title_rows;
                let is_label = !is_title && col % 2 == 0;
                if is_title {
                    worksheet.write_string_with_format(row_index, col as u16, text, &title_format)?;
                } else if is_label {
                    worksheet.write_string_with_format(row_index, col as u16, text, &label_format)?;
                } else {
                    worksheet.write_string(row_index, col as u16, text)?;
                }
            }
            row_index += 1;
        }

        for (col, name) in document.columns.iter().enumerate() {
            worksheet.write_string_with_format(row_index, col as u16, name, &header_format)?;
        }
        row_index += 1;

        for row in document.rows(!config.ignore_dnf) {
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string(row_index, col as u16, cell)?;
            }
            row_index += 1;
        }

        for (col, name) in document.columns.iter().enumerate() {
            let widest = document
                .rows(!config.ignore_dnf)
                .map(|row| row.get(col).map_or(0, |c| c.chars().count()))
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0);
            let width = (widest + 2).clamp(8, 50);
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        Ok(workbook.save_to_buffer()?)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Xlsx
    }
}
