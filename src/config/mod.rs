//! Resolved run configuration and its validation.

mod types;
mod validation;

pub use types::{
    BomConfig, ColumnSpec, FilterMode, FilterRule, HtmlOptions, SortMode, XlsxOptions, XlsxTheme,
    QUANTITY_COLUMN, REFERENCES_COLUMN, ROW_COLUMN, SHEETPATH_COLUMN,
};
pub use validation::{ConfigError, Validatable};
