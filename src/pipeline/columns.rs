//! Column projection: the grouped components become the output matrix.
//!
//! Fitted and DNF groups project into two row sets sharing one column
//! layout; renderers decide how the DNF rows surface. Cell text produced
//! here is final; every renderer must emit it byte-for-byte.

use crate::config::{
    BomConfig, ColumnSpec, QUANTITY_COLUMN, REFERENCES_COLUMN, ROW_COLUMN, SHEETPATH_COLUMN,
};
use crate::error::{BomError, Result};
use crate::model::BomGroup;

use super::refs;

/// What a configured column reads from.
enum ColumnSource {
    Row,
    References,
    Quantity,
    Sheetpath,
    Field(String),
}

/// Project groups onto the configured columns.
///
/// Returns the header plus the fitted and DNF row sets. Row numbering is
/// continuous across fitted rows then DNF rows. Unknown source fields are
/// a fatal configuration error, except against an empty group set, where
/// there is nothing to check a name against and the result is a valid
/// empty table.
pub fn project(
    groups: &[BomGroup],
    config: &BomConfig,
) -> Result<(Vec<String>, Vec<Vec<String>>, Vec<Vec<String>>)> {
    let specs: Vec<&ColumnSpec> = config
        .columns
        .iter()
        .filter(|c| config.number_rows || !c.source.eq_ignore_ascii_case(ROW_COLUMN))
        .collect();

    let mut resolved = Vec::with_capacity(specs.len());
    for spec in &specs {
        resolved.push(resolve(&spec.source, groups)?);
        for join in &spec.join {
            if !field_exists(join, groups) {
                return Err(BomError::unknown_column(join.clone()));
            }
        }
    }

    let header: Vec<String> = specs.iter().map(|s| s.output_name().to_string()).collect();

    let mut row_number = 0usize;
    let mut build = |group: &BomGroup| -> Vec<String> {
        row_number += 1;
        specs
            .iter()
            .zip(&resolved)
            .map(|(&spec, source)| cell(group, spec, source, config, row_number))
            .collect()
    };

    let fitted_rows: Vec<Vec<String>> = groups
        .iter()
        .filter(|g| g.is_fitted())
        .map(&mut build)
        .collect();
    let dnf_rows: Vec<Vec<String>> = groups
        .iter()
        .filter(|g| !g.is_fitted())
        .map(&mut build)
        .collect();

    Ok((header, fitted_rows, dnf_rows))
}

fn resolve(source: &str, groups: &[BomGroup]) -> Result<ColumnSource> {
    if source.eq_ignore_ascii_case(ROW_COLUMN) {
        Ok(ColumnSource::Row)
    } else if source.eq_ignore_ascii_case(REFERENCES_COLUMN) {
        Ok(ColumnSource::References)
    } else if source.eq_ignore_ascii_case(QUANTITY_COLUMN) {
        Ok(ColumnSource::Quantity)
    } else if source.eq_ignore_ascii_case(SHEETPATH_COLUMN) {
        Ok(ColumnSource::Sheetpath)
    } else if field_exists(source, groups) {
        Ok(ColumnSource::Field(source.to_string()))
    } else {
        Err(BomError::unknown_column(source))
    }
}

fn field_exists(name: &str, groups: &[BomGroup]) -> bool {
    groups.is_empty() || groups.iter().any(|g| g.field(name).is_some())
}

fn cell(
    group: &BomGroup,
    spec: &ColumnSpec,
    source: &ColumnSource,
    config: &BomConfig,
    row_number: usize,
) -> String {
    match source {
        ColumnSource::Row => row_number.to_string(),
        ColumnSource::References => {
            refs::render(&group.references(), config.use_alt, &config.ref_separator)
        }
        ColumnSource::Quantity => {
            if group.is_fitted() {
                let count = group.fitted_count().to_string();
                if group.has_dnc() {
                    format!("{count} (DNC)")
                } else {
                    count
                }
            } else {
                format!("{} (DNF)", group.len())
            }
        }
        ColumnSource::Sheetpath => {
            let mut paths: Vec<&str> = Vec::new();
            for member in &group.members {
                if !member.sheet_path.is_empty() && !paths.contains(&member.sheet_path.as_str()) {
                    paths.push(&member.sheet_path);
                }
            }
            paths.join(" ")
        }
        ColumnSource::Field(name) => {
            let mut parts: Vec<&str> = vec![group.field(name).unwrap_or("")];
            for join in &spec.join {
                parts.push(group.field(join).unwrap_or(""));
            }
            parts.retain(|p| !p.is_empty());
            parts.join(&spec.separator)
        }
    }
}
