//! Pipeline orchestration.
//!
//! Stages run in strict sequence on one in-memory record set: unit
//! collapse → filter → group → statistics → sort → column projection.
//! Configuration is validated up front, so a structurally broken config
//! aborts before any output exists; everything downstream degrades
//! gracefully and surfaces diagnostics on the finished document.

mod alias;
mod columns;
mod filter;
mod grouping;
mod refs;
mod sort;
mod units;

pub use alias::AliasTable;
pub use filter::{apply as apply_filters, compile_rules, CompiledRule};
pub use grouping::group;
pub use refs::{compact, expand, render as render_references};
pub use sort::sort_groups;
pub use units::collapse;

use crate::config::{BomConfig, Validatable};
use crate::error::{BomError, Result};
use crate::model::ComponentRecord;
use crate::reports::{create_renderer, BomDocument, BomStats, DocumentInfo, OutputFormat};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The configuration was rejected before any output was produced
    #[error("Configuration rejected: {source}")]
    ConfigRejected {
        #[source]
        source: anyhow::Error,
    },

    /// A renderer failed to produce its output
    #[error("Report failed for {format}: {source}")]
    ReportFailed {
        format: OutputFormat,
        #[source]
        source: anyhow::Error,
    },
}

/// Run the full pipeline, producing the abstract output document.
///
/// The input sequence is consumed once; repeated runs over identical
/// input and configuration yield identical documents.
pub fn run(
    records: Vec<ComponentRecord>,
    config: &BomConfig,
    info: DocumentInfo,
) -> Result<BomDocument> {
    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(BomError::config(joined));
    }
    let rules = filter::compile_rules(&config.filters)?;

    let records = units::collapse(records);
    let records = filter::apply(records, &rules);
    let groups = grouping::group(records, config);

    let stats = BomStats {
        n_groups: groups.len(),
        n_components: groups.iter().map(|g| g.len()).sum(),
        n_fitted: groups.iter().map(|g| g.fitted_count()).sum(),
        number_boards: config.number_boards,
        n_build: groups.iter().map(|g| g.fitted_count()).sum::<usize>()
            * config.number_boards as usize,
    };
    tracing::debug!(
        groups = stats.n_groups,
        components = stats.n_components,
        fitted = stats.n_fitted,
        "grouped component records"
    );

    let groups = sort::sort_groups(groups, config);
    let (columns, fitted_rows, dnf_rows) = columns::project(&groups, config)?;

    let collisions = groups
        .iter()
        .flat_map(|g| g.collisions.iter().cloned())
        .collect();

    Ok(BomDocument {
        columns,
        fitted_rows,
        dnf_rows,
        stats,
        info,
        collisions,
    })
}

/// Run the pipeline and render every requested format.
///
/// Convenience wrapper for callers that want the final bytes per format
/// in one call; the document is computed once and shared.
pub fn generate_outputs(
    records: Vec<ComponentRecord>,
    config: &BomConfig,
    info: DocumentInfo,
    formats: &[OutputFormat],
) -> std::result::Result<Vec<(OutputFormat, Vec<u8>)>, PipelineError> {
    let document = run(records, config, info).map_err(|e| PipelineError::ConfigRejected {
        source: anyhow::Error::new(e),
    })?;

    formats
        .iter()
        .map(|&format| {
            let bytes = create_renderer(format)
                .render(&document, config)
                .map_err(|e| PipelineError::ReportFailed {
                    format,
                    source: anyhow::Error::new(e),
                })?;
            Ok((format, bytes))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FilterMode, FilterRule};

    fn fixture() -> Vec<ComponentRecord> {
        vec![
            ComponentRecord::new("R1")
                .with_field("Part", "R")
                .with_field("Value", "10K")
                .with_field("Footprint", "R_0805"),
            ComponentRecord::new("R2")
                .with_field("Part", "R")
                .with_field("Value", "10K")
                .with_field("Footprint", "R_0805"),
            ComponentRecord::new("C1")
                .with_field("Part", "C")
                .with_field("Value", "100nF")
                .with_field("Footprint", "C_0603"),
            ComponentRecord::new("R6")
                .with_field("Part", "R")
                .with_field("Value", "1K")
                .with_field("Footprint", "R_0805")
                .with_fitted(false),
        ]
    }

    fn simple_config() -> BomConfig {
        let mut config = BomConfig::default();
        config.columns = BomConfig::default_columns()
            .into_iter()
            .filter(|c| {
                !c.source.eq_ignore_ascii_case("Description")
                    && !c.source.eq_ignore_ascii_case("Datasheet")
                    && !c.source.eq_ignore_ascii_case("Config")
            })
            .collect();
        config
    }

    #[test]
    fn test_run_produces_partitioned_document() {
        let doc = run(fixture(), &simple_config(), DocumentInfo::new()).unwrap();
        assert_eq!(doc.fitted_rows.len(), 2);
        assert_eq!(doc.dnf_rows.len(), 1);
        assert_eq!(doc.stats.n_groups, 3);
        assert_eq!(doc.stats.n_components, 4);
        assert_eq!(doc.stats.n_fitted, 3);
        assert_eq!(doc.stats.n_build, 3);
    }

    #[test]
    fn test_board_count_scales_build_total() {
        let mut config = simple_config();
        config.number_boards = 5;
        let doc = run(fixture(), &config, DocumentInfo::new()).unwrap();
        assert_eq!(doc.stats.n_build, 15);
    }

    #[test]
    fn test_invalid_config_aborts() {
        let mut config = simple_config();
        config.filters.push(FilterRule::new(
            "Value",
            "[bad",
            FilterMode::ExcludeAny,
        ));
        let err = run(fixture(), &config, DocumentInfo::new()).unwrap_err();
        assert!(matches!(err, BomError::Config(_)));
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let doc = run(Vec::new(), &simple_config(), DocumentInfo::new()).unwrap();
        assert!(doc.fitted_rows.is_empty());
        assert!(doc.dnf_rows.is_empty());
        assert_eq!(doc.stats.n_groups, 0);
    }

    #[test]
    fn test_generate_outputs_renders_each_format() {
        let outputs = generate_outputs(
            fixture(),
            &simple_config(),
            DocumentInfo::new(),
            &[OutputFormat::Csv, OutputFormat::Xml],
        )
        .unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].0, OutputFormat::Csv);
        assert!(!outputs[1].1.is_empty());
    }
}
