//! Group key construction and stable grouping.
//!
//! Groups appear in first-seen order of their key. Matching is a linear
//! scan over existing groups rather than a hash lookup so that the
//! blank-matches-any rule of `merge_blank_fields` can work: a blank key
//! field has no single hashable value.

use crate::config::BomConfig;
use crate::model::{BomGroup, ComponentRecord};

/// Bucket records into groups according to the configured key fields.
///
/// With grouping disabled every record forms its own singleton group,
/// keyed by its own reference; filtering, sorting and rendering behave
/// unchanged. Field collisions are recorded on the owning group and
/// logged as warnings.
pub fn group(records: Vec<ComponentRecord>, config: &BomConfig) -> Vec<BomGroup> {
    if !config.group_components {
        return records.into_iter().map(BomGroup::new).collect();
    }

    let mut groups: Vec<BomGroup> = Vec::new();
    for record in records {
        match groups
            .iter()
            .position(|g| key_matches(config, g, &record))
        {
            Some(index) => {
                let existing = &mut groups[index];
                let before = existing.collisions.len();
                existing.absorb(record, config.merge_blank_fields);
                for collision in &existing.collisions[before..] {
                    tracing::warn!("{collision}");
                }
            }
            None => groups.push(BomGroup::new(record)),
        }
    }
    groups
}

/// Whether a record's key equals a group's key.
fn key_matches(config: &BomConfig, group: &BomGroup, record: &ComponentRecord) -> bool {
    let connectors = config.group_connectors
        && config.is_connector(&record.reference)
        && group
            .members
            .first()
            .is_some_and(|m| config.is_connector(&m.reference));

    config.group_fields.iter().all(|field| {
        if connectors && field.eq_ignore_ascii_case("Value") {
            return true;
        }
        let ours = key_value(config, field, group.field(field).unwrap_or(""));
        let theirs = key_value(config, field, record.field(field).unwrap_or(""));
        if config.merge_blank_fields && (ours.is_empty() || theirs.is_empty()) {
            return true;
        }
        ours == theirs
    })
}

/// Comparison value of one key field: trimmed, lowercased, and routed
/// through the alias table for the type (`Part`) field.
fn key_value(config: &BomConfig, field: &str, raw: &str) -> String {
    let trimmed = raw.trim();
    if field.eq_ignore_ascii_case("Part") {
        config.aliases.canonical(trimmed)
    } else {
        trimmed.to_lowercase()
    }
}
