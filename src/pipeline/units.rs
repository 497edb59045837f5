//! Multi-unit collapse.
//!
//! A multi-unit symbol (one physical part drawn as several schematic
//! units) arrives as several records sharing one reference. They collapse
//! into a single logical record before filtering and grouping, so a part
//! is never double-counted or split across groups. The upstream source
//! usually deduplicates already; this stage makes the guarantee local.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::model::ComponentRecord;

/// Collapse records sharing a reference into one logical record each.
///
/// First-seen field values win and blanks fill from later units; the
/// collapsed record is fitted if any unit is fitted and DNC if any unit
/// is DNC. Input order of first appearances is preserved.
pub fn collapse(records: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
    let mut by_reference: IndexMap<String, ComponentRecord> = IndexMap::new();

    for record in records {
        match by_reference.entry(record.reference.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                for (name, value) in &record.fields {
                    let position = existing
                        .fields
                        .iter()
                        .position(|(k, _)| k.eq_ignore_ascii_case(name));
                    match position {
                        None => {
                            existing.fields.insert(name.clone(), value.clone());
                        }
                        Some(index) => {
                            if let Some((_, v)) = existing.fields.get_index_mut(index) {
                                if v.is_empty() {
                                    *v = value.clone();
                                }
                            }
                        }
                    }
                }
                existing.fitted |= record.fitted;
                existing.dnc |= record.dnc;
                if existing.sheet_path.is_empty() {
                    existing.sheet_path = record.sheet_path;
                }
                existing.unit = existing.unit.min(record.unit);
            }
        }
    }

    by_reference.into_values().collect()
}
