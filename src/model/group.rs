//! Grouped components and field merging.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ComponentRecord;

/// A disagreement between group members on a field value.
///
/// Collisions are diagnostics, not errors: the group keeps the first-seen
/// value and the run completes. They are collected per group and surfaced
/// on the finished document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCollision {
    /// Reference of the member whose value was rejected
    pub reference: String,
    /// Field the members disagree on
    pub field: String,
    /// First-seen value, kept in the output
    pub kept: String,
    /// Conflicting value that was discarded
    pub rejected: String,
}

impl std::fmt::Display for FieldCollision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field conflict: {} ({}) '{}' != '{}'",
            self.reference, self.field, self.kept, self.rejected
        )
    }
}

/// A set of components sharing one group key, with merged display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomGroup {
    /// Members in first-seen order
    pub members: Vec<ComponentRecord>,
    /// Merged output field values, one per field name
    pub fields: IndexMap<String, String>,
    /// Field disagreements recorded while merging
    pub collisions: Vec<FieldCollision>,
}

impl BomGroup {
    /// Start a group from its first member.
    pub fn new(first: ComponentRecord) -> Self {
        Self {
            fields: first.fields.clone(),
            members: vec![first],
            collisions: Vec::new(),
        }
    }

    /// Look up a merged field value by name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Merge another member into the group.
    ///
    /// With `merge_blanks`, a blank merged value is filled silently from a
    /// member that has one. Without it, any disagreement (blank or not) is
    /// recorded as a collision; the first-seen value always wins.
    pub fn absorb(&mut self, record: ComponentRecord, merge_blanks: bool) {
        for (name, incoming) in &record.fields {
            let existing = self
                .fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(k, v)| (k.clone(), v.clone()));

            match existing {
                None => {
                    if merge_blanks || incoming.is_empty() {
                        self.fields.insert(name.clone(), incoming.clone());
                    } else {
                        // Strict mode: an absent field counts as blank, so a
                        // nonblank incoming value is a disagreement.
                        self.fields.insert(name.clone(), String::new());
                        self.collisions.push(FieldCollision {
                            reference: record.reference.clone(),
                            field: name.clone(),
                            kept: String::new(),
                            rejected: incoming.clone(),
                        });
                    }
                }
                Some((key, current)) => {
                    if current.eq_ignore_ascii_case(incoming) {
                        continue;
                    }
                    if current.is_empty() && merge_blanks {
                        self.fields.insert(key, incoming.clone());
                    } else if incoming.is_empty() && merge_blanks {
                        // Keep the nonblank merged value
                    } else {
                        self.collisions.push(FieldCollision {
                            reference: record.reference.clone(),
                            field: key,
                            kept: current,
                            rejected: incoming.clone(),
                        });
                    }
                }
            }
        }
        self.members.push(record);
    }

    /// References of all members, in first-seen order.
    pub fn references(&self) -> Vec<String> {
        self.members.iter().map(|m| m.reference.clone()).collect()
    }

    /// Number of members (one per physical component).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of fitted members.
    pub fn fitted_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_fitted()).count()
    }

    /// A group is fitted when at least one member is fitted.
    pub fn is_fitted(&self) -> bool {
        self.members.iter().any(ComponentRecord::is_fitted)
    }

    /// Whether any member carries the DNC annotation.
    pub fn has_dnc(&self) -> bool {
        self.members.iter().any(ComponentRecord::is_dnc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor(reference: &str, value: &str, footprint: &str) -> ComponentRecord {
        ComponentRecord::new(reference)
            .with_field("Value", value)
            .with_field("Footprint", footprint)
    }

    #[test]
    fn test_absorb_agreeing_member() {
        let mut group = BomGroup::new(resistor("R1", "10K", "R_0805"));
        group.absorb(resistor("R2", "10K", "R_0805"), true);

        assert_eq!(group.len(), 2);
        assert_eq!(group.references(), ["R1", "R2"]);
        assert!(group.collisions.is_empty());
    }

    #[test]
    fn test_case_difference_is_not_a_collision() {
        let mut group = BomGroup::new(resistor("R1", "10K", "R_0805"));
        group.absorb(resistor("R2", "10k", "r_0805"), true);

        assert!(group.collisions.is_empty());
        // First-seen casing is kept
        assert_eq!(group.field("Value"), Some("10K"));
    }

    #[test]
    fn test_blank_fill_with_merge() {
        let mut group = BomGroup::new(resistor("R1", "10K", ""));
        group.absorb(resistor("R2", "10K", "R_0805"), true);

        assert_eq!(group.field("Footprint"), Some("R_0805"));
        assert!(group.collisions.is_empty());
    }

    #[test]
    fn test_blank_disagreement_is_collision_in_strict_mode() {
        let mut group = BomGroup::new(resistor("R1", "10K", ""));
        group.absorb(resistor("R2", "10K", "R_0805"), false);

        assert_eq!(group.collisions.len(), 1);
        assert_eq!(group.collisions[0].field, "Footprint");
        // First-seen (blank) value wins
        assert_eq!(group.field("Footprint"), Some(""));
    }

    #[test]
    fn test_nonblank_disagreement_keeps_first_seen() {
        let mut group = BomGroup::new(
            resistor("R1", "10K", "R_0805").with_field("Tolerance", "5%"),
        );
        group.absorb(
            resistor("R2", "10K", "R_0805").with_field("Tolerance", "10%"),
            true,
        );

        assert_eq!(group.field("Tolerance"), Some("5%"));
        let collision = &group.collisions[0];
        assert_eq!(collision.reference, "R2");
        assert_eq!(collision.kept, "5%");
        assert_eq!(collision.rejected, "10%");
        assert!(collision.to_string().contains("Field conflict"));
    }

    #[test]
    fn test_fitted_and_dnc_state() {
        let mut group = BomGroup::new(resistor("R1", "10K", "R_0805").with_fitted(false));
        assert!(!group.is_fitted());

        group.absorb(resistor("R2", "10K", "R_0805"), true);
        assert!(group.is_fitted());
        assert_eq!(group.fitted_count(), 1);
        assert!(!group.has_dnc());

        group.absorb(resistor("R3", "10K", "R_0805").with_dnc(true), true);
        assert!(group.has_dnc());
    }
}
