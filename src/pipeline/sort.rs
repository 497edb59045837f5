//! Group ordering.

use crate::config::{BomConfig, SortMode};
use crate::model::refdes::{class_prefix, natural_cmp};
use crate::model::BomGroup;

/// Order groups for output.
///
/// Type-rank mode ranks by the class prefix of each group's lowest member
/// reference against the configured priority table (`~` is the slot for
/// unlisted prefixes), then orders within a class by that reference,
/// compared naturally so `R9` precedes `R10`. The sort is stable: groups
/// comparing equal keep their first-seen order. `SortMode::None` leaves
/// the grouper's emission order untouched.
pub fn sort_groups(mut groups: Vec<BomGroup>, config: &BomConfig) -> Vec<BomGroup> {
    if config.sort_mode == SortMode::None {
        return groups;
    }

    let mut keyed: Vec<(usize, String, BomGroup)> = groups
        .drain(..)
        .map(|group| {
            let lowest = group
                .members
                .iter()
                .map(|m| m.reference.clone())
                .min_by(|a, b| natural_cmp(a, b))
                .unwrap_or_default();
            (class_rank(config, &lowest), lowest, group)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| natural_cmp(&a.1, &b.1)));
    keyed.into_iter().map(|(_, _, group)| group).collect()
}

/// Rank of a reference's class prefix in the priority table.
fn class_rank(config: &BomConfig, reference: &str) -> usize {
    let prefix = class_prefix(reference);
    let slot = |name: &str| {
        config
            .sort_order
            .iter()
            .position(|p| p.eq_ignore_ascii_case(name))
    };
    slot(prefix)
        .or_else(|| slot("~"))
        .unwrap_or(config.sort_order.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentRecord;

    fn group_of(references: &[&str]) -> BomGroup {
        let mut members = references.iter().map(|r| ComponentRecord::new(*r));
        let mut group = BomGroup::new(members.next().unwrap());
        for member in members {
            group.absorb(member, true);
        }
        group
    }

    fn first_refs(groups: &[BomGroup]) -> Vec<String> {
        groups
            .iter()
            .map(|g| g.members[0].reference.clone())
            .collect()
    }

    #[test]
    fn test_capacitors_rank_before_resistors() {
        let config = BomConfig::default();
        let sorted = sort_groups(
            vec![group_of(&["R1"]), group_of(&["C1"]), group_of(&["L1"])],
            &config,
        );
        assert_eq!(first_refs(&sorted), ["C1", "R1", "L1"]);
    }

    #[test]
    fn test_numeric_ordering_within_a_class() {
        let config = BomConfig::default();
        let sorted = sort_groups(
            vec![group_of(&["R10"]), group_of(&["R9"]), group_of(&["R1"])],
            &config,
        );
        assert_eq!(first_refs(&sorted), ["R1", "R9", "R10"]);
    }

    #[test]
    fn test_group_ordered_by_its_lowest_member() {
        let config = BomConfig::default();
        // R2 is the lowest member even though R5 was seen first
        let sorted = sort_groups(
            vec![group_of(&["R5", "R2"]), group_of(&["R3"])],
            &config,
        );
        assert_eq!(first_refs(&sorted), ["R5", "R3"]);
    }

    #[test]
    fn test_unlisted_prefixes_take_the_tilde_slot() {
        let config = BomConfig::default();
        // "ZZ" is not in the table; the ~ slot ranks it after A, before HS
        let sorted = sort_groups(
            vec![group_of(&["HS1"]), group_of(&["ZZ1"]), group_of(&["A1"])],
            &config,
        );
        assert_eq!(first_refs(&sorted), ["A1", "ZZ1", "HS1"]);
    }

    #[test]
    fn test_none_mode_preserves_emission_order() {
        let mut config = BomConfig::default();
        config.sort_mode = SortMode::None;
        let sorted = sort_groups(vec![group_of(&["R1"]), group_of(&["C1"])], &config);
        assert_eq!(first_refs(&sorted), ["R1", "C1"]);
    }

    #[test]
    fn test_malformed_references_fall_back_to_natural_order() {
        let config = BomConfig::default();
        let sorted = sort_groups(
            vec![group_of(&["XTAL"]), group_of(&["XA"])],
            &config,
        );
        assert_eq!(first_refs(&sorted), ["XA", "XTAL"]);
    }
}
