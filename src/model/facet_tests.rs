//! Tests for tri-state facet filters.

use super::*;
use crate::test_support::{built, kit, printer};

// ===== TriState Tests =====

#[test]
fn cycle_visits_all_three_states_and_returns() {
    let start = TriState::Unset;

    assert_eq!(start.cycle(), TriState::Yes);
    assert_eq!(start.cycle().cycle(), TriState::No);
    assert_eq!(start.cycle().cycle().cycle(), TriState::Unset);
}

#[test]
fn unset_admits_both_flag_values() {
    assert!(TriState::Unset.admits(true));
    assert!(TriState::Unset.admits(false));
}

#[test]
fn yes_admits_only_set_flags() {
    assert!(TriState::Yes.admits(true));
    assert!(!TriState::Yes.admits(false));
}

#[test]
fn no_admits_only_clear_flags() {
    assert!(!TriState::No.admits(true));
    assert!(TriState::No.admits(false));
}

#[test]
fn default_is_unset() {
    assert_eq!(TriState::default(), TriState::Unset);
}

#[test]
fn from_optional_flag_maps_all_three_cases() {
    assert_eq!(TriState::from(None), TriState::Unset);
    assert_eq!(TriState::from(Some(true)), TriState::Yes);
    assert_eq!(TriState::from(Some(false)), TriState::No);
}

#[test]
fn markers_distinguish_all_states() {
    assert_eq!(TriState::Unset.marker(), "[-]");
    assert_eq!(TriState::Yes.marker(), "[x]");
    assert_eq!(TriState::No.marker(), "[ ]");
}

// ===== FacetFilter Tests =====

#[test]
fn default_filter_is_unconstrained_and_admits_everything() {
    let filter = FacetFilter::default();

    assert!(filter.is_unconstrained());
    assert!(filter.admits(&kit(1, "Kit")));
    assert!(filter.admits(&built(2, "Built")));
    assert!(filter.admits(&printer(3, "Neither")));
}

#[test]
fn facets_combine_by_conjunction() {
    let filter = FacetFilter {
        diy_kit: TriState::Yes,
        built_printer: TriState::No,
    };

    assert!(filter.admits(&kit(1, "Kit only")), "kit=true built=false passes");
    assert!(!filter.admits(&built(2, "Built only")));

    let both = Printer {
        diy_kit: true,
        built_printer: true,
        ..printer(3, "Both")
    };
    assert!(!filter.admits(&both), "built:no must reject built=true");
}

#[test]
fn apply_preserves_record_order() {
    let records = vec![kit(1, "A"), built(2, "B"), kit(3, "C")];
    let filter = FacetFilter {
        diy_kit: TriState::Yes,
        built_printer: TriState::Unset,
    };

    let filtered = filter.apply(&records);

    let ids: Vec<u32> = filtered.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn apply_is_idempotent() {
    let records = vec![kit(1, "A"), built(2, "B"), printer(3, "C")];
    let filter = FacetFilter {
        diy_kit: TriState::No,
        built_printer: TriState::Yes,
    };

    let once = filter.apply(&records);
    let twice = filter.apply(&once);

    assert_eq!(once, twice);
}

#[test]
fn summary_reports_both_facets() {
    let filter = FacetFilter {
        diy_kit: TriState::Yes,
        built_printer: TriState::Unset,
    };

    assert_eq!(filter.summary(), "kit:yes built:any");
}
