//! Tests for AppState transitions.
//!
//! These tests verify pure state transitions without any TUI dependencies.

use super::*;
use crate::model::TriState;
use crate::test_support::{built, kit, printer};

// ===== Test Helpers =====

fn sample_state() -> AppState {
    let dataset = Dataset::from_records(
        "test",
        vec![
            kit(1, "Voron 2.4 R2"),
            built(2, "Ultimaker S5"),
            kit(3, "RatRig V-Core 3"),
            built(4, "Bambu Lab P1S"),
        ],
    );
    AppState::new(dataset)
}

fn shown_ids(state: &AppState) -> Vec<u32> {
    state.records().iter().map(|record| record.id).collect()
}

// ===== Construction Tests =====

#[test]
fn new_state_shows_every_record_and_focuses_the_table() {
    let state = sample_state();

    assert_eq!(shown_ids(&state), vec![1, 2, 3, 4]);
    assert_eq!(state.focus, FocusPane::Table);
    assert_eq!(state.shown(), 4);
    assert_eq!(state.total(), 4);
}

#[test]
fn with_search_pre_filters_and_puts_cursor_at_end() {
    let state = sample_state().with_search("voron");

    assert_eq!(shown_ids(&state), vec![1]);
    assert_eq!(state.search.cursor, 5);
}

#[test]
fn with_facets_pre_filters() {
    let facets = FacetFilter {
        diy_kit: TriState::Yes,
        built_printer: TriState::Unset,
    };

    let state = sample_state().with_facets(facets);

    assert_eq!(shown_ids(&state), vec![1, 3]);
}

// ===== Search Transition Tests =====

#[test]
fn typing_re_queries_after_every_character() {
    let mut state = sample_state();
    state.focus_search();

    state.insert_search_char('v');
    state.insert_search_char('o');
    state.insert_search_char('r');

    assert_eq!(shown_ids(&state), vec![1], "only the Voron matches 'vor'");
}

#[test]
fn backspace_re_queries_and_widens_the_result() {
    let mut state = sample_state().with_search("voron");
    assert_eq!(state.shown(), 1);

    for _ in 0..5 {
        state.search_backspace();
    }

    assert_eq!(shown_ids(&state), vec![1, 2, 3, 4], "empty query shows all");
}

#[test]
fn whitespace_only_query_shows_every_record() {
    let mut state = sample_state();

    state.insert_search_char(' ');
    state.insert_search_char(' ');

    assert_eq!(state.shown(), 4);
    assert!(state.search_param().is_none());
}

#[test]
fn clear_search_restores_the_full_list() {
    let mut state = sample_state().with_search("voron");

    state.clear_search();

    assert_eq!(state.shown(), 4);
    assert_eq!(state.search.text, "");
}

#[test]
fn no_match_leaves_an_empty_table() {
    let state = sample_state().with_search("zzz");

    assert!(state.records().is_empty());
    assert_eq!(state.total(), 4, "the dataset itself is untouched");
}

// ===== Facet Transition Tests =====

#[test]
fn cycling_a_facet_once_keeps_only_set_flags() {
    let mut state = sample_state();
    state.focus = FocusPane::Filters;
    state.selected_facet = FacetChoice::DiyKit;

    state.activate();

    assert_eq!(state.facets.diy_kit, TriState::Yes);
    assert_eq!(shown_ids(&state), vec![1, 3]);
}

#[test]
fn cycling_a_facet_three_times_returns_to_unconstrained() {
    let mut state = sample_state();
    state.focus = FocusPane::Filters;

    state.activate();
    state.activate();
    state.activate();

    assert!(state.facets.is_unconstrained());
    assert_eq!(state.shown(), 4);
}

#[test]
fn search_and_facets_compose() {
    let mut state = sample_state().with_search("r");
    state.focus = FocusPane::Filters;
    state.selected_facet = FacetChoice::BuiltPrinter;

    // built:yes on top of the search.
    state.activate();

    assert_eq!(state.facets.built_printer, TriState::Yes);
    assert!(!state.records().is_empty());
    assert!(state.records().iter().all(|record| record.built_printer));
}

#[test]
fn facet_moves_flip_between_the_two_checkboxes() {
    let mut state = sample_state();
    state.focus = FocusPane::Filters;
    assert_eq!(state.selected_facet, FacetChoice::DiyKit);

    state.move_down();
    assert_eq!(state.selected_facet, FacetChoice::BuiltPrinter);

    state.move_up();
    assert_eq!(state.selected_facet, FacetChoice::DiyKit);
}

// ===== Focus Tests =====

#[test]
fn tab_cycles_table_filters_hidden_and_back() {
    let mut state = sample_state();

    state.cycle_focus();
    assert_eq!(state.focus, FocusPane::Filters);
    state.cycle_focus();
    assert_eq!(state.focus, FocusPane::Hidden);
    state.cycle_focus();
    assert_eq!(state.focus, FocusPane::Table);
}

#[test]
fn search_focus_is_entered_explicitly_and_left_to_the_table() {
    let mut state = sample_state();

    state.focus_search();
    assert_eq!(state.focus, FocusPane::Search);

    state.leave_search();
    assert_eq!(state.focus, FocusPane::Table);
}

#[test]
fn cycling_out_of_search_lands_on_the_table() {
    let mut state = sample_state();
    state.focus_search();

    state.cycle_focus();

    assert_eq!(state.focus, FocusPane::Table);
}

// ===== Hide / Restore Tests =====

#[test]
fn hide_selected_removes_the_row_and_lists_it_as_hidden() {
    let mut state = sample_state();
    state.selected_row = 1; // BuildVolume in display order

    state.hide_selected();

    assert_eq!(state.hidden.hidden(), &[Column::BuildVolume]);
    assert!(!state.visible_columns().contains(&Column::BuildVolume));
}

#[test]
fn hiding_never_changes_the_displayed_records() {
    let mut state = sample_state().with_search("voron");
    let before = shown_ids(&state);

    state.hide_selected();
    state.hide_selected();

    assert_eq!(shown_ids(&state), before);
}

#[test]
fn hiding_the_last_row_clamps_the_selection() {
    let mut state = sample_state();
    state.selected_row = Column::ALL.len() - 1;

    state.hide_selected();

    assert_eq!(state.selected_row, state.visible_columns().len() - 1);
}

#[test]
fn restore_selected_brings_the_column_back_in_display_order() {
    let mut state = sample_state();
    state.selected_row = 0;
    state.hide_selected(); // Title
    state.hide_selected(); // BuildVolume (now first)

    state.focus = FocusPane::Hidden;
    state.selected_hidden = 0;
    state.activate();

    assert_eq!(state.hidden.hidden(), &[Column::BuildVolume]);
    assert_eq!(state.visible_columns()[0], Column::Title);
}

#[test]
fn restore_on_an_empty_hidden_list_is_a_no_op() {
    let mut state = sample_state();
    state.focus = FocusPane::Hidden;

    state.activate();

    assert!(state.hidden.is_empty());
}

// ===== Record Window Tests =====

#[test]
fn scroll_right_stops_at_the_last_record() {
    let mut state = sample_state();

    for _ in 0..10 {
        state.scroll_right();
    }

    assert_eq!(state.record_offset, 3);
}

#[test]
fn scroll_left_saturates_at_zero() {
    let mut state = sample_state();

    state.scroll_left();

    assert_eq!(state.record_offset, 0);
}

#[test]
fn narrowing_the_result_clamps_the_record_window() {
    let mut state = sample_state();
    state.scroll_right();
    state.scroll_right();
    assert_eq!(state.record_offset, 2);

    let mut state = state.with_search("voron");
    state.scroll_left(); // still consistent after refresh

    assert_eq!(state.record_offset, 0);
}

// ===== Action Dispatch Tests =====

#[test]
fn apply_routes_hide_column_only_from_the_table() {
    let mut state = sample_state();
    state.focus = FocusPane::Filters;

    state.apply(KeyAction::HideColumn);

    assert!(state.hidden.is_empty(), "h outside the table does nothing");
}

#[test]
fn apply_quit_sets_the_quit_flag() {
    let mut state = sample_state();

    state.apply(KeyAction::Quit);

    assert!(state.should_quit);
}

#[test]
fn apply_help_toggles_the_overlay() {
    let mut state = sample_state();

    state.apply(KeyAction::Help);
    assert!(state.help_visible);

    state.apply(KeyAction::Help);
    assert!(!state.help_visible);
}

#[test]
fn apply_direct_focus_actions() {
    let mut state = sample_state();

    state.apply(KeyAction::FocusFilters);
    assert_eq!(state.focus, FocusPane::Filters);

    state.apply(KeyAction::FocusHidden);
    assert_eq!(state.focus, FocusPane::Hidden);

    state.apply(KeyAction::FocusTable);
    assert_eq!(state.focus, FocusPane::Table);
}

// ===== Empty Dataset Tests =====

#[test]
fn empty_dataset_keeps_all_transitions_safe() {
    let mut state = AppState::new(Dataset::from_records("empty", vec![]));

    state.move_down();
    state.scroll_right();
    state.hide_selected();
    state.insert_search_char('x');

    assert_eq!(state.shown(), 0);
    assert_eq!(state.record_offset, 0);
}

#[test]
fn single_record_dataset_clamps_sensibly() {
    let mut state = AppState::new(Dataset::from_records("one", vec![printer(1, "Solo")]));

    state.scroll_right();

    assert_eq!(state.record_offset, 0);
}
