//! Tests for the comparison table widget.

use super::*;
use crate::dataset::Dataset;
use crate::model::{Column, Printer};
use crate::test_support::{built, kit};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Text Fitting Tests =====

#[test]
fn fit_pads_short_text_to_exact_width() {
    let fitted = fit("DIY", 8);

    assert_eq!(fitted, "DIY     ");
    assert_eq!(fitted.width(), 8);
}

#[test]
fn fit_truncates_long_text_with_a_marker() {
    let fitted = fit("a very long controller name", 12);

    assert_eq!(fitted.width(), 12);
    assert!(fitted.ends_with("..."));
    assert!(fitted.starts_with("a very"));
}

#[test]
fn fit_is_safe_on_multibyte_text() {
    let fitted = fit("héllo wörld étc", 8);

    assert_eq!(fitted.width(), 8);
    assert!(fitted.ends_with("..."));
}

#[test]
fn fit_handles_wide_characters() {
    // Each CJK glyph occupies two cells.
    let fitted = fit("中中中中", 5);

    assert!(fitted.width() <= 5);
    assert!(fitted.ends_with("..."));
}

#[test]
fn take_width_never_splits_a_wide_character() {
    let taken = take_width("中中", 3);

    assert_eq!(taken, "中", "half a glyph cannot be taken");
}

// ===== Window Tests =====

fn sample_grid() -> Grid {
    project(
        &[kit(1, "Alpha"), kit(2, "Beta"), kit(3, "Gamma")],
        &Column::ALL,
    )
}

#[test]
fn window_always_shows_at_least_one_record() {
    let grid = sample_grid();

    let widths = window_widths(&grid, 0, 1);

    assert_eq!(widths.len(), 1, "even a too-narrow area shows one record");
}

#[test]
fn window_takes_as_many_records_as_fit() {
    let grid = sample_grid();
    let one = record_width(&grid, 0) + COLUMN_GAP;

    let widths = window_widths(&grid, 0, one * 3);

    assert_eq!(widths.len(), 3);
}

#[test]
fn window_starts_at_the_offset() {
    let grid = sample_grid();
    let one = record_width(&grid, 0) + COLUMN_GAP;

    let widths = window_widths(&grid, 2, one * 3);

    assert_eq!(widths.len(), 1, "only one record remains after the offset");
}

#[test]
fn record_width_is_clamped() {
    let wide = Printer {
        controller: "x".repeat(120),
        ..kit(1, "Wide")
    };
    let narrow = Printer {
        title: "A".to_string(),
        build_volume: String::new(),
        layer_height: String::new(),
        max_travel_speed: String::new(),
        max_temperatures: String::new(),
        controller: String::new(),
        filament_diameter: String::new(),
        ..kit(2, "Narrow")
    };
    let grid = project(&[wide, narrow], &Column::ALL);

    assert_eq!(record_width(&grid, 0), MAX_RECORD_COLUMN_WIDTH);
    assert_eq!(record_width(&grid, 1), MIN_RECORD_COLUMN_WIDTH);
}

// ===== Render Tests =====

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn draw(state: &AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let palette = Palette::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| {
            let widget = TablePane::new(state, &palette);
            frame.render_widget(widget, frame.area());
        })
        .expect("draw succeeds");
    terminal
}

#[test]
fn kit_record_shows_the_diy_badge() {
    let state = AppState::new(Dataset::from_records("test", vec![kit(1, "Kit Machine")]));

    let text = buffer_text(&draw(&state, 60, 14));

    // Once for the row heading, once for the badge cell.
    assert_eq!(text.matches("DIY").count(), 2, "buffer: {}", text);
}

#[test]
fn built_only_record_leaves_the_kit_cell_empty() {
    let state = AppState::new(Dataset::from_records("test", vec![built(1, "Factory Made")]));

    let text = buffer_text(&draw(&state, 60, 14));

    // Only the "DIY Kit" heading mentions DIY; no badge appears.
    assert_eq!(text.matches("DIY").count(), 1, "buffer: {}", text);
    // "Built Printer" appears as heading and as badge.
    assert_eq!(text.matches("Built Printer").count(), 2, "buffer: {}", text);
}

#[test]
fn empty_result_renders_the_no_match_message() {
    let state = AppState::new(Dataset::from_records("test", vec![kit(1, "Solo")]))
        .with_search("does-not-match");

    let text = buffer_text(&draw(&state, 60, 14));

    assert!(text.contains("No printers match"), "buffer: {}", text);
}

#[test]
fn all_columns_hidden_renders_a_notice() {
    let mut state = AppState::new(Dataset::from_records("test", vec![kit(1, "Solo")]));
    for _ in Column::ALL {
        state.hide_selected();
    }

    let text = buffer_text(&draw(&state, 60, 14));

    assert!(text.contains("All columns hidden"), "buffer: {}", text);
}

#[test]
fn title_reports_the_visible_window() {
    let mut state = AppState::new(Dataset::from_records(
        "test",
        vec![kit(1, "Alpha"), kit(2, "Beta")],
    ));

    let before = buffer_text(&draw(&state, 40, 14));
    assert!(before.contains("Printers 1-"), "buffer: {}", before);
    assert!(before.contains("of 2"), "buffer: {}", before);

    state.scroll_right();
    let after = buffer_text(&draw(&state, 40, 14));
    assert!(after.contains("Printers 2-2 of 2"), "buffer: {}", after);
}

#[test]
fn hidden_rows_disappear_from_the_rendered_table() {
    let mut state = AppState::new(Dataset::from_records("test", vec![kit(1, "Solo")]));
    state.selected_row = 5; // Controller in display order

    state.hide_selected();

    let text = buffer_text(&draw(&state, 60, 14));
    assert!(!text.contains("Controller"), "buffer: {}", text);
}
