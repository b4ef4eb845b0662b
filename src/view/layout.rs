//! Screen layout rendering.
//!
//! Splits the screen into header, sidebar (filters + hidden columns),
//! search line, table and status bar, then renders each pane's widget.
//! The help overlay draws on top when open.

use crate::state::{AppState, FocusPane};
use crate::view::constants::{
    FILTER_PANEL_HEIGHT, HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, SIDEBAR_WIDTH, STATUS_BAR_HEIGHT,
};
use crate::view::controls::{FilterPanel, HiddenPanel};
use crate::view::help::render_help_overlay;
use crate::view::search_bar::SearchBar;
use crate::view::styles::Palette;
use crate::view::table::TablePane;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen for the current state.
pub fn render_root(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, vertical_chunks[0], state, palette);
    render_content(frame, vertical_chunks[1], state, palette);
    render_status(frame, vertical_chunks[2], state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
    }
}

/// Render the content area: sidebar on the left, search and table on
/// the right.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_sidebar(frame, columns[0], state, palette);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SEARCH_INPUT_HEIGHT), Constraint::Min(0)])
        .split(columns[1]);

    let search_focused = state.focus == FocusPane::Search;
    frame.render_widget(SearchBar::new(&state.search, search_focused, palette), main[0]);
    frame.render_widget(TablePane::new(state, palette), main[1]);
}

/// Render the sidebar: filter checkboxes above the hidden-columns list.
fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FILTER_PANEL_HEIGHT), Constraint::Min(0)])
        .split(area);

    frame.render_widget(FilterPanel::new(state, palette), rows[0]);
    frame.render_widget(HiddenPanel::new(state, palette), rows[1]);
}

/// Render the header line: application name and dataset name.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(" printab ", palette.section),
        Span::styled(
            format!("dataset: {}", state.dataset().name()),
            palette.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status line: record counts, facet summary, hidden-column
/// count, active search and key hints.
fn render_status(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = vec![
        Span::styled(
            format!(" {}/{} printers", state.shown(), state.total()),
            palette.key,
        ),
        Span::raw("  "),
        Span::styled(state.facets.summary(), palette.muted),
    ];

    if !state.hidden.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("hidden: {}", state.hidden.len()),
            palette.muted,
        ));
    }

    if !state.search.is_blank() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("search: {}", state.search.text.trim()),
            palette.muted,
        ));
    }

    spans.push(Span::styled("   ? help  q quit", palette.muted));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====
