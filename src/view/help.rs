//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! category. Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// The overlay displays all keyboard shortcuts grouped by category:
/// - Navigation
/// - Panes
/// - Acting on the selection
/// - Search
/// - Application
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Render dismissal hint at the bottom
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.section;
    let key_style = palette.key;
    let desc_style = Style::default();

    vec![
        Line::from(vec![Span::styled("Navigation", category_style)]),
        Line::from(vec![
            Span::styled("  k/↑        ", key_style),
            Span::styled("Move selection up", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  j/↓        ", key_style),
            Span::styled("Move selection down", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  ←/→        ", key_style),
            Span::styled("Scroll printers sideways", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Panes", category_style)]),
        Line::from(vec![
            Span::styled("  Tab        ", key_style),
            Span::styled("Cycle table, filters, hidden", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  1/2/3      ", key_style),
            Span::styled("Focus a pane directly", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Acting on the selection", category_style)]),
        Line::from(vec![
            Span::styled("  h          ", key_style),
            Span::styled("Hide the selected attribute row", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter/Space", key_style),
            Span::styled(" Hide row / cycle checkbox / restore column", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Search", category_style)]),
        Line::from(vec![
            Span::styled("  / or Ctrl+f", key_style),
            Span::styled(" Start typing a query", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Esc/Enter  ", key_style),
            Span::styled("Leave the box; the query keeps filtering", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+u     ", key_style),
            Span::styled("Clear the query", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Application", category_style)]),
        Line::from(vec![
            Span::styled("  ?          ", key_style),
            Span::styled("Toggle this help", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  q/Ctrl+c   ", key_style),
            Span::styled("Quit", desc_style),
        ]),
    ]
}

// ===== Tests =====
