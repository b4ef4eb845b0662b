//! Sidebar widgets: facet filter checkboxes and the hidden-columns list.

use crate::state::{AppState, FacetChoice, FocusPane};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Facet filter panel: one tri-state checkbox per record flag.
pub struct FilterPanel<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> FilterPanel<'a> {
    /// Create a new FilterPanel widget.
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn checkbox_line(&self, choice: FacetChoice, focused: bool) -> Line<'static> {
        let (tri, name) = match choice {
            FacetChoice::DiyKit => (self.state.facets.diy_kit, "DIY Kit"),
            FacetChoice::BuiltPrinter => (self.state.facets.built_printer, "Built Printer"),
        };
        let selected = focused && self.state.selected_facet == choice;

        let marker_style = if selected {
            self.palette.selection
        } else {
            self.palette.key
        };
        let name_style = if selected {
            self.palette.selection
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(tri.marker().to_string(), marker_style),
            Span::styled(format!(" {name}"), name_style),
        ])
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Filters;
        let border_style = if focused {
            self.palette.focused_border
        } else {
            self.palette.border
        };

        let lines = vec![
            self.checkbox_line(FacetChoice::DiyKit, focused),
            self.checkbox_line(FacetChoice::BuiltPrinter, focused),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Filters ")
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

/// Hidden-columns panel: restorable columns in the order they were
/// hidden.
pub struct HiddenPanel<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> HiddenPanel<'a> {
    /// Create a new HiddenPanel widget.
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for HiddenPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Hidden;
        let border_style = if focused {
            self.palette.focused_border
        } else {
            self.palette.border
        };

        let lines: Vec<Line> = if self.state.hidden.is_empty() {
            vec![Line::from(Span::styled("(none)", self.palette.muted))]
        } else {
            self.state
                .hidden
                .hidden()
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let selected = focused && index == self.state.selected_hidden;
                    let style = if selected {
                        self.palette.selection
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(column.label(), style))
                })
                .collect()
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Hidden Columns ")
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

// ===== Tests =====
