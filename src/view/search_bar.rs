//! Search bar widget for rendering the query line.

use crate::state::SearchBox;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget.
///
/// Always visible above the table. Shows a block cursor while the input
/// has focus and a key hint while it is empty and unfocused. The query
/// keeps filtering either way.
pub struct SearchBar<'a> {
    input: &'a SearchBox,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    /// Create a new SearchBar widget.
    pub fn new(input: &'a SearchBox, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.palette.focused_border
        } else {
            self.palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style);

        let line = if self.focused {
            // Split query at the cursor so the cursor cell can be styled.
            let before: String = self.input.text.chars().take(self.input.cursor).collect();
            let after_chars: Vec<char> =
                self.input.text.chars().skip(self.input.cursor).collect();

            let (cursor_char, after_text) = match after_chars.split_first() {
                None => (" ".to_string(), String::new()),
                Some((first, rest)) => (first.to_string(), rest.iter().collect()),
            };

            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char,
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(after_text),
            ])
        } else if self.input.text.is_empty() {
            Line::from(Span::styled("Press / to search", self.palette.muted))
        } else {
            Line::from(self.input.text.clone())
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

// ===== Tests =====
