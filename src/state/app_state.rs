//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure, synchronous mutations.

use crate::dataset::{Dataset, SearchParam};
use crate::model::{Column, FacetFilter, KeyAction, Printer};
use crate::state::hidden_columns::HiddenColumns;
use crate::state::search_input::{self, SearchBox};

// ===== Focus =====

/// Which pane has keyboard focus. Exactly one at a time.
///
/// Tab cycles Table → Filters → Hidden → Table. Search sits outside the
/// cycle: it is entered explicitly with StartSearch and left with Esc or
/// Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    /// The comparison table.
    Table,
    /// The facet filter checkboxes.
    Filters,
    /// The hidden-columns list.
    Hidden,
    /// The search input line.
    Search,
}

/// Which facet checkbox is highlighted inside the filter pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetChoice {
    /// The DIY-kit checkbox.
    DiyKit,
    /// The built-printer checkbox.
    BuiltPrinter,
}

impl FacetChoice {
    /// The other checkbox. With exactly two, up and down both flip.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            FacetChoice::DiyKit => FacetChoice::BuiltPrinter,
            FacetChoice::BuiltPrinter => FacetChoice::DiyKit,
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Any transition that changes a query input (search text or a facet)
/// re-runs the whole display pipeline before returning. The displayed
/// records therefore always correspond to the current inputs; a slow
/// query for an old search can never overwrite a newer one, because no
/// query is ever in flight between transitions.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Dataset,
    /// Records currently displayed: search then facets applied, in
    /// dataset order.
    records: Vec<Printer>,
    /// Raw search box contents.
    pub search: SearchBox,
    /// Tri-state facet filters.
    pub facets: FacetFilter,
    /// Columns excluded from the table.
    pub hidden: HiddenColumns,
    /// Pane with keyboard focus.
    pub focus: FocusPane,
    /// Selected attribute row, as an index into the visible columns.
    pub selected_row: usize,
    /// Highlighted facet checkbox.
    pub selected_facet: FacetChoice,
    /// Selected entry in the hidden-columns list.
    pub selected_hidden: usize,
    /// First record shown in the table's horizontal window.
    pub record_offset: usize,
    /// Whether the help overlay is open.
    pub help_visible: bool,
    /// Set once the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state over a dataset: no search, no facet constraints,
    /// everything visible, table focused.
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            dataset,
            records: Vec::new(),
            search: SearchBox::default(),
            facets: FacetFilter::default(),
            hidden: HiddenColumns::new(),
            focus: FocusPane::Table,
            selected_row: 0,
            selected_facet: FacetChoice::DiyKit,
            selected_hidden: 0,
            record_offset: 0,
            help_visible: false,
            should_quit: false,
        };
        state.refresh();
        state
    }

    /// Pre-fill the search box (cursor at the end) and re-query.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = SearchBox::with_text(text);
        self.refresh();
        self
    }

    /// Pre-set the facet filters and re-query.
    #[must_use]
    pub fn with_facets(mut self, facets: FacetFilter) -> Self {
        self.facets = facets;
        self.refresh();
        self
    }

    // ===== Read Accessors =====

    /// Records currently displayed, in dataset order.
    pub fn records(&self) -> &[Printer] {
        &self.records
    }

    /// The underlying record store.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Columns currently shown, in display order.
    pub fn visible_columns(&self) -> Vec<Column> {
        self.hidden.visible()
    }

    /// The search box as a query parameter, or `None` when blank.
    pub fn search_param(&self) -> Option<SearchParam> {
        if self.search.is_blank() {
            None
        } else {
            Some(SearchParam::One(self.search.text.clone()))
        }
    }

    /// Displayed record count.
    pub fn shown(&self) -> usize {
        self.records.len()
    }

    /// Total record count in the dataset.
    pub fn total(&self) -> usize {
        self.dataset.len()
    }

    // ===== Display Pipeline =====

    /// Re-run search and facets over the dataset, then clamp the
    /// selections to the new result.
    fn refresh(&mut self) {
        let searched = self.dataset.query(self.search_param().as_ref());
        self.records = self.facets.apply(&searched);
        self.clamp_selections();
    }

    /// Keep every selection index inside its collection's bounds.
    fn clamp_selections(&mut self) {
        let visible = self.hidden.visible().len();
        self.selected_row = self.selected_row.min(visible.saturating_sub(1));

        let hidden = self.hidden.len();
        self.selected_hidden = self.selected_hidden.min(hidden.saturating_sub(1));

        let shown = self.records.len();
        self.record_offset = self.record_offset.min(shown.saturating_sub(1));
    }

    // ===== Action Dispatch =====

    /// Apply a semantic key action to the state.
    ///
    /// Raw search typing does not arrive here; the event loop feeds it
    /// through the search editing methods directly.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveUp => self.move_up(),
            KeyAction::MoveDown => self.move_down(),
            KeyAction::ScrollLeft => self.scroll_left(),
            KeyAction::ScrollRight => self.scroll_right(),
            KeyAction::FocusTable => self.focus = FocusPane::Table,
            KeyAction::FocusFilters => self.focus = FocusPane::Filters,
            KeyAction::FocusHidden => self.focus = FocusPane::Hidden,
            KeyAction::CycleFocus => self.cycle_focus(),
            KeyAction::Activate => self.activate(),
            KeyAction::HideColumn => {
                if self.focus == FocusPane::Table {
                    self.hide_selected();
                }
            }
            KeyAction::StartSearch => self.focus_search(),
            KeyAction::ClearSearch => self.clear_search(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::Quit => self.quit(),
        }
    }

    // ===== Focus =====

    /// Cycle focus: Table → Filters → Hidden → Table. Cycling out of
    /// search lands back on the table.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Table => FocusPane::Filters,
            FocusPane::Filters => FocusPane::Hidden,
            FocusPane::Hidden => FocusPane::Table,
            FocusPane::Search => FocusPane::Table,
        };
    }

    /// Move focus into the search input.
    pub fn focus_search(&mut self) {
        self.focus = FocusPane::Search;
    }

    /// Leave the search input. The query keeps filtering.
    pub fn leave_search(&mut self) {
        self.focus = FocusPane::Table;
    }

    // ===== Selection Movement =====

    /// Move the selection up within the focused pane.
    pub fn move_up(&mut self) {
        match self.focus {
            FocusPane::Table => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            FocusPane::Filters => self.selected_facet = self.selected_facet.other(),
            FocusPane::Hidden => {
                self.selected_hidden = self.selected_hidden.saturating_sub(1);
            }
            FocusPane::Search => {}
        }
    }

    /// Move the selection down within the focused pane.
    pub fn move_down(&mut self) {
        match self.focus {
            FocusPane::Table => {
                let last = self.hidden.visible().len().saturating_sub(1);
                self.selected_row = (self.selected_row + 1).min(last);
            }
            FocusPane::Filters => self.selected_facet = self.selected_facet.other(),
            FocusPane::Hidden => {
                let last = self.hidden.len().saturating_sub(1);
                self.selected_hidden = (self.selected_hidden + 1).min(last);
            }
            FocusPane::Search => {}
        }
    }

    /// Shift the record window left by one.
    pub fn scroll_left(&mut self) {
        self.record_offset = self.record_offset.saturating_sub(1);
    }

    /// Shift the record window right by one.
    pub fn scroll_right(&mut self) {
        let last = self.records.len().saturating_sub(1);
        self.record_offset = (self.record_offset + 1).min(last);
    }

    // ===== Pane Interaction =====

    /// Act on the selected item of the focused pane: hide the selected
    /// attribute, cycle the highlighted facet, or restore the selected
    /// hidden column.
    pub fn activate(&mut self) {
        match self.focus {
            FocusPane::Table => self.hide_selected(),
            FocusPane::Filters => self.cycle_selected_facet(),
            FocusPane::Hidden => self.restore_selected_hidden(),
            FocusPane::Search => self.leave_search(),
        }
    }

    /// Hide the attribute row currently selected in the table.
    pub fn hide_selected(&mut self) {
        if let Some(column) = self.hidden.visible().get(self.selected_row).copied() {
            self.hidden.hide(column);
            self.clamp_selections();
        }
    }

    /// Restore the hidden column currently selected in the hidden pane.
    pub fn restore_selected_hidden(&mut self) {
        if let Some(column) = self.hidden.hidden().get(self.selected_hidden).copied() {
            self.hidden.restore(column);
            self.clamp_selections();
        }
    }

    /// Cycle the highlighted facet checkbox and re-query.
    pub fn cycle_selected_facet(&mut self) {
        match self.selected_facet {
            FacetChoice::DiyKit => self.facets.diy_kit = self.facets.diy_kit.cycle(),
            FacetChoice::BuiltPrinter => {
                self.facets.built_printer = self.facets.built_printer.cycle();
            }
        }
        self.refresh();
    }

    // ===== Search Editing =====

    /// Type a character into the search box and re-query.
    pub fn insert_search_char(&mut self, ch: char) {
        self.search = search_input::insert_char(self.search.clone(), ch);
        self.refresh();
    }

    /// Delete the character before the search cursor and re-query.
    pub fn search_backspace(&mut self) {
        self.search = search_input::backspace(self.search.clone());
        self.refresh();
    }

    /// Move the search cursor left.
    pub fn search_cursor_left(&mut self) {
        self.search = search_input::cursor_left(self.search.clone());
    }

    /// Move the search cursor right.
    pub fn search_cursor_right(&mut self) {
        self.search = search_input::cursor_right(self.search.clone());
    }

    /// Drop the whole query and show every record again.
    pub fn clear_search(&mut self) {
        self.search = SearchBox::default();
        self.refresh();
    }

    // ===== Application =====

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
