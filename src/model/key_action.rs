//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Raw character input for the search box bypasses this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection movement
    /// Move the selection up within the focused pane. Default: k/↑
    MoveUp,
    /// Move the selection down within the focused pane. Default: j/↓
    MoveDown,
    /// Shift the printer window one record left. Default: ←
    ScrollLeft,
    /// Shift the printer window one record right. Default: →
    ScrollRight,

    // Focus navigation
    /// Focus the comparison table. Default: 1
    FocusTable,
    /// Focus the facet filter panel. Default: 2
    FocusFilters,
    /// Focus the hidden-columns panel. Default: 3
    FocusHidden,
    /// Cycle focus: Table → Filters → Hidden → Table. Default: Tab
    CycleFocus,

    // Pane interaction
    /// Act on the selected item: cycle the highlighted facet, restore the
    /// selected hidden column, or hide the selected attribute row,
    /// depending on which pane has focus. Default: Enter/Space
    Activate,
    /// Hide the attribute row selected in the table. Default: h
    HideColumn,

    // Search
    /// Activate search input. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search query and show all records again. Default: Ctrl+u
    ClearSearch,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
