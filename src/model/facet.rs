//! Tri-state facet filters over the record flags.

use crate::model::printer::Printer;

/// Three-valued filter state for one boolean facet.
///
/// `Unset` imposes no constraint; `Yes` and `No` demand an exact flag
/// value. The only transition is the cyclic [`TriState::cycle`], so the
/// state can never drift outside these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    /// No constraint. Rendered as the indeterminate checkbox.
    #[default]
    Unset,
    /// Keep only records whose flag is set.
    Yes,
    /// Keep only records whose flag is clear.
    No,
}

impl TriState {
    /// Advance to the next state: `Unset -> Yes -> No -> Unset`.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            TriState::Unset => TriState::Yes,
            TriState::Yes => TriState::No,
            TriState::No => TriState::Unset,
        }
    }

    /// Whether a record with flag `value` passes this state.
    pub fn admits(self, value: bool) -> bool {
        match self {
            TriState::Unset => true,
            TriState::Yes => value,
            TriState::No => !value,
        }
    }

    /// Checkbox marker for the filter panel.
    pub fn marker(self) -> &'static str {
        match self {
            TriState::Unset => "[-]",
            TriState::Yes => "[x]",
            TriState::No => "[ ]",
        }
    }

    /// One-word summary for the status line.
    pub fn word(self) -> &'static str {
        match self {
            TriState::Unset => "any",
            TriState::Yes => "yes",
            TriState::No => "no",
        }
    }
}

impl From<Option<bool>> for TriState {
    /// Map an optional constraint (e.g. a CLI flag) onto the tri-state.
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Unset,
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
        }
    }
}

/// The two independent facet filters: DIY kit and built printer.
///
/// Each facet is a pure set intersection over the record list, so the
/// facets compose with each other and with search in any order with the
/// same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacetFilter {
    /// Constraint on [`Printer::diy_kit`].
    pub diy_kit: TriState,
    /// Constraint on [`Printer::built_printer`].
    pub built_printer: TriState,
}

impl FacetFilter {
    /// Whether neither facet constrains anything.
    pub fn is_unconstrained(self) -> bool {
        self.diy_kit == TriState::Unset && self.built_printer == TriState::Unset
    }

    /// Whether `record` passes both facets.
    pub fn admits(self, record: &Printer) -> bool {
        self.diy_kit.admits(record.diy_kit) && self.built_printer.admits(record.built_printer)
    }

    /// Retain the records admitted by both facets, preserving order.
    pub fn apply(self, records: &[Printer]) -> Vec<Printer> {
        records
            .iter()
            .filter(|record| self.admits(record))
            .cloned()
            .collect()
    }

    /// Short status-line summary, e.g. `kit:yes built:any`.
    pub fn summary(self) -> String {
        format!(
            "kit:{} built:{}",
            self.diy_kit.word(),
            self.built_printer.word()
        )
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "facet_tests.rs"]
mod tests;
