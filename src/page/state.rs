//! Selection state for the two page interactions.
//!
//! A plain struct the renderers read. Holding single values (one engine
//! index, one tab id) is what enforces the "exactly one active" rule:
//! there is no per-element flag to get out of sync.

use crate::models::{Engine, SiteData};

/// Which engine and which tab are currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Index into `search.engines`. Always in range.
    active_engine: usize,
    /// Target id of the selected tab. `None` only when there are no
    /// categories; a dangling id (matching no category) is kept as-is and
    /// simply highlights nothing.
    active_tab: Option<String>,
}

impl PageState {
    /// Initial state: first engine, first category.
    pub fn new(data: &SiteData) -> Self {
        Self {
            active_engine: 0,
            active_tab: data.categories.first().map(|c| c.id.clone()),
        }
    }

    /// The selected engine, which fixes the search form's target.
    pub fn active_engine<'a>(&self, data: &'a SiteData) -> &'a Engine {
        &data.search.engines[self.active_engine]
    }

    /// Index of the selected engine.
    pub fn active_engine_index(&self) -> usize {
        self.active_engine
    }

    /// Whether the tab/section with this id is the selected one.
    pub fn is_tab_active(&self, id: &str) -> bool {
        self.active_tab.as_deref() == Some(id)
    }

    /// Select an engine by index. Out-of-range indices are ignored.
    pub fn select_engine(&mut self, data: &SiteData, index: usize) {
        if index < data.search.engines.len() {
            self.active_engine = index;
        }
    }

    /// Select a tab by target id. An id matching no category deactivates
    /// every section without raising an error.
    pub fn select_tab(&mut self, id: &str) {
        self.active_tab = Some(id.to_string());
    }
}
