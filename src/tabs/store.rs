// SPDX-License-Identifier: MPL-2.0
//! In-memory tab collection.

use crate::tabs::{Tab, TabId};

/// Insertion-ordered collection of open tabs.
///
/// Removal is by identity. No ordering guarantee exists beyond insertion
/// order; the switcher renders the slice as-is.
#[derive(Debug, Default)]
pub struct TabStore {
    tabs: Vec<Tab>,
}

impl TabStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tabs(tabs: Vec<Tab>) -> Self {
        Self { tabs }
    }

    /// Appends a tab and returns its ID.
    pub fn add(&mut self, tab: Tab) -> TabId {
        let id = tab.id();
        self.tabs.push(tab);
        id
    }

    /// Removes the tab with `id`, returning it if present.
    pub fn remove(&mut self, id: TabId) -> Option<Tab> {
        let position = self.tabs.iter().position(|tab| tab.id() == id)?;
        Some(self.tabs.remove(position))
    }

    #[must_use]
    pub fn all(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    #[must_use]
    pub fn first_id(&self) -> Option<TabId> {
        self.tabs.first().map(Tab::id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Sum of all tab amounts, the grouped view's running total.
    #[must_use]
    pub fn total_amount(&self) -> u64 {
        self.tabs.iter().map(|tab| u64::from(tab.amount())).sum()
    }
}
