//! Selection tracking
//!
//! Selection is an id → bool map kept apart from filtering and pagination:
//! selecting a row, then filtering it out, keeps it selected.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: HashMap<String, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Flip one id's membership
    pub fn toggle(&mut self, id: &str) {
        let selected = self.is_selected(id);
        self.entries.insert(id.to_string(), !selected);
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        self.entries.insert(id.to_string(), selected);
    }

    /// Set every given id to one value
    ///
    /// The value is true unless every id is already selected, in which case
    /// all of them are deselected. Returns the value applied.
    pub fn toggle_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str> + Clone) -> bool {
        let all_selected = ids.clone().into_iter().all(|id| self.is_selected(id));
        let value = !all_selected;
        for id in ids {
            self.set(id, value);
        }
        value
    }

    /// Drop the entry for a deleted record
    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ids currently selected (unordered)
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.as_str())
    }

    pub fn count(&self) -> usize {
        self.selected_ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether an entry (selected or not) exists for the id
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}
