//! Selection state: which pages are checked, and whether all of them are.

use std::collections::HashMap;

use crate::confirm::Confirmation;
use crate::page::{Page, PageId, PageSet};

/// Checked state of every page plus the derived "all selected" flag.
///
/// The flag is recomputed inside every transition that touches the map, so
/// it is never observable out of step with it.
#[derive(Debug, Clone)]
pub struct Selection {
    pages: PageSet,
    checked: HashMap<PageId, bool>,
    all_selected: bool,
}

impl Selection {
    /// Empty selection over `pages`.
    pub fn new(pages: PageSet) -> Self {
        Self {
            pages,
            checked: HashMap::new(),
            all_selected: false,
        }
    }

    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    /// Absent entries read as unchecked.
    pub fn is_checked(&self, id: PageId) -> bool {
        self.checked.get(&id).copied().unwrap_or(false)
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn selected_count(&self) -> usize {
        self.pages.ids().filter(|id| self.is_checked(*id)).count()
    }

    /// Flip one page. Returns its new state, or `None` for an id outside the
    /// page set (the selection is left untouched).
    pub fn toggle(&mut self, id: PageId) -> Option<bool> {
        if !self.pages.contains(id) {
            log::warn!("toggle ignored for unknown page {id}");
            return None;
        }

        let checked = !self.is_checked(id);
        self.checked.insert(id, checked);
        self.recompute();

        log::debug!(
            "page {id} -> {checked} (all_selected={})",
            self.all_selected
        );
        Some(checked)
    }

    /// Clear everything when all pages are selected, otherwise select all.
    /// Returns the new value of the derived flag.
    pub fn toggle_all(&mut self) -> bool {
        self.checked = if self.all_selected {
            HashMap::new()
        } else {
            self.pages.ids().map(|id| (id, true)).collect()
        };
        self.recompute();

        log::debug!("toggle all -> all_selected={}", self.all_selected);
        self.all_selected
    }

    /// Checked pages in declared order, independent of toggle order.
    pub fn selected_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| self.is_checked(page.id))
    }

    pub fn selected_labels(&self) -> Vec<String> {
        self.selected_pages().map(|page| page.label.clone()).collect()
    }

    /// Snapshot for the "Done" action. Does not change the selection.
    pub fn confirmation(&self) -> Confirmation {
        Confirmation::from_labels(self.selected_labels())
    }

    fn recompute(&mut self) {
        self.all_selected = self.pages.ids().all(|id| self.is_checked(id));
    }
}
