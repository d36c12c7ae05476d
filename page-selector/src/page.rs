//! Pages offered by a selector.
//!
//! A [`PageSet`] fixes both the ids the selection may refer to and the order
//! in which rows are rendered and labels are reported.

use std::collections::HashSet;
use std::fmt;

use crate::error::PageSetError;

/// Stable identifier of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub label: String,
}

impl Page {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: PageId(id),
            label: label.into(),
        }
    }
}

/// Ordered, non-empty list of pages with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<Page>,
}

/// Number of pages in the default set.
pub const DEFAULT_PAGE_COUNT: u32 = 6;

impl PageSet {
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Result<Self, PageSetError> {
        let pages: Vec<Page> = pages.into_iter().collect();
        if pages.is_empty() {
            return Err(PageSetError::Empty);
        }

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if !seen.insert(page.id) {
                return Err(PageSetError::DuplicateId(page.id));
            }
        }

        Ok(Self { pages })
    }

    /// Pages `1..=count` labelled "Page 1", "Page 2", ...
    ///
    /// A set is never empty, so a `count` of 0 is clamped to a single page.
    /// Use [`PageSet::new`] to reject empty input with
    /// [`PageSetError::Empty`] instead.
    pub fn numbered(count: u32) -> Self {
        let pages = (1..=count.max(1))
            .map(|n| Page::new(n, format!("Page {n}")))
            .collect();
        Self { pages }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().map(|page| page.id)
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for PageSet {
    fn default() -> Self {
        Self::numbered(DEFAULT_PAGE_COUNT)
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
