//! Selector configuration.

use crate::page::PageSet;
use crate::theme::Theme;

/// Terminal-cell dimensions of the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Total width including the border.
    pub width: u16,
    /// Visible rows of the page list; longer lists scroll.
    pub list_height: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 40,
            list_height: 4,
        }
    }
}

/// Per-instance configuration.
///
/// `id` namespaces every element the instance renders, so several selectors
/// can share one element tree.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub id: String,
    pub pages: PageSet,
    pub header_label: String,
    pub confirm_label: String,
    pub dimensions: Dimensions,
    pub theme: Theme,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            id: "page-selector".to_string(),
            pages: PageSet::default(),
            header_label: "All pages".to_string(),
            confirm_label: "Done".to_string(),
            dimensions: Dimensions::default(),
            theme: Theme::default(),
        }
    }
}

impl SelectorConfig {
    /// Create a config with the given instance id and default everything else.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn pages(mut self, pages: PageSet) -> Self {
        self.pages = pages;
        self
    }

    pub fn header_label(mut self, label: impl Into<String>) -> Self {
        self.header_label = label.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.dimensions.width = width;
        self
    }

    pub fn list_height(mut self, rows: u16) -> Self {
        self.dimensions.list_height = rows;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
