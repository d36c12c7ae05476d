mod flex;
mod rect;

use std::collections::HashMap;

pub(crate) use flex::inner_rect;
pub use flex::{estimate_size, layout};
pub use rect::Rect;

/// Positions computed by [`layout`], keyed by element id.
///
/// Scroll containers additionally record the height of their content and
/// of their viewport so scroll input can be clamped without re-measuring.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    scroll_extents: HashMap<String, ScrollExtent>,
}

/// Content and viewport heights of a scroll container, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollExtent {
    pub content: u16,
    pub viewport: u16,
}

impl ScrollExtent {
    /// Largest scroll offset that still keeps the viewport filled.
    pub fn max_offset(&self) -> u16 {
        self.content.saturating_sub(self.viewport)
    }

    pub fn overflows(&self) -> bool {
        self.content > self.viewport
    }
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn scroll_extent(&self, id: &str) -> Option<ScrollExtent> {
        self.scroll_extents.get(id).copied()
    }

    pub fn set_scroll_extent(&mut self, id: impl Into<String>, extent: ScrollExtent) {
        self.scroll_extents.insert(id.into(), extent);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
