use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::event::{Event, MouseButton};
use crate::layout::LayoutResult;
use crate::types::Overflow;

/// Tracks vertical scroll offsets for scroll containers across frames.
///
/// Offsets are applied by the owner of the tree when it rebuilds elements
/// (`Element::scroll_offset`). Both wheel input and pointer drags move the
/// offset; whether a scrollbar is drawn has no effect on either.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, u16>,
    drag: Option<DragAnchor>,
}

/// Where a drag-to-scroll gesture started.
#[derive(Debug, Clone)]
struct DragAnchor {
    id: String,
    start_y: u16,
    start_offset: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset for an element.
    pub fn get(&self, id: &str) -> u16 {
        self.offsets.get(id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: &str, offset: u16) {
        self.offsets.insert(id.to_string(), offset);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply wheel and drag input to the scroll containers under the pointer.
    /// Returns true if any offset changed.
    pub fn process_events(&mut self, events: &[Event], root: &Element, layout: &LayoutResult) -> bool {
        let mut changed = false;

        for event in events {
            match event {
                Event::Scroll { x, y, delta_y } => {
                    if let Some(id) = find_scrollable_at(root, layout, *x, *y) {
                        let target = self.get(&id) as i32 + *delta_y as i32;
                        changed |= self.scroll_to(&id, target, layout);
                    }
                }
                Event::Press {
                    x,
                    y,
                    button: MouseButton::Left,
                    ..
                } => {
                    self.drag = find_scrollable_at(root, layout, *x, *y).map(|id| DragAnchor {
                        start_offset: self.get(&id),
                        start_y: *y,
                        id,
                    });
                }
                Event::Drag {
                    y,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(anchor) = self.drag.clone() {
                        // Content follows the pointer: moving up reveals later rows
                        let target =
                            anchor.start_offset as i32 + anchor.start_y as i32 - *y as i32;
                        changed |= self.scroll_to(&anchor.id, target, layout);
                    }
                }
                Event::Release {
                    button: MouseButton::Left,
                    ..
                } => self.drag = None,
                _ => {}
            }
        }

        changed
    }

    fn scroll_to(&mut self, id: &str, target: i32, layout: &LayoutResult) -> bool {
        let Some(extent) = layout.scroll_extent(id) else {
            return false;
        };

        let clamped = target.clamp(0, extent.max_offset() as i32) as u16;
        if clamped == self.get(id) {
            return false;
        }

        log::debug!("scroll {id}: offset={clamped} max={}", extent.max_offset());
        self.offsets.insert(id.to_string(), clamped);
        true
    }
}

/// Find the innermost scroll container at the given coordinates.
pub fn find_scrollable_at(root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Check children first (innermost takes priority)
    if let Content::Children(children) = &root.content {
        for child in children.iter().rev() {
            if let Some(id) = find_scrollable_at(child, layout, x, y) {
                return Some(id);
            }
        }
    }

    (root.overflow == Overflow::Scroll).then(|| root.id.clone())
}
