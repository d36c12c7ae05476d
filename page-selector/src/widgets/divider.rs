//! Divider widget - a horizontal rule inset from both edges.

use tuidom::{Edges, Element, Size, Style};

use crate::theme::Theme;

#[derive(Clone, Debug)]
pub struct Divider {
    id: String,
    width: u16,
}

impl Divider {
    /// `width` is the full row width; the rule is inset by one cell per side.
    pub fn new(id: impl Into<String>, width: u16) -> Self {
        Self {
            id: id.into(),
            width,
        }
    }

    pub fn element(&self, theme: &Theme) -> Element {
        let rule = "─".repeat(self.width.saturating_sub(2) as usize);
        Element::text(rule)
            .id(self.id.clone())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .style(Style::new().foreground(theme.border))
    }
}
