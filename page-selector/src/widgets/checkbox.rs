//! Checkbox widget - a square glyph that forwards clicks.

use tuidom::{Element, Size, Style};

use crate::action::{ACTION_KEY, Action};
use crate::theme::Theme;

pub const CHECKED_GLYPH: &str = "[✓]";
pub const UNCHECKED_GLYPH: &str = "[ ]";

/// A checkbox glyph builder.
///
/// The checkbox does not interpret clicks: it carries whatever action its
/// owner binds and stops the click there, so an enclosing row bound to the
/// same action does not fire a second time.
#[derive(Clone, Debug)]
pub struct Checkbox {
    id: String,
    checked: bool,
    on_click: Option<Action>,
}

impl Checkbox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            on_click: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn element(&self, theme: &Theme) -> Element {
        let (glyph, fg) = if self.checked {
            (CHECKED_GLYPH, theme.check_mark)
        } else {
            (UNCHECKED_GLYPH, theme.border)
        };

        let mut element = Element::text(glyph)
            .id(self.id.clone())
            .width(Size::Fixed(3))
            .height(Size::Fixed(1))
            .style(Style::new().foreground(fg));

        if let Some(action) = self.on_click {
            element = element
                .clickable(true)
                .stop_propagation(true)
                .data(ACTION_KEY, action.to_string());
        }

        element
    }
}
