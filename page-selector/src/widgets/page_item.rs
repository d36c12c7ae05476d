//! PageItem widget - one selectable row with a label and a checkbox.

use tuidom::{Align, Edges, Element, Justify, Size, Style};

use super::Checkbox;
use crate::action::{ACTION_KEY, Action};
use crate::theme::Theme;

/// A selectable row builder.
///
/// The row does not know which page it stands for; the owner binds the
/// toggle action. Row and checkbox carry the same action, and the checkbox
/// stops propagation, so one click toggles exactly once wherever it lands.
#[derive(Clone, Debug)]
pub struct PageItem {
    id: String,
    label: String,
    checked: bool,
    hovered: bool,
    on_toggle: Action,
}

impl PageItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, on_toggle: Action) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            hovered: false,
            on_toggle,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn checkbox_id(&self) -> String {
        format!("{}-checkbox", self.id)
    }

    pub fn element(&self, theme: &Theme) -> Element {
        let label = Element::text(self.label.clone())
            .id(format!("{}-label", self.id))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .style(Style::new().foreground(theme.foreground));

        let checkbox = Checkbox::new(self.checkbox_id())
            .checked(self.checked)
            .on_click(self.on_toggle)
            .element(theme);

        Element::row()
            .id(self.id.clone())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::new(0, 1, 0, 2))
            .gap(1)
            .justify(Justify::SpaceBetween)
            .align(Align::Center)
            .style(Style::new().background(theme.card))
            .style_hovered(Style::new().background(theme.muted))
            .hovered(self.hovered)
            .clickable(true)
            .data(ACTION_KEY, self.on_toggle.to_string())
            .child(label)
            .child(checkbox)
    }
}
