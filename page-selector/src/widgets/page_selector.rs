//! PageSelector view - the popover tree for one selector instance.

use tuidom::element::Content;
use tuidom::{Border, Edges, Element, Overflow, Scrollbar, Size, Style, TextAlign};

use super::{Divider, PageItem};
use crate::action::{ACTION_KEY, Action, OWNER_KEY};
use crate::config::SelectorConfig;
use crate::page::PageId;
use crate::selection::Selection;

/// Element ids of one selector instance, all namespaced by its config id.
#[derive(Debug, Clone, Copy)]
pub struct Ids<'a>(pub &'a str);

impl Ids<'_> {
    pub fn root(&self) -> String {
        self.0.to_string()
    }

    pub fn header(&self) -> String {
        format!("{}-all", self.0)
    }

    pub fn list(&self) -> String {
        format!("{}-pages", self.0)
    }

    pub fn page(&self, id: PageId) -> String {
        format!("{}-page-{id}", self.0)
    }

    pub fn done(&self) -> String {
        format!("{}-done", self.0)
    }
}

/// Builds the popover: header row, divider, scrolling page list, divider and
/// the confirm button.
#[derive(Debug, Clone)]
pub struct PageSelectorView<'a> {
    config: &'a SelectorConfig,
    selection: &'a Selection,
    scroll_offset: u16,
    hovered: Option<Action>,
}

impl<'a> PageSelectorView<'a> {
    pub fn new(config: &'a SelectorConfig, selection: &'a Selection) -> Self {
        Self {
            config,
            selection,
            scroll_offset: 0,
            hovered: None,
        }
    }

    pub fn scroll_offset(mut self, offset: u16) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Highlight the control bound to `action`.
    pub fn hovered(mut self, action: Option<Action>) -> Self {
        self.hovered = action;
        self
    }

    pub fn element(&self) -> Element {
        let theme = &self.config.theme;
        let ids = Ids(&self.config.id);
        let dims = self.config.dimensions;
        let inner_width = dims.width.saturating_sub(2);

        let header = PageItem::new(ids.header(), &self.config.header_label, Action::ToggleAll)
            .checked(self.selection.all_selected())
            .hovered(self.hovered == Some(Action::ToggleAll))
            .element(theme);

        let rows = self.selection.pages().iter().map(|page| {
            let action = Action::TogglePage(page.id);
            PageItem::new(ids.page(page.id), &page.label, action)
                .checked(self.selection.is_checked(page.id))
                .hovered(self.hovered == Some(action))
                .element(theme)
        });

        let list = Element::col()
            .id(ids.list())
            .width(Size::Fill)
            .height(Size::Fixed(dims.list_height))
            .overflow(Overflow::Scroll)
            .scrollbar(Scrollbar::Hidden)
            .scroll_offset(self.scroll_offset)
            .children(rows);

        let done = Element::text(self.config.confirm_label.clone())
            .id(ids.done())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .text_align(TextAlign::Center)
            .style(
                Style::new()
                    .background(theme.primary)
                    .foreground(theme.primary_foreground),
            )
            .style_hovered(
                Style::new()
                    .background(theme.primary_hover)
                    .foreground(theme.primary_foreground),
            )
            .hovered(self.hovered == Some(Action::Confirm))
            .clickable(true)
            .data(ACTION_KEY, Action::Confirm.to_string());

        let footer = Element::row()
            .id(format!("{}-footer", ids.0))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .child(done);

        let mut root = Element::col()
            .id(ids.root())
            .width(Size::Fixed(dims.width))
            .style(
                Style::new()
                    .background(theme.card)
                    .border(Border::Rounded)
                    .border_color(theme.border),
            )
            .child(header)
            .child(Divider::new(format!("{}-divider-top", ids.0), inner_width).element(theme))
            .child(list)
            .child(Divider::new(format!("{}-divider-bottom", ids.0), inner_width).element(theme))
            .child(footer);

        stamp_owner(&mut root, ids.0);
        root
    }
}

/// Tag every element bound to an action with the instance id.
fn stamp_owner(element: &mut Element, owner: &str) {
    if element.get_data(ACTION_KEY).is_some() {
        element.data.insert(OWNER_KEY.to_string(), owner.to_string());
    }
    if let Content::Children(children) = &mut element.content {
        for child in children {
            stamp_owner(child, owner);
        }
    }
}
