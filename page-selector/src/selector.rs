//! The page selector root: owns selection state and applies clicks.

use tuidom::element::find_element;
use tuidom::{Element, Event, LayoutResult, ScrollState, hit_test};

use crate::action::Action;
use crate::config::SelectorConfig;
use crate::confirm::{ConfirmHandler, Confirmation};
use crate::selection::Selection;
use crate::widgets::PageSelectorView;
use crate::widgets::page_selector::Ids;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// One selector instance.
///
/// State lives only here and is dropped with the instance; two instances
/// never share anything, even when rendered into the same tree.
#[derive(Debug)]
pub struct PageSelector {
    config: SelectorConfig,
    selection: Selection,
    scroll: ScrollState,
    hovered: Option<Action>,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl PageSelector {
    pub fn new(config: SelectorConfig) -> Self {
        let selection = Selection::new(config.pages.clone());
        Self {
            config,
            selection,
            scroll: ScrollState::new(),
            hovered: None,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn ids(&self) -> Ids<'_> {
        Ids(&self.config.id)
    }

    /// Current scroll offset of the page list, in rows.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.get(&self.ids().list())
    }

    pub fn hovered(&self) -> Option<Action> {
        self.hovered
    }

    pub fn element(&self) -> Element {
        PageSelectorView::new(&self.config, &self.selection)
            .scroll_offset(self.scroll_offset())
            .hovered(self.hovered)
            .element()
    }

    /// Apply one transition. Confirmations go to `handler` and to the log.
    pub fn apply<H>(&mut self, action: Action, handler: &mut H)
    where
        H: ConfirmHandler + ?Sized,
    {
        match action {
            Action::ToggleAll => {
                self.selection.toggle_all();
            }
            Action::TogglePage(id) => {
                self.selection.toggle(id);
            }
            Action::Confirm => handler.on_confirm(&self.confirm()),
        }
    }

    /// Snapshot the selection for "Done" and log it. The selection is left
    /// as it is.
    pub fn confirm(&self) -> Confirmation {
        let confirmation = self.selection.confirmation();
        log::info!("{}: {confirmation} {:?}", self.config.id, confirmation.labels());
        confirmation
    }

    /// Handle a batch of events against the tree and layout they were
    /// translated from. Returns true if anything visible changed.
    pub fn handle_events<H>(
        &mut self,
        events: &[Event],
        root: &Element,
        layout: &LayoutResult,
        handler: &mut H,
    ) -> bool
    where
        H: ConfirmHandler + ?Sized,
    {
        let mut changed = self.scroll.process_events(events, root, layout);
        for event in events {
            changed |= self.handle_event(event, root, layout, handler).is_handled();
        }
        changed
    }

    pub fn handle_event<H>(
        &mut self,
        event: &Event,
        root: &Element,
        layout: &LayoutResult,
        handler: &mut H,
    ) -> EventResult
    where
        H: ConfirmHandler + ?Sized,
    {
        match event {
            Event::Click { path, .. } => self.handle_click(path, root, handler),
            Event::MouseMove { x, y } => {
                let hovered = hit_test(layout, root, *x, *y)
                    .and_then(|id| self.owned_action(root, &id));
                if hovered == self.hovered {
                    return EventResult::Ignored;
                }
                self.hovered = hovered;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Run the action of every element on the hit path, deepest first.
    ///
    /// The path is already cut at the first element that stops propagation,
    /// so a checkbox inside a row contributes one action, not two.
    fn handle_click<H>(&mut self, path: &[String], root: &Element, handler: &mut H) -> EventResult
    where
        H: ConfirmHandler + ?Sized,
    {
        let actions: Vec<Action> = path
            .iter()
            .filter_map(|id| self.owned_action(root, id))
            .collect();

        if actions.is_empty() {
            return EventResult::Ignored;
        }

        for action in actions {
            log::debug!("{}: click -> {action}", self.config.id);
            self.apply(action, handler);
        }
        EventResult::Consumed
    }

    fn owned_action(&self, root: &Element, id: &str) -> Option<Action> {
        find_element(root, id)
            .and_then(|element| Action::owned_by(element, &self.config.id))
    }
}
