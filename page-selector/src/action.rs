//! Transitions an element can be bound to.
//!
//! Elements carry their action as a string under [`ACTION_KEY`] in their
//! data map; the selector parses it back when the element is clicked.

use std::fmt;

use crate::page::PageId;

/// Element data key holding the bound action.
pub const ACTION_KEY: &str = "action";

/// Element data key holding the id of the selector instance that bound the
/// action.
pub const OWNER_KEY: &str = "owner";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleAll,
    TogglePage(PageId),
    Confirm,
}

impl Action {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "toggle-all" => Some(Self::ToggleAll),
            "confirm" => Some(Self::Confirm),
            other => {
                let id = other.strip_prefix("toggle-page:")?.parse().ok()?;
                Some(Self::TogglePage(PageId(id)))
            }
        }
    }

    /// Action bound to an element, if any.
    pub fn of(element: &tuidom::Element) -> Option<Self> {
        element.get_data(ACTION_KEY).and_then(|key| Self::parse(key))
    }

    /// Action bound to an element by the instance `owner`. Elements of other
    /// instances yield `None`, whatever their ids look like.
    pub fn owned_by(element: &tuidom::Element, owner: &str) -> Option<Self> {
        if element.get_data(OWNER_KEY).map(String::as_str) != Some(owner) {
            return None;
        }
        Self::of(element)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleAll => write!(f, "toggle-all"),
            Self::TogglePage(id) => write!(f, "toggle-page:{id}"),
            Self::Confirm => write!(f, "confirm"),
        }
    }
}
