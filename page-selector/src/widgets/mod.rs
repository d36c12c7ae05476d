//! Visual components of the selector.
//!
//! Each component is a builder that produces a tuidom [`Element`]. Components
//! hold no state: checked flags and hover come in from the owner, and click
//! handlers are [`Action`]s stored on the element as data.
//!
//! [`Element`]: tuidom::Element
//! [`Action`]: crate::action::Action

pub mod checkbox;
pub mod divider;
pub mod page_item;
pub mod page_selector;

pub use checkbox::Checkbox;
pub use divider::Divider;
pub use page_item::PageItem;
pub use page_selector::PageSelectorView;
