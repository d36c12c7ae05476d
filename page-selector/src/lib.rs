//! A page-selection popover for the terminal.
//!
//! The popover offers an "All pages" toggle, one selectable row per page and
//! a "Done" button. [`PageSelector`] owns the selection and applies clicks;
//! the components under [`widgets`] only build tuidom elements. Confirming
//! hands a [`Confirmation`] to a caller-supplied [`ConfirmHandler`].

pub mod action;
pub mod app;
pub mod config;
pub mod confirm;
pub mod error;
pub mod page;
pub mod paths;
pub mod selection;
pub mod selector;
pub mod theme;
pub mod widgets;

pub use action::Action;
pub use config::{Dimensions, SelectorConfig};
pub use confirm::{ConfirmHandler, Confirmation, LastConfirmation};
pub use error::{AppError, PageSetError};
pub use page::{Page, PageId, PageSet};
pub use selection::Selection;
pub use selector::{EventResult, PageSelector};
pub use theme::Theme;
