//! Outcome of the "Done" action and how it leaves the widget.

use std::fmt;

/// What the user confirmed. Labels are in declared page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// "Done" was pressed with nothing selected.
    NoneSelected,
    Selected(Vec<String>),
}

impl Confirmation {
    pub fn from_labels(labels: Vec<String>) -> Self {
        if labels.is_empty() {
            Self::NoneSelected
        } else {
            Self::Selected(labels)
        }
    }

    pub fn labels(&self) -> &[String] {
        match self {
            Self::NoneSelected => &[],
            Self::Selected(labels) => labels,
        }
    }

    pub fn is_none_selected(&self) -> bool {
        matches!(self, Self::NoneSelected)
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneSelected => write!(f, "No pages selected"),
            Self::Selected(labels) => write!(f, "Selected pages: {}", labels.join(", ")),
        }
    }
}

/// Receives confirmations from a selector.
///
/// Implemented for any `FnMut(&Confirmation)`, so a closure can be passed
/// where the embedding application wants a callback.
pub trait ConfirmHandler {
    fn on_confirm(&mut self, confirmation: &Confirmation);
}

impl<F> ConfirmHandler for F
where
    F: FnMut(&Confirmation),
{
    fn on_confirm(&mut self, confirmation: &Confirmation) {
        (*self)(confirmation)
    }
}

/// Handler that remembers the most recent confirmation.
#[derive(Debug, Default)]
pub struct LastConfirmation(Option<Confirmation>);

impl LastConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Confirmation> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<Confirmation> {
        self.0
    }
}

impl ConfirmHandler for LastConfirmation {
    fn on_confirm(&mut self, confirmation: &Confirmation) {
        self.0 = Some(confirmation.clone());
    }
}
