//! Render models for the two lists and the status message.
//!
//! DESIGN
//! ======
//! Each model is rebuilt wholesale from the latest server response, never
//! patched, so the view layer only ever mirrors one server snapshot.

pub mod activities;
pub mod message;
pub mod project_ideas;

/// Where a list is in its fetch-and-render cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus<T> {
    /// No response has arrived yet.
    #[default]
    Loading,
    /// The latest fetch succeeded.
    Ready(T),
    /// The latest fetch failed; the list shows a static notice.
    Failed,
}

impl<T> LoadStatus<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
