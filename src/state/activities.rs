//! Activity board render model.
//!
//! One card per activity in server order, plus the option list for the
//! signup form's activity selector.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use super::LoadStatus;
use crate::net::error::ApiError;
use crate::net::types::{Activity, ActivityBoard};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// A participant row and the data its remove control carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

/// Everything one activity card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCardView {
    pub fn from_entry(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_owned(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow { activity: name.to_owned(), email: email.clone() })
                .collect(),
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Activity list state driven by `GET /activities`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesState {
    pub status: LoadStatus<Vec<ActivityCardView>>,
    /// Selector options, one per activity name. Only replaced on success.
    pub options: Vec<String>,
}

impl ActivitiesState {
    /// Replace the model with the outcome of a fresh fetch.
    ///
    /// A failure swaps the cards for the failure notice but leaves the
    /// selector options from the last successful load in place.
    pub fn apply(&mut self, outcome: Result<ActivityBoard, ApiError>) {
        match outcome {
            Ok(board) => {
                self.options = board.iter().map(|(name, _)| name.to_owned()).collect();
                self.status = LoadStatus::Ready(
                    board
                        .iter()
                        .map(|(name, activity)| ActivityCardView::from_entry(name, activity))
                        .collect(),
                );
            }
            Err(_) => self.status = LoadStatus::Failed,
        }
    }

    pub fn cards(&self) -> &[ActivityCardView] {
        self.status.ready().map(Vec::as_slice).unwrap_or_default()
    }
}
