//! Wire DTOs for the activities and project-ideas endpoints.
//!
//! DESIGN
//! ======
//! The server owns all state; these types only mirror what it sends back so
//! each render pass can be driven straight from a fresh response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A club activity as reported by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in server order. Duplicates are not filtered.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server reports overbooking.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// The `GET /activities` payload: a JSON object keyed by activity name.
///
/// Entries keep the order the server wrote them in, and a repeated key yields
/// a repeated entry rather than overwriting the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityBoard {
    pub entries: Vec<(String, Activity)>,
}

impl ActivityBoard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }
}

impl FromIterator<(String, Activity)> for ActivityBoard {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'de> Deserialize<'de> for ActivityBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = ActivityBoard;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(ActivityBoard { entries })
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

/// A crowd-sourced project idea. Ideas carry no id; position is identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    /// Comma-separated free text.
    #[serde(default)]
    pub skills_needed: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
}

/// Form values for `POST /project-ideas`, read at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProjectIdea {
    pub title: String,
    pub description: String,
    pub skills_needed: String,
    pub author_email: String,
}

/// Success body for mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Confirmation {
    #[serde(default)]
    pub message: String,
}

/// Failure body for mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Rejection {
    #[serde(default)]
    pub detail: Option<String>,
}
