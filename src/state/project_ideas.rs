//! Project idea render model.

#[cfg(test)]
#[path = "project_ideas_test.rs"]
mod project_ideas_test;

use super::LoadStatus;
use crate::net::error::ApiError;
use crate::net::types::ProjectIdea;

pub const LOADING_TEXT: &str = "Loading project ideas...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load project ideas.";
pub const EMPTY_TEXT: &str = "No project ideas posted yet.";
pub const NO_SKILLS_TEXT: &str = "None specified";
pub const ANONYMOUS_TEXT: &str = "Anonymous";

/// The skills line of an idea card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillChips {
    /// Field absent or blank: a single "None specified" chip.
    NoneSpecified,
    /// Trimmed, non-empty tokens in input order. May be empty for input such
    /// as `",,"`.
    Listed(Vec<String>),
}

impl SkillChips {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::Listed(
                raw.split(',')
                    .map(str::trim)
                    .filter(|skill| !skill.is_empty())
                    .map(str::to_owned)
                    .collect(),
            ),
            _ => Self::NoneSpecified,
        }
    }

    /// Chip labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::NoneSpecified => vec![NO_SKILLS_TEXT],
            Self::Listed(skills) => skills.iter().map(String::as_str).collect(),
        }
    }
}

/// Who posted an idea.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Author {
    /// Rendered as a `mailto:` link labelled with the address.
    Email(String),
    Anonymous,
}

impl Author {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(email) if !email.is_empty() => Self::Email(email.to_owned()),
            _ => Self::Anonymous,
        }
    }
}

/// Everything one idea card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectIdeaCardView {
    pub title: String,
    pub description: String,
    pub skills: SkillChips,
    pub author: Author,
}

impl From<&ProjectIdea> for ProjectIdeaCardView {
    fn from(idea: &ProjectIdea) -> Self {
        Self {
            title: idea.title.clone(),
            description: idea.description.clone(),
            skills: SkillChips::parse(idea.skills_needed.as_deref()),
            author: Author::parse(idea.author_email.as_deref()),
        }
    }
}

/// Idea list state driven by `GET /project-ideas`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectIdeasState {
    pub status: LoadStatus<Vec<ProjectIdeaCardView>>,
}

impl ProjectIdeasState {
    pub fn apply(&mut self, outcome: Result<Vec<ProjectIdea>, ApiError>) {
        self.status = match outcome {
            Ok(ideas) => LoadStatus::Ready(ideas.iter().map(ProjectIdeaCardView::from).collect()),
            Err(_) => LoadStatus::Failed,
        };
    }

    /// True once a load succeeded with zero ideas.
    pub fn is_empty_board(&self) -> bool {
        self.status.ready().is_some_and(Vec::is_empty)
    }
}
