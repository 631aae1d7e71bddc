//! Client configuration and the fixed markup contract.
//!
//! The client reads nothing from the environment: configuration is a plain
//! value built once at bootstrap and handed to the transport and surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Delay before a transient status message is hidden again.
pub const DEFAULT_MESSAGE_HIDE_DELAY: Duration = Duration::from_secs(5);

/// Runtime settings for the board client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every endpoint path. Empty means same-origin.
    pub api_base: String,
    /// How long the message area stays visible after a signup/unregister.
    pub message_hide_delay: Duration,
    /// Browser console log level.
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_hide_delay: DEFAULT_MESSAGE_HIDE_DELAY,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Point the client at a different origin or path prefix.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_owned();
        self
    }
}

/// Element identifiers the markup must provide.
pub struct DomIds;

impl DomIds {
    pub const ACTIVITIES_LIST: &'static str = "activities-list";
    pub const ACTIVITY_SELECT: &'static str = "activity";
    pub const SIGNUP_FORM: &'static str = "signup-form";
    pub const SIGNUP_EMAIL: &'static str = "email";
    pub const MESSAGE: &'static str = "message";
    pub const PROJECT_IDEAS_LIST: &'static str = "project-ideas-list";
    pub const PROJECT_IDEA_FORM: &'static str = "project-idea-form";
    pub const PROJECT_TITLE: &'static str = "project-title";
    pub const PROJECT_DESCRIPTION: &'static str = "project-description";
    pub const PROJECT_SKILLS: &'static str = "project-skills";
    pub const PROJECT_AUTHOR: &'static str = "project-author";
}
