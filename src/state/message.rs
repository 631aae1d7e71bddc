//! Transient status message shown after signup and unregister.
//!
//! At most one message is visible. Showing a new one overwrites the old one;
//! any hide timer already scheduled still fires and hides whatever is shown.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

pub const REJECTED_FALLBACK_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";

const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message waiting to be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }
}

/// State mirrored onto the `#message` element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageState {
    pub text: String,
    pub tone: Option<Tone>,
    pub visible: bool,
}

impl MessageState {
    pub fn show(&mut self, notice: Notice) {
        self.text = notice.text;
        self.tone = Some(notice.tone);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Full `class` attribute value for the message element.
    pub fn class_name(&self) -> String {
        match (self.tone, self.visible) {
            (Some(tone), true) => tone.class().to_owned(),
            (Some(tone), false) => format!("{} {HIDDEN_CLASS}", tone.class()),
            (None, _) => HIDDEN_CLASS.to_owned(),
        }
    }
}
