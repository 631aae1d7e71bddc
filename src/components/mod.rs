//! Leptos components for the two lists and the activity selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are mounted into containers that already exist in the page
//! markup. They read render models from signals and send user actions as
//! commands; they never talk to the network.

pub mod activities_list;
pub mod activity_card;
pub mod activity_options;
pub mod project_idea_card;
pub mod project_ideas_list;
