//! Idea card list mounted into `#project-ideas-list`.

#[cfg(test)]
#[path = "project_ideas_list_test.rs"]
mod project_ideas_list_test;

use leptos::prelude::*;

use super::project_idea_card::ProjectIdeaCard;
use crate::state::LoadStatus;
use crate::state::project_ideas::{EMPTY_TEXT, LOAD_FAILED_TEXT, LOADING_TEXT, ProjectIdeasState};

#[component]
pub fn ProjectIdeasList(state: RwSignal<ProjectIdeasState>) -> impl IntoView {
    move || {
        state.with(|s| match &s.status {
            _ if s.is_empty_board() => view! { <p>{EMPTY_TEXT}</p> }.into_any(),
            LoadStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
            LoadStatus::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
            LoadStatus::Ready(cards) => cards
                .iter()
                .cloned()
                .map(|card| view! { <ProjectIdeaCard card=card/> })
                .collect_view()
                .into_any(),
        })
    }
}
