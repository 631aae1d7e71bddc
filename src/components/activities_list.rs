//! Activity card list mounted into `#activities-list`.

#[cfg(test)]
#[path = "activities_list_test.rs"]
mod activities_list_test;

use leptos::prelude::*;

use super::activity_card::ActivityCard;
use crate::dispatch::CommandSender;
use crate::state::LoadStatus;
use crate::state::activities::{ActivitiesState, LOAD_FAILED_TEXT, LOADING_TEXT};

/// Rebuilds every card from scratch whenever the state is replaced.
#[component]
pub fn ActivitiesList(state: RwSignal<ActivitiesState>, sender: CommandSender) -> impl IntoView {
    move || {
        state.with(|s| match &s.status {
            LoadStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
            LoadStatus::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
            LoadStatus::Ready(cards) => cards
                .iter()
                .cloned()
                .map(|card| view! { <ActivityCard card=card sender=sender.clone()/> })
                .collect_view()
                .into_any(),
        })
    }
}
