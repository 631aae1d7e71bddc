//! `<option>` entries appended to the `#activity` selector.

#[cfg(test)]
#[path = "activity_options_test.rs"]
mod activity_options_test;

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;

/// One option per activity name, value and label both the name.
///
/// Options only change on a successful load; markup-provided options such as
/// a placeholder stay ahead of them untouched.
#[component]
pub fn ActivityOptions(state: RwSignal<ActivitiesState>) -> impl IntoView {
    let names = Memo::new(move |_| state.with(|s| s.options.clone()));

    move || {
        names
            .get()
            .into_iter()
            .map(|name| {
                let label = name.clone();
                view! { <option value=name>{label}</option> }
            })
            .collect_view()
    }
}
