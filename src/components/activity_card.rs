//! Card for one activity with its participant roster.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::dispatch::{Command, CommandSender};
use crate::state::activities::{ActivityCardView, NO_PARTICIPANTS_TEXT, ParticipantRow};

#[component]
pub fn ActivityCard(card: ActivityCardView, sender: CommandSender) -> impl IntoView {
    let availability = card.availability_text();
    let participants = if card.participants.is_empty() {
        view! {
            <p>
                <em>{NO_PARTICIPANTS_TEXT}</em>
            </p>
        }
        .into_any()
    } else {
        let rows = card
            .participants
            .into_iter()
            .map(|row| view! { <ParticipantItem row=row sender=sender.clone()/> })
            .collect_view();
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">{participants}</div>
        </div>
    }
}

/// One roster row. The remove button carries the activity and email it
/// targets as `data-*` attributes.
#[component]
fn ParticipantItem(row: ParticipantRow, sender: CommandSender) -> impl IntoView {
    let ParticipantRow { activity, email } = row;
    let command = Command::Unregister { activity: activity.clone(), email: email.clone() };

    view! {
        <li>
            <span class="participant-email">{email.clone()}</span>
            <button
                class="delete-btn"
                data-activity=activity
                data-email=email
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    sender.send(command.clone());
                }
            >
                "❌"
            </button>
        </li>
    }
}
