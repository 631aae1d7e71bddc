//! Card for one project idea.

#[cfg(test)]
#[path = "project_idea_card_test.rs"]
mod project_idea_card_test;

use leptos::prelude::*;

use crate::state::project_ideas::{ANONYMOUS_TEXT, Author, ProjectIdeaCardView};

#[component]
pub fn ProjectIdeaCard(card: ProjectIdeaCardView) -> impl IntoView {
    let chips = card
        .skills
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let label = label.to_owned();
            view! {
                {(i > 0).then_some(", ")}
                <span class="skills">{label}</span>
            }
        })
        .collect_view();

    let author = match card.author {
        Author::Email(email) => {
            let href = format!("mailto:{email}");
            view! { <a href=href>{email}</a> }.into_any()
        }
        Author::Anonymous => ANONYMOUS_TEXT.into_any(),
    };

    view! {
        <div class="project-idea-card">
            <h4>{card.title}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Skills Needed:"</strong>
                " "
                {chips}
            </p>
            <p>
                <strong>"Posted by:"</strong>
                " "
                {author}
            </p>
        </div>
    }
}
