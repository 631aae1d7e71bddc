use super::*;
use crate::state::project_ideas::SkillChips;

/// Renders to HTML with hydration markers stripped so text assertions read
/// like the DOM.
fn render(card: ProjectIdeaCardView) -> String {
    Owner::new()
        .with(|| view! { <ProjectIdeaCard card=card/> }.to_html())
        .replace("<!>", "")
}

fn card(skills: Option<&str>, author: Option<&str>) -> ProjectIdeaCardView {
    ProjectIdeaCardView {
        title: "Weather station".to_owned(),
        description: "Log the weather".to_owned(),
        skills: SkillChips::parse(skills),
        author: Author::parse(author),
    }
}

#[test]
fn skills_render_as_comma_joined_chips() {
    let html = render(card(Some("a, b ,,c"), None));
    assert!(html.contains(
        r#"<span class="skills">a</span>, <span class="skills">b</span>, <span class="skills">c</span>"#
    ));
    assert_eq!(html.matches(r#"class="skills""#).count(), 3);
}

#[test]
fn blank_skills_render_single_none_specified_chip() {
    let html = render(card(Some(""), None));
    assert_eq!(html.matches(r#"class="skills""#).count(), 1);
    assert!(html.contains(r#"<span class="skills">None specified</span>"#));
}

#[test]
fn author_email_renders_as_mailto_link() {
    let html = render(card(None, Some("sam@mergington.edu")));
    assert!(html.contains(r#"href="mailto:sam@mergington.edu""#));
    assert!(html.contains(">sam@mergington.edu</a>"));
    assert!(!html.contains(ANONYMOUS_TEXT));
}

#[test]
fn missing_author_renders_anonymous_text() {
    let html = render(card(None, None));
    assert!(html.contains(ANONYMOUS_TEXT));
    assert!(!html.contains("mailto:"));
    assert!(!html.contains("<a"));
}
