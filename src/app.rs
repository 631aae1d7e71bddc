//! Browser bootstrap: element lookup, mounting, form wiring, first loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once the document is interactive. Element handles are resolved a
//! single time into [`Dom`] and handed to the listeners and the
//! [`BrowserSurface`]; nothing is looked up by id afterwards.
//!
//! ERROR HANDLING
//! ==============
//! A missing required element aborts startup with a [`BootError`] on the
//! console. The project-idea form is optional; without it only idea posting
//! is disabled.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::components::activities_list::ActivitiesList;
use crate::components::activity_options::ActivityOptions;
use crate::components::project_ideas_list::ProjectIdeasList;
use crate::config::{ClientConfig, DomIds};
use crate::dispatch::{Command, CommandSender, Dispatcher, Surface, command_channel, serve};
use crate::net::api::HttpApi;
use crate::net::error::ApiError;
use crate::net::types::{ActivityBoard, NewProjectIdea, ProjectIdea};
use crate::state::activities::ActivitiesState;
use crate::state::message::{MessageState, Notice};
use crate::state::project_ideas::ProjectIdeasState;
use crate::util::dom::is_loading_state;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no window.document available")]
    NoDocument,
    #[error("required element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} has an unexpected type")]
    WrongElementType(&'static str),
}

/// Install console logging and boot the client once the DOM is ready.
pub fn start(config: ClientConfig) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config.log_level);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("board client failed to start: {}", BootError::NoDocument);
        return;
    };
    on_document_ready(&document, move || {
        if let Err(err) = boot(&config) {
            log::error!("board client failed to start: {err}");
        }
    });
}

fn on_document_ready(document: &Document, run: impl FnOnce() + 'static) {
    if !is_loading_state(&document.ready_state()) {
        run();
        return;
    }
    let callback = Closure::once_into_js(run);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .is_err()
    {
        log::error!("could not listen for DOMContentLoaded");
    }
}

fn boot(config: &ClientConfig) -> Result<(), BootError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootError::NoDocument)?;
    let dom = Dom::resolve(&document)?;

    let owner = Owner::new();
    owner.with(|| wire(config, &dom));
    // The client lives as long as the page; its reactive owner never drops.
    std::mem::forget(owner);
    log::info!("board client started");
    Ok(())
}

fn wire(config: &ClientConfig, dom: &Dom) {
    let activities = RwSignal::new(ActivitiesState::default());
    let project_ideas = RwSignal::new(ProjectIdeasState::default());
    let message = RwSignal::new(MessageState::default());
    let (sender, commands) = command_channel();

    // Mount before spawning anything: mounting initialises the task executor.
    mount_lists(dom, activities, project_ideas, &sender);
    bind_message(dom.message.clone(), message);
    bind_signup_form(dom, &sender);
    match &dom.project_idea_form {
        Some(form) => bind_project_idea_form(form, &sender),
        None => log::warn!("#{} not found, idea posting disabled", DomIds::PROJECT_IDEA_FORM),
    }

    let surface = BrowserSurface {
        activities,
        project_ideas,
        message,
        signup_form: dom.signup_form.clone(),
        project_idea_form: dom.project_idea_form.as_ref().map(|f| f.form.clone()),
    };
    let api = HttpApi::new(config.api_base.clone());
    log::debug!("api base {:?}", api.base());
    let dispatcher = Rc::new(Dispatcher::new(api, surface, config.message_hide_delay));
    leptos::task::spawn_local(serve(dispatcher, commands, |task| leptos::task::spawn_local(task)));

    sender.send(Command::ReloadActivities);
    sender.send(Command::ReloadProjectIdeas);
}

// =============================================================
// Element handles
// =============================================================

/// Every element the client touches, resolved once at startup.
struct Dom {
    activities_list: HtmlElement,
    activity_select: HtmlSelectElement,
    signup_form: HtmlFormElement,
    email: HtmlInputElement,
    message: HtmlElement,
    project_ideas_list: HtmlElement,
    project_idea_form: Option<ProjectIdeaForm>,
}

struct ProjectIdeaForm {
    form: HtmlFormElement,
    title: FormField,
    description: FormField,
    skills: FormField,
    author: FormField,
}

impl Dom {
    fn resolve(document: &Document) -> Result<Self, BootError> {
        let project_idea_form = match document.get_element_by_id(DomIds::PROJECT_IDEA_FORM) {
            Some(form) => Some(ProjectIdeaForm {
                form: cast(form, DomIds::PROJECT_IDEA_FORM)?,
                title: FormField::resolve(document, DomIds::PROJECT_TITLE)?,
                description: FormField::resolve(document, DomIds::PROJECT_DESCRIPTION)?,
                skills: FormField::resolve(document, DomIds::PROJECT_SKILLS)?,
                author: FormField::resolve(document, DomIds::PROJECT_AUTHOR)?,
            }),
            None => None,
        };

        Ok(Self {
            activities_list: element(document, DomIds::ACTIVITIES_LIST)?,
            activity_select: element(document, DomIds::ACTIVITY_SELECT)?,
            signup_form: element(document, DomIds::SIGNUP_FORM)?,
            email: element(document, DomIds::SIGNUP_EMAIL)?,
            message: element(document, DomIds::MESSAGE)?,
            project_ideas_list: element(document, DomIds::PROJECT_IDEAS_LIST)?,
            project_idea_form,
        })
    }
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, BootError> {
    let found = document
        .get_element_by_id(id)
        .ok_or(BootError::MissingElement(id))?;
    cast(found, id)
}

fn cast<T: JsCast>(element: Element, id: &'static str) -> Result<T, BootError> {
    element
        .dyn_into::<T>()
        .map_err(|_| BootError::WrongElementType(id))
}

/// A text-bearing form control: input, textarea or select.
#[derive(Clone)]
struct FormField(Element);

impl FormField {
    fn resolve(document: &Document, id: &'static str) -> Result<Self, BootError> {
        element::<Element>(document, id).map(Self)
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            return select.value();
        }
        String::new()
    }
}

// =============================================================
// Mounting and listeners
// =============================================================

fn mount_lists(
    dom: &Dom,
    activities: RwSignal<ActivitiesState>,
    project_ideas: RwSignal<ProjectIdeasState>,
    sender: &CommandSender,
) {
    // Drop any loading placeholder the markup ships with.
    dom.activities_list.set_inner_html("");
    dom.project_ideas_list.set_inner_html("");

    let list_sender = sender.clone();
    leptos::mount::mount_to(dom.activities_list.clone(), move || {
        view! { <ActivitiesList state=activities sender=list_sender/> }
    })
    .forget();

    let select: HtmlElement = dom.activity_select.clone().into();
    leptos::mount::mount_to(select, move || view! { <ActivityOptions state=activities/> }).forget();

    leptos::mount::mount_to(dom.project_ideas_list.clone(), move || {
        view! { <ProjectIdeasList state=project_ideas/> }
    })
    .forget();
}

fn bind_message(element: HtmlElement, message: RwSignal<MessageState>) {
    Effect::new(move || {
        message.with(|m| {
            element.set_text_content(Some(&m.text));
            element.set_class_name(&m.class_name());
        });
    });
}

/// Attach `handler` to a form's submit event, suppressing native submission.
fn on_submit(form: &HtmlFormElement, mut handler: impl FnMut() + 'static) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        handler();
    });
    if form
        .add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("could not bind submit listener on #{}", form.id());
    }
    callback.forget();
}

fn bind_signup_form(dom: &Dom, sender: &CommandSender) {
    let activity = dom.activity_select.clone();
    let email = dom.email.clone();
    let sender = sender.clone();
    on_submit(&dom.signup_form, move || {
        sender.send(Command::Signup { activity: activity.value(), email: email.value() });
    });
}

fn bind_project_idea_form(form: &ProjectIdeaForm, sender: &CommandSender) {
    let title = form.title.clone();
    let description = form.description.clone();
    let skills = form.skills.clone();
    let author = form.author.clone();
    let sender = sender.clone();
    on_submit(&form.form, move || {
        sender.send(Command::PostProjectIdea(NewProjectIdea {
            title: title.value(),
            description: description.value(),
            skills_needed: skills.value(),
            author_email: author.value(),
        }));
    });
}

// =============================================================
// Surface
// =============================================================

/// Applies dispatcher results to signals and live form elements.
pub struct BrowserSurface {
    activities: RwSignal<ActivitiesState>,
    project_ideas: RwSignal<ProjectIdeasState>,
    message: RwSignal<MessageState>,
    signup_form: HtmlFormElement,
    project_idea_form: Option<HtmlFormElement>,
}

impl Surface for BrowserSurface {
    fn render_activities(&self, outcome: Result<ActivityBoard, ApiError>) {
        self.activities.update(|s| s.apply(outcome));
    }

    fn render_project_ideas(&self, outcome: Result<Vec<ProjectIdea>, ApiError>) {
        self.project_ideas.update(|s| s.apply(outcome));
    }

    fn show_message(&self, notice: Notice) {
        self.message.update(|m| m.show(notice));
    }

    fn schedule_message_hide(&self, delay: Duration) {
        let message = self.message;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            message.update(MessageState::hide);
        });
    }

    fn reset_signup_form(&self) {
        self.signup_form.reset();
    }

    fn reset_project_idea_form(&self) {
        if let Some(form) = &self.project_idea_form {
            form.reset();
        }
    }

    fn alert(&self, text: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text);
        }
    }
}
