//! Command dispatch: the mutation handlers and the reload passes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form submits and remove clicks never call the network themselves. They
//! send a [`Command`] through a [`CommandSender`]; [`serve`] receives each one
//! and spawns [`Dispatcher::dispatch`] for it, so commands run side by side
//! with no deduplication, locking, or cancellation. A successful mutation
//! always ends in a full reload of the affected list.
//!
//! ERROR HANDLING
//! ==============
//! Every [`ApiError`] stops here. Signup and unregister report through the
//! transient message area; posting an idea reports through a blocking alert.
//! Nothing is retried.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::StreamExt;
use futures::channel::mpsc;
use futures::future::LocalBoxFuture;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{ActivityBoard, NewProjectIdea, ProjectIdea};
use crate::state::message::{Notice, REJECTED_FALLBACK_TEXT, SIGNUP_FAILED_TEXT, UNREGISTER_FAILED_TEXT};

pub const POST_IDEA_FAILED_TEXT: &str = "Failed to post project idea.";

/// A user action or reload request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ReloadActivities,
    ReloadProjectIdeas,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
    PostProjectIdea(NewProjectIdea),
}

/// The three user-triggered write actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
    PostProjectIdea,
}

/// Receiving half of the command channel.
pub type CommandReceiver = mpsc::UnboundedReceiver<Command>;

/// Cloneable handle views and listeners use to submit commands.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<Command>,
}

impl CommandSender {
    /// Queue a command. Returns `false` once the dispatcher is gone.
    pub fn send(&self, command: Command) -> bool {
        match self.tx.unbounded_send(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("dropping command, dispatcher closed: {:?}", err.into_inner());
                false
            }
        }
    }
}

/// Create a connected sender/receiver pair.
pub fn command_channel() -> (CommandSender, CommandReceiver) {
    let (tx, rx) = mpsc::unbounded();
    (CommandSender { tx }, rx)
}

/// Everything the dispatcher needs from the page.
///
/// The browser implementation writes into Leptos signals and DOM handles;
/// tests record the calls.
pub trait Surface {
    fn render_activities(&self, outcome: Result<ActivityBoard, ApiError>);
    fn render_project_ideas(&self, outcome: Result<Vec<ProjectIdea>, ApiError>);
    fn show_message(&self, notice: Notice);
    /// Hide the message area after `delay`. Earlier timers are not cancelled.
    fn schedule_message_hide(&self, delay: Duration);
    fn reset_signup_form(&self);
    fn reset_project_idea_form(&self);
    /// Blocking alert dialog.
    fn alert(&self, text: &str);
}

#[derive(Debug, Default)]
struct InFlight {
    signup: Cell<u32>,
    unregister: Cell<u32>,
    post_project_idea: Cell<u32>,
}

impl InFlight {
    fn counter(&self, kind: Mutation) -> &Cell<u32> {
        match kind {
            Mutation::Signup => &self.signup,
            Mutation::Unregister => &self.unregister,
            Mutation::PostProjectIdea => &self.post_project_idea,
        }
    }
}

/// Marks one mutation as submitting until dropped.
struct Submitting<'a> {
    counter: &'a Cell<u32>,
}

impl<'a> Submitting<'a> {
    fn start(counter: &'a Cell<u32>) -> Self {
        counter.set(counter.get() + 1);
        Self { counter }
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.counter.set(self.counter.get().saturating_sub(1));
    }
}

/// Runs commands against an [`Api`] and reflects results on a [`Surface`].
pub struct Dispatcher<A, S> {
    api: A,
    surface: S,
    message_hide_delay: Duration,
    in_flight: InFlight,
}

impl<A: Api, S: Surface> Dispatcher<A, S> {
    pub fn new(api: A, surface: S, message_hide_delay: Duration) -> Self {
        Self { api, surface, message_hide_delay, in_flight: InFlight::default() }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of `kind` requests awaiting their server response. Zero means
    /// idle; the follow-up reload is not counted.
    ///
    /// Informational only: a second submit is sent even while one is pending.
    pub fn in_flight(&self, kind: Mutation) -> u32 {
        self.in_flight.counter(kind).get()
    }

    pub async fn dispatch(&self, command: Command) {
        match command {
            Command::ReloadActivities => self.reload_activities().await,
            Command::ReloadProjectIdeas => self.reload_project_ideas().await,
            Command::Signup { activity, email } => self.signup(&activity, &email).await,
            Command::Unregister { activity, email } => self.unregister(&activity, &email).await,
            Command::PostProjectIdea(idea) => self.post_project_idea(&idea).await,
        }
    }

    /// Invalidate the activity list and rebuild it from a fresh fetch.
    pub async fn reload_activities(&self) {
        let outcome = self.api.fetch_activities().await;
        match &outcome {
            Ok(board) => log::debug!("loaded {} activities", board.len()),
            Err(err) => log::error!("error fetching activities: {err}"),
        }
        self.surface.render_activities(outcome);
    }

    /// Invalidate the idea list and rebuild it from a fresh fetch.
    pub async fn reload_project_ideas(&self) {
        let outcome = self.api.fetch_project_ideas().await;
        match &outcome {
            Ok(ideas) => log::debug!("loaded {} project ideas", ideas.len()),
            Err(err) => log::error!("error fetching project ideas: {err}"),
        }
        self.surface.render_project_ideas(outcome);
    }

    pub async fn signup(&self, activity: &str, email: &str) {
        let outcome = {
            let _submitting = Submitting::start(self.in_flight.counter(Mutation::Signup));
            self.api.signup(activity, email).await
        };
        match outcome {
            Ok(confirmation) => {
                log::debug!("signed up {email} for {activity}");
                self.surface.reset_signup_form();
                self.flash(Notice::success(confirmation.message));
                self.reload_activities().await;
            }
            Err(err) => {
                log::error!("error signing up: {err}");
                self.flash(Notice::error(failure_text(&err, SIGNUP_FAILED_TEXT)));
            }
        }
    }

    pub async fn unregister(&self, activity: &str, email: &str) {
        let outcome = {
            let _submitting = Submitting::start(self.in_flight.counter(Mutation::Unregister));
            self.api.unregister(activity, email).await
        };
        match outcome {
            Ok(confirmation) => {
                log::debug!("unregistered {email} from {activity}");
                self.flash(Notice::success(confirmation.message));
                self.reload_activities().await;
            }
            Err(err) => {
                log::error!("error unregistering: {err}");
                self.flash(Notice::error(failure_text(&err, UNREGISTER_FAILED_TEXT)));
            }
        }
    }

    /// Failures surface as an alert, not the message area. Kept as observed;
    /// whether that asymmetry was intended is unknown.
    pub async fn post_project_idea(&self, idea: &NewProjectIdea) {
        let outcome = {
            let _submitting = Submitting::start(self.in_flight.counter(Mutation::PostProjectIdea));
            self.api.post_project_idea(idea).await
        };
        match outcome {
            Ok(_) => {
                log::debug!("posted project idea {:?}", idea.title);
                self.surface.reset_project_idea_form();
                self.reload_project_ideas().await;
            }
            Err(err) => {
                log::error!("error posting project idea: {err}");
                self.surface.alert(err.detail().unwrap_or(POST_IDEA_FAILED_TEXT));
            }
        }
    }

    fn flash(&self, notice: Notice) {
        self.surface.show_message(notice);
        self.surface.schedule_message_hide(self.message_hide_delay);
    }
}

/// Message text for a failed signup or unregister.
///
/// Rejections show the server detail or a generic fallback; transport and
/// parse failures show the handler's own retry hint.
pub fn failure_text(err: &ApiError, transport_text: &str) -> String {
    if err.is_rejection() {
        err.detail().unwrap_or(REJECTED_FALLBACK_TEXT).to_owned()
    } else {
        transport_text.to_owned()
    }
}

/// Receive commands until every sender is dropped, spawning one task per
/// command through `spawn`.
pub async fn serve<A, S>(
    dispatcher: Rc<Dispatcher<A, S>>,
    mut commands: CommandReceiver,
    spawn: impl Fn(LocalBoxFuture<'static, ()>),
) where
    A: Api + 'static,
    S: Surface + 'static,
{
    while let Some(command) = commands.next().await {
        let dispatcher = Rc::clone(&dispatcher);
        spawn(Box::pin(async move { dispatcher.dispatch(command).await }));
    }
    log::debug!("command channel closed");
}
