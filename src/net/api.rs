//! REST API access for the activities and project-ideas endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] so the rest of
//! the crate (render models, dispatcher) still compiles and tests without a
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A 2xx response must decode as the expected body. A non-2xx response must
//! decode as `{ "detail": ... }`; if it does not, the failure is reported as a
//! decode error rather than a rejection, the same way a network error is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ActivityBoard, Confirmation, NewProjectIdea, ProjectIdea};

/// `GET` target for the activity board.
pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

/// `GET` target for the idea list.
pub fn project_ideas_endpoint(base: &str) -> String {
    format!("{base}/project-ideas")
}

/// `POST` target for signing `email` up to `activity`.
pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// `DELETE` target for removing `email` from `activity`.
pub fn unregister_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// `POST` target for a new idea. All four fields are sent, even when empty.
pub fn post_project_idea_endpoint(base: &str, idea: &NewProjectIdea) -> String {
    let query = form_query(&[
        ("title", &idea.title),
        ("description", &idea.description),
        ("skills_needed", &idea.skills_needed),
        ("author_email", &idea.author_email),
    ]);
    format!("{base}/project-ideas?{query}")
}

/// Serialize pairs as an `application/x-www-form-urlencoded` query string.
pub fn form_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", form_component(key), form_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn form_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

/// Operations the board client performs against the server.
///
/// Implemented by [`HttpApi`] in the browser and by scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait Api {
    async fn fetch_activities(&self) -> Result<ActivityBoard, ApiError>;
    async fn fetch_project_ideas(&self) -> Result<Vec<ProjectIdea>, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError>;
    async fn post_project_idea(&self, idea: &NewProjectIdea) -> Result<Confirmation, ApiError>;
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Api for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivityBoard, ApiError> {
        #[cfg(feature = "csr")]
        {
            send_json(gloo_net::http::Request::get(&activities_endpoint(&self.base))).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_project_ideas(&self) -> Result<Vec<ProjectIdea>, ApiError> {
        #[cfg(feature = "csr")]
        {
            send_json(gloo_net::http::Request::get(&project_ideas_endpoint(&self.base))).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            send_json(gloo_net::http::Request::post(&url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = unregister_endpoint(&self.base, activity, email);
            send_json(gloo_net::http::Request::delete(&url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_project_idea(&self, idea: &NewProjectIdea) -> Result<Confirmation, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = post_project_idea_endpoint(&self.base, idea);
            send_json(gloo_net::http::Request::post(&url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = idea;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send_json<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::RequestBuilder,
) -> Result<T, ApiError> {
    use super::types::Rejection;

    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    let status = resp.status();
    let body: Rejection = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Err(ApiError::Rejected { status, detail: body.detail })
}
