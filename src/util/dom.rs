//! Document lifecycle helpers.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// True while `document.readyState` says the markup is still being parsed.
/// Element lookups must wait for `DOMContentLoaded` in that state.
pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}
