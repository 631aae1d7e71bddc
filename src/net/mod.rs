//! Networking modules for the board's JSON HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoint URLs and performs requests, `types` defines the wire
//! schema, and `error` classifies what can go wrong on the way.

pub mod api;
pub mod error;
pub mod types;
