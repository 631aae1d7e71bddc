//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps small browser-facing decisions out of the csr-only bootstrap so
//! they build and test natively.

pub mod dom;
