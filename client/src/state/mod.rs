//! Transient UI state for the route-level views.
//!
//! DESIGN
//! ======
//! Each module holds a plain-data state type plus its transitions. Pages wrap
//! these in `RwSignal`s; the transitions stay free of Leptos so they can be
//! exercised natively in tests.

pub mod dashboard;
pub mod login;
pub mod signup;
