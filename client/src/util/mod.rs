//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Browser calls are gated on the `hydrate` feature with native no-op
//! fallbacks so the pure parts stay testable.

pub mod decor;
pub mod navigation;
pub mod pointer;
pub mod timer;
pub mod typewriter;
pub mod viewport;
