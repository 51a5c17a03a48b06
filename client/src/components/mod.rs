//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls. Dashboard components read
//! and write the shell state through the `RwSignal<DashboardState>` context
//! provided by `pages::dashboard`.

pub mod app_input;
pub mod auth_shell;
pub mod brand;
pub mod confirm_dialog;
pub mod decor;
pub mod icon;
pub mod main_content;
pub mod page_blocks;
pub mod sidebar;
