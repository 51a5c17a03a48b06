//! Signup form state and the simulated account-creation lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::signup` owns a `RwSignal<SignupPhase>` and drives it with the
//! transitions below. The delay between `begin` and `complete` is scheduled by
//! the page; nothing here touches timers.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::time::Duration;

/// Fixed delay standing in for the account-creation round trip.
pub const SIMULATED_SIGNUP_DELAY: Duration = Duration::from_millis(800);

/// Raw text of the three signup inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        validate_signup_username(&self.username).is_ok()
    }
}

/// Lifecycle of one signup attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Idle,
    Loading,
    /// Terminal: the only exit is navigating to the login page.
    Success { username: String },
}

impl SignupPhase {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SignupPhase::Loading)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SignupPhase::Success { .. })
    }

    /// Start a submission. Moves `Idle -> Loading` and returns the trimmed
    /// username to capture, or leaves the phase untouched and returns `None`
    /// when the username is blank or a submission already started.
    pub fn begin(&mut self, raw_username: &str) -> Option<String> {
        if !matches!(self, SignupPhase::Idle) {
            return None;
        }
        let username = validate_signup_username(raw_username).ok()?;
        *self = SignupPhase::Loading;
        Some(username)
    }

    /// Finish the simulated request. Only valid from `Loading`.
    pub fn complete(&mut self, username: String) {
        if self.is_loading() {
            *self = SignupPhase::Success { username };
        }
    }
}

/// Trim the username and require it to be non-empty.
pub fn validate_signup_username(raw: &str) -> Result<String, &'static str> {
    let username = raw.trim();
    if username.is_empty() {
        return Err("Enter a username first.");
    }
    Ok(username.to_owned())
}
