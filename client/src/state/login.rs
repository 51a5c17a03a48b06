//! Login form state.
//!
//! Sign-in is simulated the same way as signup: a fixed delay, then a
//! client-side navigation to the dashboard. Nothing is verified.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

pub const SIMULATED_LOGIN_DELAY: Duration = Duration::from_millis(800);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Set once a sign-in is in flight; the page navigates away afterwards.
    pub busy: bool,
}

impl LoginForm {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.busy && validate_login_input(&self.username, &self.password).is_ok()
    }

    /// Mark the form busy and return the trimmed username, or `None` if the
    /// form is already busy or the username is blank.
    pub fn begin(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        let username = validate_login_input(&self.username, &self.password).ok()?;
        self.busy = true;
        Some(username)
    }
}

/// Username is required; the password is accepted as typed.
pub fn validate_login_input(username: &str, _password: &str) -> Result<String, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username.");
    }
    Ok(username.to_owned())
}
