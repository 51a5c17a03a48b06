//! Top-level route table.
//!
//! `app::App` registers one `<Route>` per variant; pages and dialogs refer to
//! destinations through `AppRoute` instead of string literals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// The four top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Signup,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 4] = [AppRoute::Landing, AppRoute::Login, AppRoute::Signup, AppRoute::Dashboard];

    /// Canonical browser path for this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Resolve a browser path. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}
