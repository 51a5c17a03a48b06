//! Dashboard shell state: active page, sidebar collapse, and the pending
//! account-action confirmation.
//!
//! DESIGN
//! ======
//! Exactly one `PageKey` is active at a time; `select` replaces it
//! outright. The collapse flag only affects the sidebar width class and never
//! touches page selection. Confirmation dialogs resolve to an `AppRoute` that
//! the sidebar hands to the router; canceling changes nothing else.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::routes::AppRoute;

/// The five content pages of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageKey {
    #[default]
    Dashboard,
    MapView,
    Reports,
    Uploads,
    Profile,
}

impl PageKey {
    pub const ALL: [PageKey; 5] = [
        PageKey::Dashboard,
        PageKey::MapView,
        PageKey::Reports,
        PageKey::Uploads,
        PageKey::Profile,
    ];

    /// Stable key used for lookup and DOM ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::MapView => "MapView",
            PageKey::Reports => "Reports",
            PageKey::Uploads => "Uploads",
            PageKey::Profile => "Profile",
        }
    }

    /// Sidebar label. Pages show their key verbatim.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.key()
    }

    #[cfg(test)]
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }
}

/// Primary navigation entries.
pub const NAV_PAGES: [PageKey; 4] = [
    PageKey::Dashboard,
    PageKey::MapView,
    PageKey::Reports,
    PageKey::Uploads,
];

/// Pages listed under "Account Pages".
pub const ACCOUNT_PAGES: [PageKey; 1] = [PageKey::Profile];

/// Account-menu actions that require confirmation and leave the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountAction {
    CreateAccount,
    Logout,
}

impl AccountAction {
    /// Sidebar order, after the account pages.
    pub const ALL: [AccountAction; 2] = [AccountAction::CreateAccount, AccountAction::Logout];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AccountAction::CreateAccount => "Create Account",
            AccountAction::Logout => "Logout",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AccountAction::CreateAccount => "Create New Account?",
            AccountAction::Logout => "Confirm Logout",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            AccountAction::CreateAccount => {
                "You will be redirected to the signup page to create a new RoadSense account."
            }
            AccountAction::Logout => {
                "Are you sure you want to logout? You will need to log in again to access your dashboard."
            }
        }
    }

    #[must_use]
    pub fn confirm_label(self) -> &'static str {
        match self {
            AccountAction::CreateAccount => "Continue",
            AccountAction::Logout => "Logout",
        }
    }

    /// Where confirming this action navigates.
    #[must_use]
    pub fn target(self) -> AppRoute {
        match self {
            AccountAction::CreateAccount => AppRoute::Signup,
            AccountAction::Logout => AppRoute::Login,
        }
    }
}

pub const SIDEBAR_EXPANDED_CLASS: &str = "sidebar--expanded";
pub const SIDEBAR_COLLAPSED_CLASS: &str = "sidebar--collapsed";

/// Dashboard shell state, provided to the sidebar and main panel as a single
/// `RwSignal`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_page: PageKey,
    pub collapsed: bool,
    pub pending_action: Option<AccountAction>,
}

impl DashboardState {
    pub fn select(&mut self, page: PageKey) {
        self.active_page = page;
    }

    #[must_use]
    pub fn is_active(&self, page: PageKey) -> bool {
        self.active_page == page
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    #[must_use]
    pub fn sidebar_width_class(&self) -> &'static str {
        if self.collapsed { SIDEBAR_COLLAPSED_CLASS } else { SIDEBAR_EXPANDED_CLASS }
    }

    /// Open the confirmation dialog for `action`.
    pub fn request(&mut self, action: AccountAction) {
        self.pending_action = Some(action);
    }

    /// Close the dialog without navigating.
    pub fn cancel(&mut self) {
        self.pending_action = None;
    }

    /// Close the dialog and return the route to navigate to, if one was open.
    pub fn confirm(&mut self) -> Option<AppRoute> {
        self.pending_action.take().map(AccountAction::target)
    }
}
