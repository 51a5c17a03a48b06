//! Full-page navigation.
//!
//! Client-side moves go through `leptos_router::hooks::use_navigate`; this is
//! for the places that deliberately reload the document.

use crate::routes::AppRoute;

/// Replace the current document with `route`. No-op outside the browser.
pub fn full_page_navigate(route: AppRoute) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(route.path()) {
                leptos::logging::warn!("navigation to {} failed: {e:?}", route.path());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = route;
    }
}
