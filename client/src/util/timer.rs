//! Browser timer helpers.

use std::time::Duration;

/// Sleep on the browser event loop. Outside the browser this resolves
/// immediately.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
