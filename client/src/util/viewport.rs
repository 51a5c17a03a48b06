//! Window size tracking for decorative backgrounds.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Inner window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0 }
    }
}

impl Viewport {
    /// Width over height, guarded against a zero-height window.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height.max(1.0)
    }
}

/// Current window size, or `None` outside the browser.
pub fn read_window() -> Option<Viewport> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Viewport { width, height })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
