//! Pointer tracking for hover glow effects.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Teal used by every glow.
const GLOW_RGBA: &str = "rgba(45, 212, 191, 1)";

/// Last pointer position relative to the tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerGlow {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl PointerGlow {
    /// CSS transform centering a `2 * radius` square glow on the pointer.
    #[must_use]
    pub fn centered_transform(self, radius: f64) -> String {
        format!("translate({}px, {}px)", self.x - radius, self.y - radius)
    }

    /// Gradient for a thin edge highlight that follows the pointer along x.
    #[must_use]
    pub fn edge_gradient(self, edge_y: f64) -> String {
        format!("radial-gradient(30px circle at {}px {edge_y}px, {GLOW_RGBA} 0%, transparent 70%)", self.x)
    }
}

/// Pointer position relative to the element the listener is attached to.
pub fn local_position(ev: &leptos::ev::MouseEvent) -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let rect = el.get_bounding_client_rect();
            return (f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top());
        }
    }
    (f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
