//! Decorative animated backgrounds. No state beyond what is passed in.

use leptos::prelude::*;

use crate::util::decor::{MeshBackground, floating_paths};
use crate::util::viewport::Viewport;

/// Full-screen mesh gradient sized to the viewport.
#[component]
pub fn MeshGradient(#[prop(into)] viewport: Signal<Viewport>) -> impl IntoView {
    let style = move || MeshBackground::for_viewport(viewport.get()).style();
    view! {
        <div class="mesh-gradient" style=style></div>
        <div class="mesh-gradient__veil"></div>
    }
}

/// One family of slowly drifting SVG strokes, mirrored by `position`.
#[component]
pub fn FloatingPaths(position: i64) -> impl IntoView {
    view! {
        <div class="floating-paths">
            <svg class="floating-paths__svg" viewBox="0 0 696 316" fill="none">
                {floating_paths(position)
                    .into_iter()
                    .map(|path| {
                        view! {
                            <path
                                class="floating-paths__path"
                                d=path.d
                                stroke="currentColor"
                                stroke-width=path.stroke_width.to_string()
                                stroke-opacity=path.stroke_opacity.to_string()
                                style:animation-duration=format!("{}s", path.duration_secs)
                            ></path>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Glowing segment that travels along the border of its positioned parent.
#[component]
pub fn BorderTrail(#[prop(default = 60)] size: u32, #[prop(default = 5)] duration_secs: u32) -> impl IntoView {
    view! {
        <div class="border-trail">
            <div
                class="border-trail__spark"
                style:width=format!("{size}px")
                style:offset-path=format!("rect(0 auto auto 0 round {size}px)")
                style:animation-duration=format!("{duration_secs}s")
            ></div>
        </div>
    }
}

/// Blurred color blobs drifting behind the auth forms.
#[component]
pub fn GradientBlobs() -> impl IntoView {
    view! {
        <div class="gradient-blobs">
            <div class="gradient-blobs__blob gradient-blobs__blob--vertical"></div>
            <div class="gradient-blobs__blob gradient-blobs__blob--circle"></div>
            <div class="gradient-blobs__blob gradient-blobs__blob--circle-slow"></div>
            <div class="gradient-blobs__blob gradient-blobs__blob--horizontal"></div>
        </div>
    }
}
