//! Two-panel frame shared by the signup and login pages: the form panel with
//! a pointer-following glow on one side, the animated brand showcase on the
//! other.

use leptos::prelude::*;

use crate::components::brand::Brand;
use crate::components::decor::{BorderTrail, FloatingPaths, GradientBlobs};
use crate::components::icon::{Icon, IconSvg};
use crate::routes::AppRoute;
use crate::util::pointer::{PointerGlow, local_position};

/// Radius of the form-panel glow in pixels.
const PANEL_GLOW_RADIUS: f64 = 250.0;

#[component]
pub fn AuthShell(children: Children) -> impl IntoView {
    let glow = RwSignal::new(PointerGlow::default());

    view! {
        <div class="auth-page">
            <GradientBlobs/>
            <main class="auth-page__card">
                <BorderTrail size=100 duration_secs=8/>

                <div
                    class="auth-panel"
                    on:mousemove=move |ev| {
                        let (x, y) = local_position(&ev);
                        glow.update(|g| {
                            g.x = x;
                            g.y = y;
                        });
                    }
                    on:mouseenter=move |_| glow.update(|g| g.hovering = true)
                    on:mouseleave=move |_| glow.update(|g| g.hovering = false)
                >
                    <a href=AppRoute::Landing.path() class="auth-panel__home">
                        <IconSvg icon=Icon::ChevronLeft/>
                        <span>"Home"</span>
                    </a>

                    <Show when=move || glow.get().hovering>
                        <div
                            class="auth-panel__glow"
                            style:transform=move || glow.get().centered_transform(PANEL_GLOW_RADIUS)
                        ></div>
                    </Show>
                    <div class="auth-panel__wash"></div>

                    <Brand class="auth-panel__mobile-brand" tagline="Road safety monitoring"/>

                    <div class="auth-panel__body">{children()}</div>
                </div>

                <div class="auth-showcase">
                    <div class="auth-showcase__fade"></div>
                    <div class="auth-showcase__paths">
                        <FloatingPaths position=1/>
                        <FloatingPaths position=-1/>
                    </div>
                    <Brand class="auth-showcase__brand" tagline="Smart monitoring for safer roads"/>
                    <svg class="auth-showcase__grid" viewBox="0 0 100 100">
                        <defs>
                            <pattern id="auth-grid" width="10" height="10" patternUnits="userSpaceOnUse">
                                <path d="M 10 0 L 0 0 0 10" fill="none" stroke="currentColor" stroke-width="0.5"/>
                            </pattern>
                        </defs>
                        <rect width="100" height="100" fill="url(#auth-grid)"/>
                    </svg>
                </div>
            </main>
        </div>
    }
}
