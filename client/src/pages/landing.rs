//! Marketing landing page.
//!
//! The only state is the window size, which feeds the decorative mesh
//! background once the page has mounted in the browser.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::brand::Brand;
use crate::components::decor::MeshGradient;
use crate::components::icon::{Icon, IconSvg};
use crate::routes::AppRoute;
use crate::util::viewport::Viewport;

const HIGHLIGHTS: [&str; 3] = ["Real-time Monitoring", "Instant Alerts", "Safety Reports"];

struct Feature {
    icon: Icon,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::CheckCircle,
        title: "Safety Monitoring",
        body: "Track road conditions and receive alerts about potential hazards in real-time.",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Analytics & Reports",
        body: "Get detailed insights and analytics about your driving patterns and safety score.",
    },
    Feature {
        icon: Icon::MapPin,
        title: "Route Tracking",
        body: "Monitor your routes and discover safer alternatives for your daily commute.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let viewport = RwSignal::new(Viewport::default());
    let mounted = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::read_window;

        Effect::new(move || {
            if let Some(vp) = read_window() {
                viewport.set(vp);
            }
            mounted.set(true);
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(vp) = read_window() {
                viewport.set(vp);
            }
        });
        on_cleanup(move || resize.remove());
    }

    let navigate_login = navigate.clone();
    let on_login = move |_| navigate_login(AppRoute::Login.path(), NavigateOptions::default());
    let on_get_started = move |_| navigate(AppRoute::Signup.path(), NavigateOptions::default());

    view! {
        <Title text="RoadSense | Smart Road Safety"/>
        <div class="landing-page">
            <div class="landing-page__background">
                <Show when=move || mounted.get()>
                    <MeshGradient viewport=viewport/>
                </Show>
            </div>
            <div class="landing-page__depth"></div>
            <div class="landing-page__halo"></div>

            <nav class="landing-nav">
                <Brand class="landing-nav__brand"/>
                <button class="landing-nav__login" on:click=on_login>
                    "Login"
                </button>
            </nav>

            <section class="hero">
                <div class="hero__copy">
                    <h1 class="hero__badge">
                        "Smart Road Safety Platform"
                        <IconSvg icon=Icon::ChevronRight class="hero__badge-icon"/>
                    </h1>
                    <h2 class="hero__heading">
                        "Drive Safe, Stay Smart with " <span class="shiny-text">"RoadSense"</span>
                    </h2>
                    <p class="hero__description">
                        "Your intelligent companion for safer journeys. RoadSense monitors road conditions, "
                        "tracks safety metrics, and provides real-time alerts to keep you protected on every drive."
                    </p>
                    <div class="hero__cta">
                        <span class="cta-ring">
                            <span class="cta-ring__spinner"></span>
                            <button class="cta-button" on:click=on_get_started>
                                <span class="cta-button__shine"></span>
                                <span class="cta-button__label">
                                    "Get Started"
                                    <IconSvg icon=Icon::ChevronRight class="cta-button__icon"/>
                                </span>
                            </button>
                        </span>
                    </div>
                    <div class="hero__highlights">
                        {HIGHLIGHTS
                            .iter()
                            .map(|label| {
                                view! {
                                    <div class="hero__highlight">
                                        <span class="pulse-dot"></span>
                                        <span>{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card__icon">
                                        <IconSvg icon=f.icon/>
                                    </div>
                                    <h3 class="feature-card__title">{f.title}</h3>
                                    <p class="feature-card__body">{f.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
