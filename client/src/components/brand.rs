//! RoadSense logo lockups.

use leptos::prelude::*;

pub const LOGO_SRC: &str = "/roadsense.svg";

/// Logo image with the product name and an optional tagline.
#[component]
pub fn Brand(
    #[prop(optional, into)] class: String,
    #[prop(optional)] tagline: Option<&'static str>,
    #[prop(default = true)] show_name: bool,
) -> impl IntoView {
    view! {
        <div class=format!("brand {class}")>
            <img class="brand__logo" src=LOGO_SRC alt="RoadSense Logo"/>
            <Show when=move || show_name>
                <div class="brand__text">
                    <span class="brand__name">"RoadSense"</span>
                    {tagline.map(|t| view! { <span class="brand__tagline">{t}</span> })}
                </div>
            </Show>
        </div>
    }
}
