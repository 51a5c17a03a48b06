//! Labelled text input with a pointer-following edge glow and, for password
//! fields, a local show/hide toggle.

#[cfg(test)]
#[path = "app_input_test.rs"]
mod app_input_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::util::pointer::{PointerGlow, local_position};

/// Semantic kind of the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
}

impl InputKind {
    /// HTML `type` attribute. Password fields render as text while revealed.
    #[must_use]
    pub fn html_type(self, revealed: bool) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password if revealed => "text",
            InputKind::Password => "password",
        }
    }
}

/// Form input bound to `value`. `on_enter` fires when Enter is pressed.
///
/// The visibility flag lives inside each instance, so revealing one password
/// never affects another input.
#[component]
pub fn AppInput(
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] kind: InputKind,
    value: RwSignal<String>,
    #[prop(optional)] on_enter: Option<Callback<()>>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let glow = RwSignal::new(PointerGlow::default());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(cb) = on_enter {
                ev.prevent_default();
                cb.run(());
            }
        }
    };

    view! {
        <div class="app-input">
            <label class="app-input__label">{label}</label>
            <div class="app-input__field">
                <input
                    class="app-input__control"
                    type=move || kind.html_type(revealed.get())
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    on:mousemove=move |ev| {
                        let (x, y) = local_position(&ev);
                        glow.update(|g| {
                            g.x = x;
                            g.y = y;
                        });
                    }
                    on:mouseenter=move |_| glow.update(|g| g.hovering = true)
                    on:mouseleave=move |_| glow.update(|g| g.hovering = false)
                />
                <Show when=move || glow.get().hovering>
                    <div
                        class="app-input__glow app-input__glow--top"
                        style:background=move || glow.get().edge_gradient(0.0)
                    ></div>
                    <div
                        class="app-input__glow app-input__glow--bottom"
                        style:background=move || glow.get().edge_gradient(2.0)
                    ></div>
                </Show>
                <Show when=move || kind == InputKind::Password>
                    <button
                        type="button"
                        class="app-input__reveal"
                        title=move || if revealed.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || {
                            let icon = if revealed.get() { Icon::EyeOff } else { Icon::Eye };
                            view! { <IconSvg icon=icon/> }
                        }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
