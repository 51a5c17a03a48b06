//! Sign-in page.
//!
//! Credentials are not checked. After the simulated delay the router moves to
//! the dashboard.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::app_input::{AppInput, InputKind};
use crate::components::auth_shell::AuthShell;
use crate::routes::AppRoute;
use crate::state::login::{LoginForm, SIMULATED_LOGIN_DELAY};
use crate::util::timer::sleep;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    let form = Memo::new(move |_| LoginForm { username: username.get(), password: password.get(), busy: busy.get() });

    Effect::new(move || {
        if signed_in.get() {
            leptos::logging::log!("sign-in complete, opening dashboard");
            navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |()| {
        let Some(name) = form.get_untracked().begin() else {
            return;
        };
        busy.set(true);
        leptos::logging::log!("sign-in submitted for {name}");

        leptos::task::spawn_local(async move {
            sleep(SIMULATED_LOGIN_DELAY).await;
            let _ = signed_in.try_set(true);
        });
    });

    view! {
        <Title text="RoadSense | Sign In"/>
        <AuthShell>
            <div class="auth-form">
                <div class="auth-form__heading">
                    <h2>"Welcome back"</h2>
                    <p>"Sign in to continue to RoadSense"</p>
                </div>

                <div class="auth-form__fields">
                    <AppInput label="Username" placeholder="Enter your username" value=username on_enter=submit/>
                    <AppInput
                        label="Password"
                        placeholder="Enter your password"
                        kind=InputKind::Password
                        value=password
                        on_enter=submit
                    />

                    <button
                        class="auth-form__submit"
                        disabled=move || !form.with(LoginForm::can_submit)
                        on:click=move |_| submit.run(())
                    >
                        <Show when=move || busy.get() fallback=|| view! { <span>"Sign In"</span> }>
                            <span class="spinner"></span>
                            <span>"Signing in..."</span>
                        </Show>
                    </button>
                </div>

                <div class="auth-form__switch">
                    <span>"Don't have an account?"</span>
                    <a href=AppRoute::Signup.path()>"Sign up"</a>
                </div>
            </div>
        </AuthShell>
    }
}
