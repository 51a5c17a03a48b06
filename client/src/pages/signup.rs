//! Account signup page.
//!
//! Submission is simulated: after a fixed delay the form is replaced by a
//! welcome panel that types out the captured username. Nothing is sent.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::app_input::{AppInput, InputKind};
use crate::components::auth_shell::AuthShell;
use crate::components::icon::{Icon, IconSvg};
use crate::routes::AppRoute;
use crate::state::signup::{SIMULATED_SIGNUP_DELAY, SignupForm, SignupPhase};
use crate::util::navigation::full_page_navigate;
use crate::util::timer::sleep;
use crate::util::typewriter::Typewriter;

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phase = RwSignal::new(SignupPhase::default());
    let typed = RwSignal::new(String::new());

    let form = Memo::new(move |_| SignupForm { username: username.get(), email: email.get(), password: password.get() });
    let loading = Memo::new(move |_| phase.with(SignupPhase::is_loading));
    let success = Memo::new(move |_| phase.with(SignupPhase::is_success));

    let submit = Callback::new(move |()| {
        let raw = form.with_untracked(|f| f.username.clone());
        let Some(name) = phase.try_update(|p| p.begin(&raw)).flatten() else {
            return;
        };
        leptos::logging::log!("signup submitted for {name}");

        leptos::task::spawn_local(async move {
            sleep(SIMULATED_SIGNUP_DELAY).await;
            if phase.try_update(|p| p.complete(name.clone())).is_none() {
                return;
            }

            let mut writer = Typewriter::new(name);
            let mut step = 0;
            loop {
                sleep(Typewriter::delay_before(step)).await;
                let Some(prefix) = writer.advance() else {
                    break;
                };
                if typed.try_set(prefix.to_owned()).is_some() {
                    break;
                }
                step += 1;
            }
        });
    });

    // Enter submits from any field until the welcome panel is showing.
    let on_enter = Callback::new(move |()| {
        if !success.get_untracked() {
            submit.run(());
        }
    });

    view! {
        <Title text="RoadSense | Sign Up"/>
        <AuthShell>
            <Show
                when=move || success.get()
                fallback=move || {
                    view! {
                        <div class="auth-form">
                            <div class="auth-form__heading">
                                <h2>"Create your account"</h2>
                                <p>"Join RoadSense for safer journeys"</p>
                            </div>

                            <div class="auth-form__fields">
                                <AppInput
                                    label="Username"
                                    placeholder="Enter your username"
                                    value=username
                                    on_enter=on_enter
                                />
                                <AppInput
                                    label="Email"
                                    placeholder="Enter your email"
                                    kind=InputKind::Email
                                    value=email
                                    on_enter=on_enter
                                />
                                <AppInput
                                    label="Password"
                                    placeholder="Enter your password"
                                    kind=InputKind::Password
                                    value=password
                                    on_enter=on_enter
                                />

                                <button
                                    class="auth-form__submit"
                                    disabled=move || loading.get() || !form.with(SignupForm::can_submit)
                                    on:click=move |_| submit.run(())
                                >
                                    <Show
                                        when=move || loading.get()
                                        fallback=|| view! { <span>"Create Account"</span> }
                                    >
                                        <span class="spinner"></span>
                                        <span>"Creating account..."</span>
                                    </Show>
                                </button>
                            </div>

                            <div class="auth-form__switch">
                                <span>"Already have an account?"</span>
                                <a href=AppRoute::Login.path()>"Sign in"</a>
                            </div>
                        </div>
                    }
                }
            >
                <div class="auth-welcome">
                    <div class="auth-welcome__heading">
                        <h2>
                            "Welcome, "
                            <span class="auth-welcome__name">
                                {move || typed.get()}
                                <span class="auth-welcome__caret"></span>
                            </span>
                        </h2>
                        <p class="auth-welcome__status">
                            <span class="pulse-dot pulse-dot--green"></span>
                            "Account created successfully"
                        </p>
                    </div>
                    <button class="auth-form__submit" on:click=move |_| full_page_navigate(AppRoute::Login)>
                        "Proceed to Login"
                        <IconSvg icon=Icon::ChevronRight/>
                    </button>
                </div>
            </Show>
        </AuthShell>
    }
}
