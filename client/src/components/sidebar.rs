//! Collapsible dashboard sidebar: page navigation, account actions, and the
//! user card.
//!
//! ARCHITECTURE
//! ============
//! Page clicks and the collapse toggle write `DashboardState` directly.
//! Account actions open a `ConfirmDialog`; confirming stores the target route
//! in a local signal and an effect hands it to the router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::brand::Brand;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icon::{Icon, IconSvg};
use crate::routes::AppRoute;
use crate::state::dashboard::{ACCOUNT_PAGES, AccountAction, DashboardState, NAV_PAGES, PageKey};

fn page_icon(page: PageKey) -> Icon {
    match page {
        PageKey::Dashboard => Icon::Home,
        PageKey::MapView => Icon::Map,
        PageKey::Reports => Icon::FileText,
        PageKey::Uploads => Icon::Upload,
        PageKey::Profile => Icon::User,
    }
}

fn action_icon(action: AccountAction) -> Icon {
    match action {
        AccountAction::CreateAccount => Icon::UserPlus,
        AccountAction::Logout => Icon::LogOut,
    }
}

/// Dashboard sidebar. Reads `RwSignal<DashboardState>` from context.
#[component]
pub fn Sidebar() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let navigate = use_navigate();

    let collapsed = Memo::new(move |_| dashboard.get().collapsed);
    let pending = Memo::new(move |_| dashboard.get().pending_action);
    let leave_to = RwSignal::new(None::<AppRoute>);

    Effect::new(move || {
        if let Some(route) = leave_to.get() {
            leave_to.set(None);
            leptos::logging::log!("leaving dashboard for {}", route.path());
            navigate(route.path(), NavigateOptions::default());
        }
    });

    let on_cancel = Callback::new(move |()| dashboard.update(DashboardState::cancel));
    let on_confirm = Callback::new(move |()| {
        let mut target = None;
        dashboard.update(|s| target = s.confirm());
        leave_to.set(target);
    });

    let page_link = move |page: PageKey| {
        view! {
            <a
                href="#"
                class=move || {
                    let mut class = String::from("nav-link");
                    if collapsed.get() {
                        class.push_str(" nav-link--compact");
                    }
                    if dashboard.get().is_active(page) {
                        class.push_str(" nav-link--active");
                    }
                    class
                }
                title=move || if collapsed.get() { page.label() } else { "" }
                on:click=move |ev| {
                    ev.prevent_default();
                    dashboard.update(|s| s.select(page));
                }
            >
                <IconSvg icon=page_icon(page) class="nav-link__icon"/>
                <Show when=move || !collapsed.get()>
                    <span class="nav-link__label">{page.label()}</span>
                </Show>
            </a>
        }
    };

    let action_button = move |action: AccountAction| {
        view! {
            <button
                class=move || if collapsed.get() { "nav-link nav-link--compact" } else { "nav-link" }
                title=move || if collapsed.get() { action.label() } else { "" }
                on:click=move |_| dashboard.update(|s| s.request(action))
            >
                <IconSvg icon=action_icon(action) class="nav-link__icon"/>
                <Show when=move || !collapsed.get()>
                    <span class="nav-link__label">{action.label()}</span>
                </Show>
            </button>
        }
    };

    view! {
        <aside class=move || format!("sidebar {}", dashboard.get().sidebar_width_class())>
            <div class="sidebar__header">
                <Brand class="sidebar__brand" show_name=false/>
                <Show when=move || !collapsed.get()>
                    <span class="sidebar__name">"RoadSense"</span>
                </Show>
                <button
                    class="sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| dashboard.update(DashboardState::toggle_collapsed)
                >
                    <span class=move || {
                        if collapsed.get() { "sidebar__chevron sidebar__chevron--flipped" } else { "sidebar__chevron" }
                    }>
                        <IconSvg icon=Icon::ChevronLeft/>
                    </span>
                </button>
            </div>

            <nav class="sidebar__nav">
                {NAV_PAGES.into_iter().map(page_link).collect_view()}
                <div class="sidebar__section">
                    <Show when=move || !collapsed.get()>
                        <p class="sidebar__section-title">"Account Pages"</p>
                    </Show>
                    {ACCOUNT_PAGES.into_iter().map(page_link).collect_view()}
                    {AccountAction::ALL.into_iter().map(action_button).collect_view()}
                </div>
            </nav>

            <div class="sidebar__footer">
                <div class="user-card">
                    <div class="user-card__avatar">"D"</div>
                    <Show when=move || !collapsed.get()>
                        <div class="user-card__text">
                            <p class="user-card__name">"Driver123"</p>
                            <p class="user-card__status">"Active User"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </aside>

        {move || {
            pending.get().map(|action| view! { <ConfirmDialog action=action on_cancel=on_cancel on_confirm=on_confirm/> })
        }}
    }
}
