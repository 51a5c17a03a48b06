//! Dashboard main panel: page header, search box, and the active page's
//! blocks.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::page_blocks::PageBlocks;
use crate::content::page_content;
use crate::state::dashboard::DashboardState;

#[component]
pub fn MainContent() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let active = Memo::new(move |_| dashboard.get().active_page);
    // Local to the panel; nothing is filtered by it.
    let search = RwSignal::new(String::new());

    view! {
        <main class="main-content">
            <header class="main-content__header">
                <div>
                    <h1 class="main-content__title">{move || page_content(active.get()).title}</h1>
                    <p class="main-content__description">{move || page_content(active.get()).description}</p>
                </div>
                <label class="search-box">
                    <IconSvg icon=Icon::Search class="search-box__icon"/>
                    <input
                        class="search-box__input"
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </label>
            </header>
            <div class="main-content__body" data-page=move || active.get().key()>
                {move || view! { <PageBlocks blocks=page_content(active.get()).blocks/> }}
            </div>
        </main>
    }
}
