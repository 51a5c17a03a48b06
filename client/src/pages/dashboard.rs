//! Dashboard shell: sidebar plus the main content panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! State is created fresh on every mount and provided to both halves as a
//! single `RwSignal<DashboardState>`; a reload starts again on the Dashboard
//! page with the sidebar expanded.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::main_content::MainContent;
use crate::components::sidebar::Sidebar;
use crate::state::dashboard::DashboardState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState::default());
    provide_context(dashboard);

    view! {
        <Title text="RoadSense | Dashboard"/>
        <div class="dashboard-page">
            <div class="dashboard-page__shape dashboard-page__shape--one"></div>
            <div class="dashboard-page__shape dashboard-page__shape--two"></div>
            <Sidebar/>
            <MainContent/>
        </div>
    }
}
