//! Inline SVG stroke icons.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    Map,
    FileText,
    Upload,
    User,
    UserPlus,
    LogOut,
    ChevronRight,
    ChevronLeft,
    CheckCircle,
    Alert,
    Bolt,
    BarChart,
    MapPin,
    Search,
    Eye,
    EyeOff,
    Edit,
}

impl Icon {
    /// Path data on a 24x24 grid.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Home => &["M3 9l9-7 9 7v11a2 2 0 01-2 2H5a2 2 0 01-2-2z", "M9 22V12h6v10"],
            Icon::Map => &[
                "M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7",
            ],
            Icon::FileText => &[
                "M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
            ],
            Icon::Upload => &["M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4", "M17 8l-5-5-5 5", "M12 3v12"],
            Icon::User => &["M19 21v-2a4 4 0 00-4-4H9a4 4 0 00-4 4v2", "M12 11a4 4 0 100-8 4 4 0 000 8z"],
            Icon::UserPlus => &[
                "M16 21v-2a4 4 0 00-4-4H6a4 4 0 00-4 4v2",
                "M9 11a4 4 0 100-8 4 4 0 000 8z",
                "M19 8v6",
                "M22 11h-6",
            ],
            Icon::LogOut => &["M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4", "M16 17l5-5-5-5", "M21 12H9"],
            Icon::ChevronRight => &["M9 18l6-6-6-6"],
            Icon::ChevronLeft => &["M15 19l-7-7 7-7"],
            Icon::CheckCircle => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
            Icon::Alert => &[
                "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
            ],
            Icon::Bolt => &["M13 10V3L4 14h7v7l9-11h-7z"],
            Icon::BarChart => &[
                "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
            ],
            Icon::MapPin => &[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            Icon::Search => &["M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"],
            Icon::Eye => &["M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z", "M12 15a3 3 0 100-6 3 3 0 000 6z"],
            Icon::EyeOff => &[
                "M9.88 9.88a3 3 0 104.24 4.24",
                "M10.73 5.08A10.43 10.43 0 0112 5c7 0 10 7 10 7a13.16 13.16 0 01-1.67 2.68",
                "M6.61 6.61A13.53 13.53 0 002 12s3 7 10 7a9.74 9.74 0 005.39-1.61",
                "M2 2l20 20",
            ],
            Icon::Edit => &[
                "M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z",
            ],
        }
    }
}

/// Renders `icon` with `currentColor` strokes.
#[component]
pub fn IconSvg(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
