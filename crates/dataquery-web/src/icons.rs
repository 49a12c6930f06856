//! Inline SVG icons (24x24 stroke glyphs)

use dataquery_core::Icon;
use leptos::prelude::*;

/// Path data for a glyph, drawn in order
pub fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::MessageSquareText => &[
            "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            "M13 8H7",
            "M17 12H7",
        ],
        Icon::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        Icon::Share2 => &[
            "M18 2a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            "M6 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            "M18 16a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            "M8.59 13.51l6.83 3.98",
            "M15.41 6.51l-6.82 3.98",
        ],
        Icon::ShieldCheck => &[
            "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
            "m9 12 2 2 4-4",
        ],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::X => &["M18 6 6 18", "m6 6 12 12"],
        Icon::Check => &["M20 6 9 17l-5-5"],
    }
}

#[component]
pub fn SvgIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.as_str()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
