//! Page header with search and theme toggle

use crate::components::button::ChromelessButton;
use crate::components::icons::{MoonIcon, SearchIcon, SunIcon};
use dioxus::prelude::*;
use ikon_common::Theme;

pub const SEARCH_INPUT_ID: &str = "icon-search";

#[component]
pub fn HeaderView(
    query: String,
    on_query_change: EventHandler<String>,
    /// Number of icons matching the query
    match_count: usize,
    theme: Theme,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let theme_label = match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    rsx! {
        header { class: "flex items-center gap-4 px-6 py-4 border-b border-gray-200 dark:border-gray-800",
            h1 { class: "text-lg font-semibold whitespace-nowrap", "Tabler Icons" }
            div { class: "relative flex-1 max-w-xl",
                SearchIcon { class: "w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-gray-400" }
                input {
                    id: SEARCH_INPUT_ID,
                    r#type: "search",
                    class: "w-full pl-9 pr-3 py-2 rounded-lg text-sm bg-gray-100 dark:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-blue-500",
                    placeholder: "Search icons...",
                    value: "{query}",
                    oninput: move |e| on_query_change.call(e.value()),
                }
            }
            span { class: "text-xs text-gray-500 whitespace-nowrap", "{match_count} icons" }
            ChromelessButton {
                class: Some(
                    "p-2 rounded-lg text-gray-500 hover:text-gray-900 hover:bg-gray-200/60 dark:hover:text-white dark:hover:bg-gray-700/50"
                        .to_string(),
                ),
                title: Some(theme_label.to_string()),
                aria_label: Some(theme_label.to_string()),
                onclick: move |_| on_toggle_theme.call(()),
                if theme == Theme::Light {
                    MoonIcon { class: "w-5 h-5" }
                } else {
                    SunIcon { class: "w-5 h-5" }
                }
            }
        }
    }
}
