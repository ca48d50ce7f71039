//! Icon grid - column count comes from the grid density and viewport width

use crate::display_types::IconEntry;
use dioxus::prelude::*;
use ikon_common::{cdn_url, FrameworkId, IconData};

/// Inline style painting the hosted SVG in `color` through a CSS mask.
fn tinted_icon_style(url: &str, color: &str) -> String {
    format!(
        "background-color: {color}; -webkit-mask: url('{url}') center / contain no-repeat; mask: url('{url}') center / contain no-repeat;"
    )
}

#[component]
pub fn IconGridView(
    icons: Vec<IconEntry>,
    columns: usize,
    icon_color: String,
    cdn_version: String,
    #[props(default)]
    selected: Option<IconData>,
    on_select: EventHandler<IconData>,
) -> Element {
    if icons.is_empty() {
        return rsx! {
            div { class: "py-16 text-center text-sm text-gray-500", "No icons match your search." }
        };
    }

    let grid_style = format!("grid-template-columns: repeat({columns}, minmax(0, 1fr));");
    let cells: Vec<(String, bool, String, IconData)> = icons
        .into_iter()
        .map(|entry| {
            let key = format!("{}-{}", entry.icon.name, entry.icon.style);
            let is_selected = selected.as_ref() == Some(&entry.icon);
            let style = tinted_icon_style(
                &cdn_url(FrameworkId::Svg, &entry.icon, &cdn_version),
                &icon_color,
            );
            (key, is_selected, style, entry.icon)
        })
        .collect();

    rsx! {
        ul { class: "grid gap-2", style: "{grid_style}",
            for (key , is_selected , style , icon) in cells {
                IconCell {
                    key: "{key}",
                    is_selected,
                    style,
                    icon,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn IconCell(
    icon: IconData,
    is_selected: bool,
    style: String,
    on_select: EventHandler<IconData>,
) -> Element {
    let ring = if is_selected {
        "ring-2 ring-blue-500 bg-blue-50 dark:bg-blue-950/40"
    } else {
        "hover:bg-gray-100 dark:hover:bg-gray-800"
    };
    let label = icon.name.clone();

    rsx! {
        li {
            button {
                r#type: "button",
                class: "w-full aspect-square flex flex-col items-center justify-center gap-2 rounded-lg transition-colors {ring}",
                title: "{label}",
                aria_pressed: if is_selected { "true" } else { "false" },
                onclick: move |_| on_select.call(icon.clone()),
                span { class: "w-8 h-8", style: "{style}", aria_hidden: "true" }
                span { class: "text-[11px] text-gray-500 truncate max-w-full px-1", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_style_masks_with_url() {
        let style = tinted_icon_style("https://x.test/home.svg", "#3b82f6");
        assert!(style.starts_with("background-color: #3b82f6;"));
        assert!(style.contains("mask: url('https://x.test/home.svg')"));
    }
}
