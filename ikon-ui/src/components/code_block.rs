//! A single snippet with a copy button

use crate::components::button::ChromelessButton;
use crate::components::icons::{CheckIcon, CopyIcon};
use crate::display_types::SnippetKind;
use dioxus::prelude::*;

#[component]
pub fn CodeBlockView(
    kind: SnippetKind,
    code: String,
    /// This snippet was the last one copied
    copied: bool,
    on_copy: EventHandler<(SnippetKind, String)>,
) -> Element {
    let copy_label = format!("Copy {} snippet", kind.label().to_lowercase());

    rsx! {
        section { class: "flex flex-col gap-1.5",
            div { class: "flex items-center justify-between",
                h4 { class: "text-xs font-semibold uppercase tracking-wide text-gray-500",
                    "{kind.label()}"
                }
                ChromelessButton {
                    class: Some(
                        "inline-flex items-center gap-1 px-2 py-1 rounded text-xs text-gray-500 hover:text-gray-900 hover:bg-gray-200/60 dark:hover:text-white dark:hover:bg-gray-700/50"
                            .to_string(),
                    ),
                    title: Some(copy_label.clone()),
                    aria_label: Some(copy_label),
                    onclick: {
                        let code = code.clone();
                        move |_| on_copy.call((kind, code.clone()))
                    },
                    if copied {
                        CheckIcon { class: "w-3.5 h-3.5 text-green-500" }
                        "Copied"
                    } else {
                        CopyIcon { class: "w-3.5 h-3.5" }
                        "Copy"
                    }
                }
            }
            pre { class: "text-xs leading-relaxed rounded-lg p-3 overflow-x-auto bg-gray-100 text-gray-800 dark:bg-gray-900 dark:text-gray-200",
                code { "{code}" }
            }
        }
    }
}
