//! Selected-icon panel with install, import and usage snippets

use crate::components::button::ChromelessButton;
use crate::components::code_block::CodeBlockView;
use crate::components::icons::XIcon;
use crate::display_types::SnippetKind;
use dioxus::prelude::*;
use ikon_common::{CodeExample, IconData};

fn snippet(example: &CodeExample, kind: SnippetKind) -> &str {
    match kind {
        SnippetKind::Install => &example.install,
        SnippetKind::Import => &example.import,
        SnippetKind::Usage => &example.usage,
    }
}

#[component]
pub fn IconDetailView(
    icon: IconData,
    framework_name: String,
    example: CodeExample,
    copied: Option<SnippetKind>,
    on_copy: EventHandler<(SnippetKind, String)>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        aside { class: "flex flex-col gap-4 p-5 rounded-xl border border-gray-200 dark:border-gray-800",
            div { class: "flex items-start justify-between gap-2",
                div {
                    h2 { class: "text-base font-semibold", "{icon.component_name}" }
                    p { class: "text-xs text-gray-500", "{icon.name} · {icon.style} · {framework_name}" }
                }
                ChromelessButton {
                    class: Some("p-1 rounded text-gray-500 hover:text-gray-900 dark:hover:text-white".to_string()),
                    aria_label: Some("Close".to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon {}
                }
            }
            for kind in SnippetKind::ALL {
                CodeBlockView {
                    key: "{kind.label()}",
                    kind,
                    code: snippet(&example, kind).to_string(),
                    copied: copied == Some(kind),
                    on_copy,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_selects_field() {
        let example = CodeExample {
            install: "i".to_string(),
            import: "m".to_string(),
            usage: "u".to_string(),
        };
        assert_eq!(snippet(&example, SnippetKind::Install), "i");
        assert_eq!(snippet(&example, SnippetKind::Import), "m");
        assert_eq!(snippet(&example, SnippetKind::Usage), "u");
    }
}
