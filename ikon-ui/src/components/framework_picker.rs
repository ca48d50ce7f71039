//! Framework picker - every output target, grouped by category

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use ikon_common::{Framework, FrameworkCategory, FrameworkId};

fn category_heading(category: FrameworkCategory) -> &'static str {
    match category {
        FrameworkCategory::ComponentLibrary => "Component libraries",
        FrameworkCategory::Static => "Static assets",
    }
}

#[component]
pub fn FrameworkPickerView(
    frameworks: Vec<Framework>,
    selected: FrameworkId,
    on_select: EventHandler<FrameworkId>,
) -> Element {
    let groups: Vec<(FrameworkCategory, Vec<Framework>)> =
        [FrameworkCategory::ComponentLibrary, FrameworkCategory::Static]
            .into_iter()
            .map(|category| {
                let members = frameworks
                    .iter()
                    .filter(|f| f.category == category)
                    .cloned()
                    .collect();
                (category, members)
            })
            .collect();

    rsx! {
        nav { class: "flex flex-col gap-3", aria_label: "Framework",
            for (category , members) in groups {
                div { key: "{category_heading(category)}",
                    h3 { class: "text-xs font-semibold uppercase tracking-wide text-gray-500 mb-1.5",
                        "{category_heading(category)}"
                    }
                    div { class: "flex flex-wrap gap-1",
                        for framework in members {
                            Button {
                                key: "{framework.id}",
                                variant: if framework.id == selected { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                                aria_pressed: Some(framework.id == selected),
                                onclick: {
                                    let id = framework.id;
                                    move |_| on_select.call(id)
                                },
                                "{framework.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
