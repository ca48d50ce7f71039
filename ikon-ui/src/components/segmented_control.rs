//! Segmented control component - a group of toggle buttons where one is selected

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;

/// A single segment in a segmented control
#[derive(Clone, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub value: &'static str,
    pub disabled: bool,
}

impl Segment {
    pub fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            disabled: false,
        }
    }

    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A row of toggle buttons where exactly one is selected
#[component]
pub fn SegmentedControl(
    /// Shown before the buttons, also used as the group's aria-label
    label: &'static str,
    segments: Vec<Segment>,
    selected: &'static str,
    on_select: EventHandler<&'static str>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            span { class: "text-xs font-medium uppercase tracking-wide text-gray-500", "{label}" }
            div {
                class: "flex gap-1 rounded-lg p-1 bg-gray-100 dark:bg-gray-800/50",
                role: "group",
                aria_label: label,
                for segment in &segments {
                    Button {
                        variant: if segment.value == selected { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                        disabled: segment.disabled,
                        aria_pressed: Some(segment.value == selected),
                        onclick: {
                            let value = segment.value;
                            move |_| on_select.call(value)
                        },
                        "{segment.label}"
                    }
                }
            }
        }
    }
}
