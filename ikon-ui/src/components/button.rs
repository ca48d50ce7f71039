//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without visual
/// styling. Used by Button and for icon-only buttons.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent background - selected or primary action
    Primary,
    /// No background - text only with hover
    Ghost,
}

const BASE_CLASS: &str = "inline-flex items-center gap-1.5 px-2.5 py-1 text-xs rounded-md transition-colors";

fn variant_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => {
            "bg-blue-600 hover:bg-blue-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => {
            "text-gray-600 hover:text-gray-900 hover:bg-gray-200/60 dark:text-gray-400 dark:hover:text-white dark:hover:bg-gray-700/50"
        }
    }
}

/// Full class list for a [`Button`], with caller classes appended last.
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    let variant_class = variant_class(variant);
    match extra {
        Some(extra) => format!("{BASE_CLASS} {variant_class} {extra}"),
        None => format!("{BASE_CLASS} {variant_class}"),
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = button_class(variant, class.as_deref());

    rsx! {
        ChromelessButton {
            disabled,
            aria_pressed,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
