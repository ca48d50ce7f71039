pub mod clipboard;
pub mod icon_data;
pub mod pages;

use dioxus::prelude::*;
use ikon_common::Preferences;
use ikon_ui::storage::LocalStorage;
use pages::Browse;
use std::rc::Rc;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Browse {},
}

#[component]
pub fn App() -> Element {
    // Preferences are read from localStorage once, then written on every change
    use_context_provider(|| Signal::new(Preferences::load(Rc::new(LocalStorage))));

    rsx! {
        document::Title { "Tabler Icons" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
