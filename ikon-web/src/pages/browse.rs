use crate::clipboard::copy_to_clipboard;
use crate::icon_data::icon_entries;
use dioxus::prelude::*;
use ikon_common::{
    grid_columns, FrameworkId, GridSize, IconData, InstallMethod, PackageManager, Preferences,
    Registry, Theme,
};
use ikon_ui::hooks::use_window_state;
use ikon_ui::stores::{BrowserState, BrowserStateStoreExt};
use ikon_ui::{
    filter_icons, FrameworkPickerView, HeaderView, IconDetailView, IconGridView,
    PreferencesBarView, SnippetKind,
};
use tracing::debug;

#[component]
pub fn Browse() -> Element {
    let registry = Registry::embedded();
    let mut prefs: Signal<Preferences> = use_context();
    let state = use_store(BrowserState::default);
    let window = use_window_state();
    let all_icons = use_hook(icon_entries);

    let query = state.query().read().clone();
    let selected = state.selected().read().clone();
    let install_method = *state.install_method().read();
    let copied = *state.copied().read();

    let (framework_id, package_manager, grid_size, theme, icon_color) = {
        let p = prefs.read();
        (
            p.framework(),
            p.package_manager(),
            p.grid_size(),
            p.theme(),
            p.icon_color(),
        )
    };

    let framework = registry.lookup(framework_id);
    let framework_name = framework.map(|f| f.name.clone()).unwrap_or_default();
    let visible: Vec<_> = filter_icons(&all_icons, &query)
        .into_iter()
        .cloned()
        .collect();
    let match_count = visible.len();
    let columns = grid_columns(grid_size, window.read().width());

    let detail = selected.clone().map(|icon| {
        let example =
            registry.code_example(framework_id.as_str(), &icon, install_method, package_manager);
        (icon, example)
    });
    let grid_color = icon_color.clone();

    let root_class = match theme {
        Theme::Light => "min-h-screen bg-white text-gray-900",
        Theme::Dark => "dark min-h-screen bg-gray-950 text-gray-100",
    };

    rsx! {
        div { class: "{root_class}",
            HeaderView {
                query,
                on_query_change: move |value: String| state.query().set(value),
                match_count,
                theme,
                on_toggle_theme: move |_| {
                    let next = prefs.read().theme().toggled();
                    prefs.write().set_theme(next);
                },
            }
            main { class: "flex flex-col gap-6 px-6 py-6",
                FrameworkPickerView {
                    frameworks: registry.frameworks().to_vec(),
                    selected: framework_id,
                    on_select: move |id: FrameworkId| prefs.write().set_framework(id),
                }
                PreferencesBarView {
                    package_manager,
                    on_package_manager_change: move |pm: PackageManager| prefs.write().set_package_manager(pm),
                    install_method,
                    on_install_method_change: move |method: InstallMethod| state.install_method().set(method),
                    npm_available: registry.has_npm_package(framework_id),
                    cdn_available: registry.has_cdn_package(framework_id),
                    grid_size,
                    on_grid_size_change: move |size: GridSize| prefs.write().set_grid_size(size),
                    icon_color,
                    on_icon_color_change: move |color: String| prefs.write().set_icon_color(color),
                }
                div { class: "grid gap-6 lg:grid-cols-[minmax(0,1fr)_28rem] items-start",
                    IconGridView {
                        icons: visible,
                        columns,
                        icon_color: grid_color,
                        cdn_version: registry.cdn_version().to_string(),
                        selected,
                        on_select: move |icon: IconData| {
                            debug!("Selected {:?}", icon);
                            state.selected().set(Some(icon));
                            state.copied().set(None);
                        },
                    }
                    if let Some((icon, example)) = detail {
                        IconDetailView {
                            icon,
                            framework_name,
                            example,
                            copied,
                            on_copy: move |(kind, code): (SnippetKind, String)| {
                                copy_to_clipboard(&code);
                                state.copied().set(Some(kind));
                            },
                            on_close: move |_| {
                                state.selected().set(None);
                                state.copied().set(None);
                            },
                        }
                    }
                }
            }
        }
    }
}
