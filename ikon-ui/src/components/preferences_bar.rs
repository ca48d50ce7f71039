//! Package manager, install method, grid density and colour controls

use crate::components::segmented_control::{Segment, SegmentedControl};
use dioxus::prelude::*;
use ikon_common::{GridSize, InstallMethod, PackageManager};

#[component]
pub fn PreferencesBarView(
    package_manager: PackageManager,
    on_package_manager_change: EventHandler<PackageManager>,
    install_method: InstallMethod,
    on_install_method_change: EventHandler<InstallMethod>,
    /// Framework has an npm package
    npm_available: bool,
    /// Framework is published to the CDN
    cdn_available: bool,
    grid_size: GridSize,
    on_grid_size_change: EventHandler<GridSize>,
    icon_color: String,
    on_icon_color_change: EventHandler<String>,
) -> Element {
    let package_managers: Vec<Segment> = PackageManager::ALL
        .iter()
        .map(|pm| Segment::new(pm.display_name(), pm.as_str()))
        .collect();

    let methods = vec![
        Segment::new("Package", InstallMethod::Package.as_str()).disabled_if(!npm_available),
        Segment::new("CDN", InstallMethod::Cdn.as_str()).disabled_if(!cdn_available),
    ];

    let grid_sizes: Vec<Segment> = GridSize::ALL
        .iter()
        .map(|size| Segment::new(size.display_name(), size.as_str()))
        .collect();

    rsx! {
        div { class: "flex flex-wrap items-center gap-x-6 gap-y-3",
            SegmentedControl {
                label: "Install",
                segments: methods,
                selected: install_method.as_str(),
                on_select: move |value: &'static str| {
                    if let Some(method) = InstallMethod::parse(value) {
                        on_install_method_change.call(method);
                    }
                },
            }
            if install_method == InstallMethod::Package {
                SegmentedControl {
                    label: "Package manager",
                    segments: package_managers,
                    selected: package_manager.as_str(),
                    on_select: move |value: &'static str| {
                        if let Some(pm) = PackageManager::parse(value) {
                            on_package_manager_change.call(pm);
                        }
                    },
                }
            }
            SegmentedControl {
                label: "Grid",
                segments: grid_sizes,
                selected: grid_size.as_str(),
                on_select: move |value: &'static str| {
                    if let Some(size) = GridSize::parse(value) {
                        on_grid_size_change.call(size);
                    }
                },
            }
            label { class: "flex items-center gap-2 text-xs font-medium uppercase tracking-wide text-gray-500",
                "Color"
                input {
                    r#type: "color",
                    class: "w-8 h-8 rounded cursor-pointer bg-transparent",
                    value: "{icon_color}",
                    oninput: move |e| on_icon_color_change.call(e.value()),
                }
            }
        }
    }
}
