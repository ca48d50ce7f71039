use ikon_common::preferences::{FRAMEWORK_KEY, PACKAGE_MANAGER_KEY};
use ikon_common::{
    FrameworkId, GridSize, MemoryStore, PackageManager, PreferenceStore, Preferences, Theme,
};
use std::rc::Rc;

#[test]
fn values_survive_a_reload() {
    let store: Rc<dyn PreferenceStore> = Rc::new(MemoryStore::new());

    let mut prefs = Preferences::load(store.clone());
    prefs.set_framework(FrameworkId::Vue);
    prefs.set_package_manager(PackageManager::Bun);
    prefs.set_grid_size(GridSize::Small);
    prefs.set_theme(Theme::Dark);
    prefs.set_icon_color("#10b981");
    drop(prefs);

    let reloaded = Preferences::load(store);
    assert_eq!(reloaded.framework(), FrameworkId::Vue);
    assert_eq!(reloaded.package_manager(), PackageManager::Bun);
    assert_eq!(reloaded.grid_size(), GridSize::Small);
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert_eq!(reloaded.icon_color(), "#10b981");
}

#[test]
fn unknown_stored_ids_fall_back_to_defaults() {
    let store = Rc::new(MemoryStore::with_items([
        (FRAMEWORK_KEY, "\"ember\""),
        (PACKAGE_MANAGER_KEY, ""),
    ]));
    let prefs = Preferences::load(store);
    assert_eq!(prefs.framework(), FrameworkId::SvelteRunes);
    assert_eq!(prefs.package_manager(), PackageManager::Pnpm);
}
