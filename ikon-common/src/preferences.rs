//! Persisted user preferences
//!
//! Each preference is a [`Persisted`] value: loaded from a [`PreferenceStore`]
//! when constructed, written back on every `set`. Storage is best-effort.
//! Failures are logged and the in-memory value stays authoritative.

use crate::framework::FrameworkId;
use crate::grid::GridSize;
use crate::package_manager::PackageManager;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info, warn};

pub const FRAMEWORK_KEY: &str = "tabler-icons-framework";
pub const PACKAGE_MANAGER_KEY: &str = "tabler-icons-package-manager";
pub const GRID_SIZE_KEY: &str = "tabler-icons-grid-size";
pub const THEME_KEY: &str = "tabler-icons-theme";
pub const ICON_COLOR_KEY: &str = "tabler-icons-color";

pub const DEFAULT_FRAMEWORK: FrameworkId = FrameworkId::SvelteRunes;
pub const DEFAULT_ICON_COLOR: &str = "#3b82f6";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value persistence (browser localStorage or an in-memory map)
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.items.borrow_mut().extend(
            items
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single preference mirrored in memory and persisted as JSON under a fixed key.
pub struct Persisted<T> {
    key: &'static str,
    value: T,
    store: Rc<dyn PreferenceStore>,
}

impl<T> std::fmt::Debug for Persisted<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Load the stored value, or `default` when it is absent or unreadable.
    pub fn load(store: Rc<dyn PreferenceStore>, key: &'static str, default: T) -> Self {
        let value = match read_value::<T>(store.as_ref(), key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("Ignoring stored preference {}: {}", key, e);
                default
            }
        };

        Self { key, value, store }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Replace the value and write it through to storage.
    pub fn set(&mut self, value: T) {
        self.value = value;
        if let Err(e) = write_value(self.store.as_ref(), self.key, &self.value) {
            warn!("Failed to persist preference {}: {}", self.key, e);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored value is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

fn read_value<T: DeserializeOwned>(
    store: &dyn PreferenceStore,
    key: &str,
) -> Result<Option<T>, ReadError> {
    match store.get_item(key)? {
        Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

fn write_value<T: Serialize>(
    store: &dyn PreferenceStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, &json)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// All user preferences, each under its own storage key
#[derive(Debug)]
pub struct Preferences {
    framework: Persisted<FrameworkId>,
    package_manager: Persisted<PackageManager>,
    grid_size: Persisted<GridSize>,
    theme: Persisted<Theme>,
    icon_color: Persisted<String>,
}

impl Preferences {
    pub fn load(store: Rc<dyn PreferenceStore>) -> Self {
        let prefs = Self {
            framework: Persisted::load(store.clone(), FRAMEWORK_KEY, DEFAULT_FRAMEWORK),
            package_manager: Persisted::load(
                store.clone(),
                PACKAGE_MANAGER_KEY,
                PackageManager::default(),
            ),
            grid_size: Persisted::load(store.clone(), GRID_SIZE_KEY, GridSize::default()),
            theme: Persisted::load(store.clone(), THEME_KEY, Theme::default()),
            icon_color: Persisted::load(store, ICON_COLOR_KEY, DEFAULT_ICON_COLOR.to_string()),
        };
        debug!(
            "Loaded preferences: framework={} package_manager={} grid={} theme={}",
            prefs.framework(),
            prefs.package_manager().as_str(),
            prefs.grid_size().as_str(),
            prefs.theme().as_str()
        );
        prefs
    }

    pub fn framework(&self) -> FrameworkId {
        self.framework.get()
    }

    pub fn set_framework(&mut self, framework: FrameworkId) {
        info!("Framework set to {}", framework);
        self.framework.set(framework);
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager.get()
    }

    pub fn set_package_manager(&mut self, package_manager: PackageManager) {
        info!("Package manager set to {}", package_manager.as_str());
        self.package_manager.set(package_manager);
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size.get()
    }

    pub fn set_grid_size(&mut self, grid_size: GridSize) {
        self.grid_size.set(grid_size);
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn icon_color(&self) -> String {
        self.icon_color.get()
    }

    pub fn set_icon_color(&mut self, color: impl Into<String>) {
        self.icon_color.set(color.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose reads and writes always fail
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "disabled".to_string(),
            })
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn defaults_when_store_is_empty() {
        let prefs = Preferences::load(Rc::new(MemoryStore::new()));
        assert_eq!(prefs.framework(), FrameworkId::SvelteRunes);
        assert_eq!(prefs.package_manager(), PackageManager::Pnpm);
        assert_eq!(prefs.grid_size(), GridSize::Medium);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.icon_color(), "#3b82f6");
    }

    #[test]
    fn set_writes_json_under_fixed_key() {
        let store = Rc::new(MemoryStore::new());
        let mut prefs = Preferences::load(store.clone());

        prefs.set_framework(FrameworkId::ReactNative);
        prefs.set_theme(Theme::Dark);
        prefs.set_icon_color("#ff0000");

        assert_eq!(
            store.raw(FRAMEWORK_KEY).as_deref(),
            Some("\"react-native\"")
        );
        assert_eq!(store.raw(THEME_KEY).as_deref(), Some("\"dark\""));
        assert_eq!(store.raw(ICON_COLOR_KEY).as_deref(), Some("\"#ff0000\""));
        assert_eq!(store.raw(GRID_SIZE_KEY), None);
    }

    #[test]
    fn corrupted_value_falls_back_to_default() {
        let store = Rc::new(MemoryStore::with_items([
            (FRAMEWORK_KEY, "{not json"),
            (PACKAGE_MANAGER_KEY, "\"cargo\""),
            (GRID_SIZE_KEY, "\"large\""),
        ]));
        let prefs = Preferences::load(store);
        assert_eq!(prefs.framework(), DEFAULT_FRAMEWORK);
        assert_eq!(prefs.package_manager(), PackageManager::Pnpm);
        assert_eq!(prefs.grid_size(), GridSize::Large);
    }

    #[test]
    fn broken_store_never_panics_and_keeps_memory_value() {
        let mut prefs = Preferences::load(Rc::new(BrokenStore));
        assert_eq!(prefs.theme(), Theme::Light);

        prefs.set_theme(Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn persisted_exposes_key() {
        let value = Persisted::load(Rc::new(MemoryStore::new()), THEME_KEY, Theme::Light);
        assert_eq!(value.key(), THEME_KEY);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
