//! `window.localStorage` as a preference store

use ikon_common::{PreferenceStore, StorageError};

/// Browser localStorage. Every call re-resolves the storage object, so a
/// store that becomes unavailable mid-session reports errors instead of
/// panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys_x::Storage, StorageError> {
        web_sys_x::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}
