//! Browser local storage as the backing store for settings.

use log::warn;
use speakadora::{KeyValueStore, StoreError};
use web_sys::Storage;

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Values are stored as plain strings rather than JSON so they stay readable by the static pages
/// served alongside the app. Local storage may be missing or blocked (for example in some
/// embedded webviews); reads then find nothing and writes fail without panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

/// Looks up `window.localStorage`.
fn local_storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            warn!("Local storage is not accessible: {e:?}");
            None
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let Some(storage) = local_storage() else {
            warn!("No local storage to read {key} from");
            return None;
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {key} from local storage: {e:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or_else(|| StoreError::Write {
            key: key.to_owned(),
            message: "local storage is unavailable".to_owned(),
        })?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            message: format!("{e:?}"),
        })
    }
}
