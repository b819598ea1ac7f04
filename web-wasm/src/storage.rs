//! localStorage persistence: cart blob and view preference

use leptos::logging::warn;
use otb_helper_common::{CartStorage, Error, Result, ViewMode, CART_STORAGE_KEY, VIEW_PREFERENCE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Cart backend writing to `localStorage[otbHelperCart]`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl CartStorage for BrowserStorage {
    fn read(&self) -> Result<Option<String>> {
        let storage = local_storage().ok_or_else(|| Error::Storage("localStorage unavailable".into()))?;
        storage
            .get_item(CART_STORAGE_KEY)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        let storage = local_storage().ok_or_else(|| Error::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(CART_STORAGE_KEY, blob)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

pub fn load_view_preference() -> ViewMode {
    let stored = local_storage().and_then(|s| s.get_item(VIEW_PREFERENCE_KEY).ok().flatten());
    ViewMode::from_stored(stored.as_deref())
}

pub fn save_view_preference(mode: ViewMode) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(VIEW_PREFERENCE_KEY, mode.as_str()) {
        warn!("Failed to save view preference: {:?}", e);
    }
}
