//! localStorage バックエンド

use fireworks_inventory_common::{Error, KeyValueStore, Result};
use web_sys::Storage;

/// `window.localStorage` をキー・値ストアとして使う
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::Storage("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| Error::Storage(format!("{:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    // 容量超過などは例外として返る
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
