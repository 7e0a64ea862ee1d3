//! `localStorage` adapter for the card store.

use common::store::{CardStore, KeyValueStorage};
use common::StorageError;
use log::warn;

use crate::helpers::js_error_message;

pub type BrowserCardStore = CardStore<BrowserStorage>;

/// Wraps `window.localStorage`. When the browser refuses access (disabled
/// storage, sandboxed iframe) reads return nothing and writes fail with
/// [`StorageError::Unavailable`].
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            warn!("local storage unavailable; saved cards will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_error_message(&err)))
    }
}

pub fn card_store() -> BrowserCardStore {
    CardStore::new(BrowserStorage::local())
}
