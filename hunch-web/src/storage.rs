//! Browser persistence for game statistics.
//!
//! Wraps `localStorage` behind the engine's [`StatsStore`] contract so the
//! stable and canary records survive page reloads under their own keys.

use hunch_game::{StatsRecord, StatsStore, Variant};
use thiserror::Error;

use crate::dom;

/// `localStorage` adapter for the engine's persistence trait.
pub struct BrowserStore;

/// Failure while talking to `localStorage`.
#[derive(Debug, Error)]
#[error("localStorage access failed: {0}")]
pub struct BrowserStoreError(String);

fn store_error(err: wasm_bindgen::JsValue) -> BrowserStoreError {
    BrowserStoreError(dom::js_error_message(&err))
}

impl StatsStore for BrowserStore {
    type Error = BrowserStoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().map_err(store_error)?;
        storage.get_item(key).map_err(store_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(store_error)?;
        storage.set_item(key, value).map_err(store_error)
    }
}

/// Load the persisted record for `variant`, or a zeroed record when the
/// browser has nothing usable.
#[must_use]
pub fn initial_stats(variant: Variant) -> StatsRecord {
    #[cfg(target_arch = "wasm32")]
    {
        hunch_game::load_stats(&BrowserStore, variant)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = variant;
        StatsRecord::default()
    }
}

/// Write `record` under the variant's storage key. Failures are logged by the
/// engine and never interrupt play.
pub fn persist_for(variant: Variant, record: &StatsRecord) {
    #[cfg(target_arch = "wasm32")]
    {
        hunch_game::persist_stats(&BrowserStore, variant, record);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (variant, record);
    }
}
