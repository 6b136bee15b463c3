//! Shared handler state.

use showcase_core::RecordStore;
use std::sync::Arc;

/// State cloned into every handler. The store lives for the whole process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
