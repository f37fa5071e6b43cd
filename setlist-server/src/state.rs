//! Application state shared across handlers

use std::sync::Arc;

use setlist_core::Library;
use tokio::sync::RwLock;

/// Shared application state.
///
/// One lock guards both collections, so every request sees and leaves the
/// library in a consistent state.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    library: RwLock<Library>,
}

impl AppState {
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                library: RwLock::new(library),
            }),
        }
    }

    pub fn library(&self) -> &RwLock<Library> {
        &self.inner.library
    }
}
