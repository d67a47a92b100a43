//! Shared application state for the activities API.
//!
//! [`AppState`] is constructed once at startup and injected into every
//! handler through Axum's `State` extractor. Tests build a fresh state
//! per case, which is how the store is reset between them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mergington_core::ActivityStore;
use mergington_types::ActivityCatalog;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The activity catalog and rosters.
    pub store: Arc<ActivityStore>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a state around an existing store, serving `static/`.
    pub fn new(store: Arc<ActivityStore>) -> Self {
        Self {
            store,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Create a state whose store holds `catalog`.
    pub fn from_catalog(catalog: ActivityCatalog) -> Self {
        Self::new(Arc::new(ActivityStore::new(catalog)))
    }

    /// Serve static assets from `dir` instead of `static/`.
    #[must_use]
    pub fn with_static_dir(mut self, dir: &Path) -> Self {
        self.static_dir = dir.to_path_buf();
        self
    }
}
