//! Application State

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the trunk build output
    pub dist_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(dist_dir: PathBuf) -> Self {
        Self {
            dist_dir: Arc::new(dist_dir),
        }
    }

    /// Entry document served for every client-side route
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Whether a built bundle is present
    pub fn bundle_ready(&self) -> bool {
        self.index_file().is_file()
    }
}
