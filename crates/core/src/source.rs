//! Root discovery: environment path lists and caller-registered loader
//! hierarchies.

use classhound_api::{Loader, Root};
use std::sync::Arc;
use tracing::debug;

/// Ordered set of loaders, unique by identity.
///
/// Insertion order is preserved and later determines handler invocation
/// order.
#[derive(Debug, Default)]
pub struct LoaderSet {
    loaders: Vec<Arc<Loader>>,
}

impl LoaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-effort registration of a delimiter-separated path list read from
    /// the environment. Blank and nonexistent segments are dropped without
    /// comment; each surviving segment becomes its own single-root loader.
    pub fn add_env_paths(&mut self, key: &str) {
        let Ok(value) = std::env::var(key) else {
            return;
        };

        for path in std::env::split_paths(&value) {
            if path.as_os_str().is_empty() || !path.exists() {
                continue;
            }
            let name = format!("{key}:{}", path.display());
            debug!("registering path-list loader {name}");
            self.loaders
                .push(Arc::new(Loader::single(name, Root::new(path))));
        }
    }

    /// Register a loader and every ancestor reachable through `parent` links.
    ///
    /// Already-registered loaders are not re-added, but the walk still
    /// continues upward so ancestors missing from the set get appended. The
    /// walk keeps its own visited set: parent links are caller-supplied and
    /// must not be trusted to terminate.
    pub fn add_chain(&mut self, loader: &Arc<Loader>) {
        let mut walked: Vec<*const Loader> = Vec::new();
        let mut current = Some(Arc::clone(loader));

        while let Some(next) = current {
            let id = Arc::as_ptr(&next);
            if walked.contains(&id) {
                break;
            }
            walked.push(id);

            if !self.contains(&next) {
                self.loaders.push(Arc::clone(&next));
            }
            current = next.parent().cloned();
        }
    }

    pub fn contains(&self, loader: &Arc<Loader>) -> bool {
        self.loaders.iter().any(|known| Arc::ptr_eq(known, loader))
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Snapshot of the registered loaders, in insertion order.
    pub fn snapshot(&self) -> Vec<Arc<Loader>> {
        self.loaders.clone()
    }
}
