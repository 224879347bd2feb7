//! Value models shared between the scanning engine and its callers.
//!
//! A [`Loader`] owns a set of [`Root`] locations and may delegate to a parent
//! loader, mirroring classloader hierarchies. A [`Resource`] is the read-only
//! view handed to scan handlers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ==================== Roots ====================

/// A traversal starting point: a directory or an archive file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Root {
    path: PathBuf,
}

impl Root {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

// ==================== Loaders ====================

/// A named owner of zero or more roots, optionally chained to a parent.
///
/// Loaders are compared by identity, never by value: the engine holds them as
/// `Arc<Loader>` and de-duplicates with [`Arc::ptr_eq`]. Two loaders with
/// identical names and roots are still distinct entries.
#[derive(Debug)]
pub struct Loader {
    name: String,
    roots: Vec<Root>,
    parent: Option<Arc<Loader>>,
}

impl Loader {
    pub fn new(name: impl Into<String>, roots: Vec<Root>) -> Self {
        Self {
            name: name.into(),
            roots,
            parent: None,
        }
    }

    pub fn with_parent(name: impl Into<String>, roots: Vec<Root>, parent: Arc<Loader>) -> Self {
        Self {
            name: name.into(),
            roots,
            parent: Some(parent),
        }
    }

    /// Single-root convenience, used for path-list entries.
    pub fn single(name: impl Into<String>, root: Root) -> Self {
        Self::new(name, vec![root])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    pub fn parent(&self) -> Option<&Arc<Loader>> {
        self.parent.as_ref()
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [roots={}]", self.name, self.roots.len())
    }
}

// ==================== Resources ====================

/// Read-only view of a discovered entry that survived filtering.
#[derive(Debug, Clone)]
pub struct Resource {
    name: String,
    path: PathBuf,
    is_class: bool,
    loader: Arc<Loader>,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        is_class: bool,
        loader: Arc<Loader>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_class,
            loader,
        }
    }

    /// Canonical resource name: dotted form for classes, the root-relative
    /// path otherwise.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw entry path. Entries found inside an archive use the
    /// `<archive>!/<entry>` form.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this entry is a candidate for loading through its loader.
    pub fn is_class(&self) -> bool {
        self.is_class
    }

    /// The loader whose root produced this resource.
    pub fn loader(&self) -> &Arc<Loader> {
        &self.loader
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.path.display())
    }
}
