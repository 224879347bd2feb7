//! The scan engine: root resolution, traversal, normalization, filtering,
//! and handler dispatch.

use crate::error::{Result, ScanError};
use crate::filter::FilterConfig;
use crate::name;
use crate::source::LoaderSet;
use crate::walker::{self, RawEntry, RootKind};
use classhound_api::{ClassInspector, Loader, Resource, ResourceHandler, Root};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Classpath scanner with builder-style configuration.
///
/// Configure roots and filters, then call [`scan`](Self::scan). Every call
/// is a fresh traversal: visited paths, diagnostics, and timing are reset
/// first and accumulate over that one call only. An instance is not safe to
/// share across threads; give each thread its own or serialize access.
pub struct ClasspathScanner {
    loaders: LoaderSet,
    filter: FilterConfig,
    inspector: Option<Arc<dyn ClassInspector>>,
    visited: Vec<PathBuf>,
    messages: Vec<String>,
    scan_time: Duration,
}

impl ClasspathScanner {
    pub fn new() -> Self {
        Self {
            loaders: LoaderSet::new(),
            filter: FilterConfig::default(),
            inspector: None,
            visited: Vec::new(),
            messages: Vec::new(),
            scan_time: Duration::ZERO,
        }
    }

    /// Same as [`new`](Self::new).
    pub fn create() -> Self {
        Self::new()
    }

    // ==================== Configuration ====================

    /// Register every existing path of a delimiter-separated environment
    /// value as its own single-root loader. Best effort: blank, unreadable,
    /// or missing segments are silently dropped.
    pub fn add_env_path_list(&mut self, key: &str) -> &mut Self {
        self.loaders.add_env_paths(key);
        self
    }

    /// Register a loader together with every ancestor reachable through its
    /// parent chain. Loaders already present are not re-added.
    pub fn add_loader(&mut self, loader: &Arc<Loader>) -> &mut Self {
        self.loaders.add_chain(loader);
        self
    }

    /// Snapshot of the registered loaders, in registration order.
    pub fn loaders(&self) -> Vec<Arc<Loader>> {
        self.loaders.snapshot()
    }

    /// Supply the class-loading capability backing the annotation filters.
    pub fn with_inspector(&mut self, inspector: Arc<dyn ClassInspector>) -> &mut Self {
        self.inspector = Some(inspector);
        self
    }

    /// Require canonical names to start with `prefix`. Repeatable; every
    /// configured prefix must match.
    pub fn filter_begin_resource_name(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.filter.add_begin_name(prefix);
        self
    }

    /// Dispatch class entries only. Mutually exclusive with
    /// [`filter_resources_only`](Self::filter_resources_only); the last call
    /// wins.
    pub fn filter_classes_only(&mut self) -> &mut Self {
        self.filter.classes_only();
        self
    }

    /// Dispatch non-class resources only. Mutually exclusive with
    /// [`filter_classes_only`](Self::filter_classes_only); the last call
    /// wins.
    pub fn filter_resources_only(&mut self) -> &mut Self {
        self.filter.resources_only();
        self
    }

    /// Skip nested (inner) classes.
    pub fn filter_exclude_inner_classes(&mut self) -> &mut Self {
        self.filter.exclude_inner_classes();
        self
    }

    /// Only dispatch classes declaring the given type-level annotation.
    pub fn filter_type_annotation(&mut self, annotation: impl Into<String>) -> &mut Self {
        self.filter.require_type_annotation(annotation);
        self
    }

    /// Only dispatch classes declaring the given annotation on at least one
    /// member.
    pub fn filter_member_annotation(&mut self, annotation: impl Into<String>) -> &mut Self {
        self.filter.require_member_annotation(annotation);
        self
    }

    // ==================== Scanning ====================

    /// Traverse every registered root, filter the discovered entries, and
    /// dispatch survivors to `handler`.
    ///
    /// Passing `None` turns the call into an inventory run: visited paths
    /// and timing are recorded, but nothing is normalized, filtered, or
    /// dispatched.
    ///
    /// Unreadable archives and unsupported roots are reported through
    /// [`messages`](Self::messages) and do not fail the call; directory
    /// traversal failures and handler errors do.
    pub fn scan(&mut self, mut handler: Option<&mut dyn ResourceHandler>) -> Result<&mut Self> {
        let start = Instant::now();
        self.visited.clear();
        self.messages.clear();

        for loader in self.loaders.snapshot() {
            debug!("scanning loader {loader}");
            for root in loader.roots() {
                self.scan_root(&loader, root, handler.as_deref_mut())?;
            }
        }

        self.scan_time = start.elapsed();
        info!(
            "scan complete: {} resources, {} classes, {} messages in {:?}",
            self.resources_count(),
            self.classes_count(),
            self.messages.len(),
            self.scan_time
        );
        Ok(self)
    }

    fn scan_root(
        &mut self,
        loader: &Arc<Loader>,
        root: &Root,
        mut handler: Option<&mut dyn ResourceHandler>,
    ) -> Result<()> {
        let path = root.path();
        match walker::root_kind(path) {
            RootKind::Directory => {
                debug!("walking directory root {}", path.display());
                for entry in walker::directory_entries(path)? {
                    self.visit(loader, entry?, handler.as_deref_mut())?;
                }
            }
            RootKind::Archive => {
                debug!("walking archive root {}", path.display());
                match walker::archive_entries(path) {
                    Ok(entries) => {
                        for entry in entries {
                            self.visit(loader, entry, handler.as_deref_mut())?;
                        }
                    }
                    Err(err) => {
                        warn!("failed scanning archive {}: {err}", path.display());
                        self.messages
                            .push(format!("failed scanning archive {}: {err}", path.display()));
                    }
                }
            }
            RootKind::Unsupported => {
                self.messages.push(format!("not found: {}", path.display()));
            }
        }
        Ok(())
    }

    /// Record one visited entry and, when a handler is present, run it
    /// through normalization, filtering, and dispatch.
    fn visit(
        &mut self,
        loader: &Arc<Loader>,
        entry: RawEntry,
        handler: Option<&mut dyn ResourceHandler>,
    ) -> Result<()> {
        // Visited bookkeeping includes entries the filters later drop.
        self.visited.push(entry.path.clone());

        let Some(handler) = handler else {
            return Ok(());
        };

        let (name, is_class) = name::canonical_name(&entry.name);
        let resource = Resource::new(name, entry.path, is_class, Arc::clone(loader));

        if !self
            .filter
            .accepts(&resource, self.inspector.as_deref(), &mut self.messages)
        {
            return Ok(());
        }

        handler
            .handle(&resource)
            .map_err(|source| ScanError::Handler {
                resource: resource.to_string(),
                source,
            })?;
        Ok(())
    }

    // ==================== Results ====================

    /// Number of entries visited by the last scan. Counts every visited
    /// entry, including those the filters rejected.
    pub fn resources_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of visited entries whose raw path carries the class suffix,
    /// regardless of filtering.
    pub fn classes_count(&self) -> usize {
        self.visited
            .iter()
            .filter(|path| name::is_class_entry(&path.to_string_lossy()))
            .count()
    }

    /// Diagnostics collected by the last scan: unreadable archives,
    /// unsupported roots, class-load failures.
    pub fn messages(&self) -> Vec<String> {
        self.messages.clone()
    }

    /// Wall-clock duration of the last scan.
    pub fn scan_time(&self) -> Duration {
        self.scan_time
    }

    /// Snapshot of the last scan's counters.
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            resources: self.resources_count(),
            classes: self.classes_count(),
            messages: self.messages.len(),
            duration: self.scan_time,
        }
    }
}

impl Default for ClasspathScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClasspathScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClasspathScanner [resources={}, scan_time={}ms, messages={}, loaders={}]",
            self.visited.len(),
            self.scan_time.as_millis(),
            self.messages.len(),
            self.loaders.len()
        )
    }
}

/// Counters from one scan call.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanStats {
    /// Visited entries, filtered or not.
    pub resources: usize,
    /// Visited entries with the class suffix, filtered or not.
    pub classes: usize,
    /// Diagnostics recorded during the scan.
    pub messages: usize,
    /// Wall-clock duration of the scan.
    pub duration: Duration,
}
