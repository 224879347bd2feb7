//! Capability traits the scanning engine consumes but does not implement.
//!
//! - [`ResourceHandler`]: the per-resource callback driving a scan.
//! - [`ClassInspector`]: loads a named class and exposes its declared
//!   metadata, backing the annotation filters. Supplied by whatever
//!   introspection facility the embedder has; the engine only needs the
//!   yes/no answers.

use crate::model::Resource;
use thiserror::Error;

/// Error type carried across capability boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Per-resource callback invoked for every candidate that survives the
/// filter pipeline.
///
/// Handler errors are not swallowed: they abort the running scan and surface
/// to its caller unmodified.
pub trait ResourceHandler {
    fn handle(&mut self, resource: &Resource) -> Result<(), BoxError>;
}

impl<F> ResourceHandler for F
where
    F: FnMut(&Resource) -> Result<(), BoxError>,
{
    fn handle(&mut self, resource: &Resource) -> Result<(), BoxError> {
        self(resource)
    }
}

/// Loads a class by its canonical dotted name and exposes declared metadata.
pub trait ClassInspector: Send + Sync {
    fn load_and_inspect(&self, class_name: &str) -> Result<Box<dyn ClassMetadata>, InspectError>;
}

/// Declared metadata of one loaded class.
pub trait ClassMetadata {
    /// Whether the type itself declares the given annotation.
    fn has_type_annotation(&self, annotation: &str) -> bool;

    /// Declared members, in declaration order.
    fn members(&self) -> Vec<Box<dyn MemberMetadata>>;
}

/// Declared metadata of a single class member.
pub trait MemberMetadata {
    fn has_annotation(&self, annotation: &str) -> bool;
}

/// Failure to locate or load a class named by a metadata filter.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("class not found: {0}")]
    NotFound(String),
    #[error("failed to load class {name}: {reason}")]
    Load { name: String, reason: String },
}
