pub mod capability;
pub mod model;

// Re-export commonly used types
pub use capability::{
    BoxError, ClassInspector, ClassMetadata, InspectError, MemberMetadata, ResourceHandler,
};
pub use model::{Loader, Resource, Root};
