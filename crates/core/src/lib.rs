pub mod error;
pub mod filter;
pub mod logging;
pub mod name;
pub mod scanner;
pub mod source;
pub mod walker;

pub use error::{Result, ScanError};
pub use scanner::{ClasspathScanner, ScanStats};

// Re-export the interface crate so embedders can depend on one crate.
pub use classhound_api as api;
