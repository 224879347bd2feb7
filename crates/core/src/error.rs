use classhound_api::BoxError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan failures. Recoverable problems (unreadable archives,
/// unresolvable roots, class-load failures) never surface here; they are
/// appended to the scanner's diagnostic message list instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Traversal of a directory root failed at the root itself. Unlike an
    /// unreadable archive, this aborts the whole scan call.
    #[error("failed scanning directory {}: {source}", root.display())]
    Directory {
        root: PathBuf,
        source: std::io::Error,
    },

    /// A handler refused a resource. Handler errors pass through unswallowed.
    #[error("handler failed on {resource}: {source}")]
    Handler { resource: String, source: BoxError },
}

pub type Result<T> = std::result::Result<T, ScanError>;
