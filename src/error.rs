//! Error type for the directory scan

use std::path::PathBuf;
use thiserror::Error;

/// Failure while enumerating sibling frame files.
///
/// "Not a sequence" and "no siblings on disk" are not errors; both
/// surface as an absent result instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A derived glob or regex failed to compile
    #[error("invalid sequence pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    /// The directory listing itself failed, e.g. access denied or a
    /// missing path component
    #[error("failed to scan {path:?}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
