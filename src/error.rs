//! Error types produced by the file locator.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type LocateResult<T> = Result<T, LocateError>;

/// Errors that can occur while locating or reading a file.
///
/// The two variants are deliberately distinct kinds: [`NotFound`] means every
/// candidate path was probed and none existed, which callers may treat as
/// recoverable (fall back to a default, say), while [`Io`] reports a
/// filesystem failure that aborted the search and must not be mistaken for a
/// mere miss.
///
/// [`NotFound`]: LocateError::NotFound
/// [`Io`]: LocateError::Io
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocateError {
    /// Every composed candidate path was checked and none existed.
    #[error("unable to locate {name}; lookup locations were {}", join_misses(.misses))]
    NotFound {
        /// Originally requested file name.
        name: String,
        /// Every candidate path that was probed, in search order.
        misses: Vec<Utf8PathBuf>,
    },

    /// An existence check or read failed for a reason other than absence.
    #[error("filesystem error at '{path}': {source}")]
    Io {
        /// Candidate path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },
}

impl LocateError {
    /// Returns `true` when the error means "not found anywhere" rather than
    /// an underlying filesystem failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn join_misses(misses: &[Utf8PathBuf]) -> String {
    misses
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
