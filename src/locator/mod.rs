//! File lookup across ordered search paths and filename extensions.

use std::fs;
use std::io;

use camino::Utf8PathBuf;

use crate::error::{LocateError, LocateResult};

mod builder;
mod candidates;

pub use builder::LocatorBuilder;

/// Resolves logical file names against ordered search paths and extensions.
///
/// A `Locator` is configured once through [`Locator::builder`] and immutable
/// afterwards, so it can be shared freely between call sites; each lookup
/// builds its own candidate list and performs a bounded number of blocking
/// existence checks.
///
/// # Examples
///
/// ```rust,no_run
/// use locate::Locator;
///
/// # fn run() -> locate::LocateResult<()> {
/// let locator = Locator::builder()
///     .search_path("/etc/app")
///     .search_path("./conf")
///     .extensions(["yaml", "yml"])
///     .build();
///
/// let path = locator.find("config")?;
/// # let _ = path;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Locator {
    paths: Vec<Utf8PathBuf>,
    extensions: Vec<String>,
    home_dir: Option<Utf8PathBuf>,
}

impl Locator {
    /// Creates a new builder with no search paths or extensions configured.
    #[must_use]
    pub const fn builder() -> LocatorBuilder {
        LocatorBuilder::new()
    }

    /// Searches the configured paths for `name` and returns the first
    /// candidate path that exists.
    ///
    /// Candidates are probed in path-major, extension-minor order: every
    /// filename variant is tried under the first search path before the
    /// second path is considered. The first existing candidate wins, so the
    /// result is deterministic even when several candidates exist. A name
    /// whose final segment already carries an extension is probed verbatim
    /// and the configured extensions are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::NotFound`] when no candidate exists, listing
    /// every probed path in order, and [`LocateError::Io`] as soon as an
    /// existence check fails for any reason other than absence; such
    /// failures abort the search rather than being counted as misses.
    pub fn find(&self, name: &str) -> LocateResult<Utf8PathBuf> {
        let mut misses = Vec::new();
        for candidate in self.candidates(name) {
            match fs::metadata(&candidate) {
                Ok(_) => {
                    tracing::debug!(name, path = %candidate, "resolved file");
                    return Ok(candidate);
                }
                Err(source) if source.kind() == io::ErrorKind::NotFound => {
                    tracing::trace!(path = %candidate, "candidate does not exist");
                    misses.push(candidate);
                }
                Err(source) => {
                    return Err(LocateError::Io {
                        path: candidate,
                        source,
                    });
                }
            }
        }
        Err(LocateError::NotFound {
            name: name.to_owned(),
            misses,
        })
    }

    /// Locates `name` and reads the resolved file's contents.
    ///
    /// # Errors
    ///
    /// Propagates the [`find`](Locator::find) error unchanged when
    /// resolution fails; a read failure after successful resolution (file
    /// removed in between, permissions changed, the candidate is a
    /// directory) surfaces as [`LocateError::Io`] for the resolved path.
    pub fn read_file(&self, name: &str) -> LocateResult<Vec<u8>> {
        let path = self.find(name)?;
        fs::read(&path).map_err(|source| LocateError::Io { path, source })
    }

    /// Locates `name` and reads the resolved file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`read_file`](Locator::read_file); content that is not valid
    /// UTF-8 surfaces as the underlying [`LocateError::Io`].
    pub fn read_to_string(&self, name: &str) -> LocateResult<String> {
        let path = self.find(name)?;
        fs::read_to_string(&path).map_err(|source| LocateError::Io { path, source })
    }
}

#[cfg(test)]
mod tests;
