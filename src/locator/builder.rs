//! Builder for [`Locator`].

use camino::Utf8PathBuf;

use super::Locator;

/// Builder for [`Locator`].
///
/// Search paths and extensions are probed in the order they are configured,
/// so insertion order is significant. Extensions may be given with or
/// without a leading dot; both forms compose the same candidate filename.
///
/// # Examples
///
/// ```rust
/// use locate::Locator;
///
/// let locator = Locator::builder()
///     .search_path("~/app")
///     .search_path("/etc/app")
///     .extension(".yaml")
///     .extension("yml")
///     .build();
/// assert_eq!(locator.candidates("config").len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocatorBuilder {
    paths: Vec<Utf8PathBuf>,
    extensions: Vec<String>,
    home_dir: Option<Utf8PathBuf>,
}

impl LocatorBuilder {
    /// Creates a builder with no search paths or extensions configured.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths: Vec::new(),
            extensions: Vec::new(),
            home_dir: None,
        }
    }

    /// Appends a directory to the search path list.
    ///
    /// A path starting with a `~` component is expanded against the home
    /// directory at lookup time.
    #[must_use]
    pub fn search_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Replaces the search path list.
    #[must_use]
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Appends an allowed extension, consulted only for requested names that
    /// carry no extension of their own.
    #[must_use]
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extensions
            .push(normalise_extension(extension.as_ref()));
        self
    }

    /// Replaces the allowed extension list.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|extension| normalise_extension(extension.as_ref()))
            .collect();
        self
    }

    /// Overrides the home directory used to expand a leading `~` in search
    /// paths.
    ///
    /// Defaults to the current user's home directory; injecting a value here
    /// keeps lookups deterministic in tests.
    #[must_use]
    pub fn home_dir(mut self, home: impl Into<Utf8PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Finalises the builder and returns a [`Locator`].
    ///
    /// The default home directory is resolved here, once, so lookups never
    /// consult process state.
    #[must_use]
    pub fn build(self) -> Locator {
        let home_dir = self.home_dir.or_else(default_home_dir);
        Locator {
            paths: self.paths,
            extensions: self.extensions,
            home_dir,
        }
    }
}

/// Strips the leading dot from a configured extension so `"yaml"` and
/// `".yaml"` compose identically.
fn normalise_extension(extension: &str) -> String {
    extension
        .strip_prefix('.')
        .unwrap_or(extension)
        .to_owned()
}

fn default_home_dir() -> Option<Utf8PathBuf> {
    dirs::home_dir().and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
}
