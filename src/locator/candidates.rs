//! Candidate-path composition for [`Locator`].

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};

use super::Locator;

/// Returns `true` when the final path segment of `name` contains a dot,
/// meaning the requested name already carries an extension. Dotfiles such as
/// `.env` count, so they are probed verbatim.
fn has_extension(name: &str) -> bool {
    Utf8Path::new(name)
        .file_name()
        .is_some_and(|file| file.contains('.'))
}

impl Locator {
    /// Returns every candidate path for `name`, in the exact order
    /// [`find`](Locator::find) probes them: search paths vary slowest,
    /// filename variants fastest.
    ///
    /// No filesystem access happens here; the list reflects composition
    /// only, which makes it useful for diagnostics and dry runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locate::Locator;
    ///
    /// let locator = Locator::builder()
    ///     .search_path("/etc/app")
    ///     .extensions(["yaml", "yml"])
    ///     .build();
    /// assert_eq!(
    ///     locator.candidates("config"),
    ///     ["/etc/app/config.yaml", "/etc/app/config.yml"],
    /// );
    /// ```
    #[must_use]
    pub fn candidates(&self, name: &str) -> Vec<Utf8PathBuf> {
        let variants = self.filename_variants(name);
        let paths = self.search_paths();
        let mut candidates = Vec::with_capacity(paths.len() * variants.len());
        for path in paths.iter() {
            let base = self.expand_home(path);
            for variant in &variants {
                candidates.push(base.join(variant));
            }
        }
        candidates
    }

    /// Search paths for one lookup, defaulting to the current directory when
    /// none are configured. The default is call-local; the stored
    /// configuration is never mutated.
    fn search_paths(&self) -> Cow<'_, [Utf8PathBuf]> {
        if self.paths.is_empty() {
            Cow::Owned(vec![Utf8PathBuf::from("./")])
        } else {
            Cow::Borrowed(self.paths.as_slice())
        }
    }

    /// Filenames to probe under each search path. A name that already has an
    /// extension is used verbatim; otherwise one variant per configured
    /// extension, in configured order. No extensions configured means no
    /// variants, and the lookup fails without probing anything.
    fn filename_variants(&self, name: &str) -> Vec<String> {
        if has_extension(name) {
            return vec![name.to_owned()];
        }
        self.extensions
            .iter()
            .map(|extension| format!("{name}.{extension}"))
            .collect()
    }

    /// Expands a leading `~` component to the user's home directory.
    ///
    /// Expansion is best effort: when no home directory is known, or the
    /// path uses the `~user` form, the path is returned unchanged rather
    /// than failing the lookup.
    fn expand_home(&self, path: &Utf8Path) -> Utf8PathBuf {
        match (self.home_dir.as_deref(), path.strip_prefix("~")) {
            (Some(home), Ok(rest)) => home.join(rest),
            _ => path.to_path_buf(),
        }
    }
}
