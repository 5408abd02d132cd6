//! File lookup across ordered search paths and filename extensions.
//!
//! Larger tools such as template or configuration loaders rarely want to
//! hardcode where their files live. [`Locator`] answers the question "does a
//! file with this logical name exist, and if so, where" by probing every
//! configured directory for every candidate filename, in configured order,
//! and returning the first hit.
//!
//! ```rust,no_run
//! use locate::Locator;
//!
//! # fn run() -> locate::LocateResult<()> {
//! let locator = Locator::builder()
//!     .search_path("/etc/app")
//!     .search_path("./conf")
//!     .extensions(["yaml", "yml"])
//!     .build();
//!
//! // Probes /etc/app/config.yaml, /etc/app/config.yml, ./conf/config.yaml
//! // and ./conf/config.yml, returning the first path that exists.
//! let path = locator.find("config")?;
//! let contents = locator.read_file("config")?;
//! # let _ = (path, contents);
//! # Ok(())
//! # }
//! ```
//!
//! Lookup failures carry every path that was tried, so callers can report
//! exactly where a file was expected; genuine filesystem failures (permission
//! denied, broken mounts) are kept distinct from "not found anywhere" so they
//! are never silently swallowed. See [`LocateError`].

mod error;
mod locator;

pub use error::{LocateError, LocateResult};
pub use locator::{Locator, LocatorBuilder};
