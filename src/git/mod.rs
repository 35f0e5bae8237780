//! Tag lookup abstraction layer
//!
//! The resolver never talks to git directly. It asks a [TagSupplier] for
//! the latest tag under a prefix, so the same decision logic runs against
//! a real repository or a canned answer in tests.
//!
//! - [repository::Git2TagSupplier]: reads tags from a repository with `git2`
//! - [mock::MockTagSupplier]: returns a fixed answer and records requests
//!
//! Closures are suppliers too:
//!
//! ```rust
//! # use git_next_tag::git::TagSupplier;
//! # use git_next_tag::Result;
//! let supplier = |prefix: &str| -> Result<Option<String>> { Ok(Some(format!("{}1.2.3", prefix))) };
//! assert_eq!(supplier.latest_tag("v").unwrap(), Some("v1.2.3".to_string()));
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSupplier;
pub use repository::Git2TagSupplier;

use crate::error::Result;

/// Source of the most recent tag for a prefix
///
/// Implementations decide what "most recent" means and document it.
pub trait TagSupplier {
    /// Get the latest tag whose name starts with `prefix`
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The full tag name, prefix included
    /// * `Ok(None)` - If no such tag exists
    /// * `Err` - If the underlying lookup fails
    fn latest_tag(&self, prefix: &str) -> Result<Option<String>>;
}

impl<F> TagSupplier for F
where
    F: Fn(&str) -> Result<Option<String>>,
{
    fn latest_tag(&self, prefix: &str) -> Result<Option<String>> {
        self(prefix)
    }
}
