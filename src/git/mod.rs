//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! queries semver-stamp needs, allowing for a real libgit2-backed
//! implementation and an in-memory mock for testing.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use semver_stamp::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let branch = repo.current_branch()?;
//! for tag in repo.latest_tags()? {
//!     println!("{} is {} commits ahead of {}", branch, repo.commits_since(&tag)?, tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control queries used by the version source resolver
///
/// All methods return [crate::error::Result<T>]; implementations map
/// underlying failures (like `git2::Error`) to
/// [crate::error::StampError::VersionControl].
pub trait Repository {
    /// Short name of the checked out reference
    ///
    /// Returns `"HEAD"` when the working tree is detached.
    fn current_branch(&self) -> Result<String>;

    /// Tags pointing at the most recently committed tagged commit
    ///
    /// Only the tagged commits themselves are compared, no history is
    /// walked. Names are sorted; the list is empty when the repository has
    /// no tags at all.
    fn latest_tags(&self) -> Result<Vec<String>>;

    /// Number of commits reachable from HEAD but not from `tag`
    fn commits_since(&self, tag: &str) -> Result<u32>;

    /// Whether a tag with this exact name exists
    fn has_tag(&self, name: &str) -> Result<bool>;
}
