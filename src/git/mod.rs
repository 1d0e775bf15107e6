//! Git operations abstraction layer
//!
//! The release pipeline only talks to the [Repository] trait. Two
//! implementations exist:
//!
//! - [repository::Git2Repository]: a real repository, backed by the `git2` crate
//! - [mock::MockRepository]: an in-memory stand-in that records what was asked of it
//!
//! ```rust
//! # use tagger::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> tagger::Result<()> {
//! let last_tag = repo.last_tag()?;
//! let subjects = repo.commit_subjects(last_tag.as_deref())?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::PathBuf;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send`.
pub trait Repository: Send {
    /// Nearest tag reachable from HEAD, like `git describe --tags --abbrev=0`
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The tag name
    /// * `Ok(None)` - No tag is reachable, or HEAD has no commits yet
    fn last_tag(&self) -> Result<Option<String>>;

    /// Subject lines of commits reachable from HEAD but not from `since`
    ///
    /// Newest first, the same order `git log` prints them. Commits with an
    /// empty subject are skipped. With `since == None` the whole history of
    /// HEAD is returned.
    fn commit_subjects(&self, since: Option<&str>) -> Result<Vec<String>>;

    /// Add files to the index
    ///
    /// Paths may be absolute (inside the working tree) or relative to it.
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit the current index on top of HEAD
    fn commit(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag on HEAD
    ///
    /// Fails if the tag already exists.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Full hash of the HEAD commit
    fn head_hash(&self) -> Result<String>;
}
