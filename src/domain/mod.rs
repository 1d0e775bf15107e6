//! Domain logic - pure release rules independent of git and the filesystem

pub mod bump;
pub mod changelog;
pub mod commit;
pub mod version;

pub use bump::decide;
pub use changelog::{compose, ChangelogEntry, ChangelogSection};
pub use commit::{CommitRecord, CommitType};
pub use version::{BumpLevel, Version};
