pub mod boundary;
pub mod changelog_file;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ignore;
pub mod manifest;
pub mod release;
pub mod ui;

pub use error::{Result, TaggerError};
