use crate::error::{Result, TaggerError};
use crate::git::Repository;
use std::path::PathBuf;
use std::sync::Mutex;

/// A side effect requested from the mock, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Stage(Vec<PathBuf>),
    Commit(String),
    Tag(String),
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    last_tag: Option<String>,
    subjects: Vec<String>,
    fail_on: Option<&'static str>,
    operations: Mutex<Vec<Operation>>,
}

impl MockRepository {
    /// Create a mock with no tags and no commits
    pub fn new() -> Self {
        MockRepository {
            last_tag: None,
            subjects: Vec::new(),
            fail_on: None,
            operations: Mutex::new(Vec::new()),
        }
    }

    /// Set the tag returned by `last_tag`
    pub fn with_last_tag(mut self, tag: impl Into<String>) -> Self {
        self.last_tag = Some(tag.into());
        self
    }

    /// Set the subjects returned by `commit_subjects`, newest first
    pub fn with_subjects(mut self, subjects: &[&str]) -> Self {
        self.subjects = subjects.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Make one step fail: `"stage"`, `"commit"`, `"tag"` or `"head"`
    pub fn failing_on(mut self, step: &'static str) -> Self {
        self.fail_on = Some(step);
        self
    }

    /// Side effects performed so far
    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, step: &'static str, operation: Operation) -> Result<()> {
        if self.fail_on == Some(step) {
            return Err(TaggerError::release(format!("mock {} failure", step)));
        }
        self.operations.lock().unwrap().push(operation);
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn last_tag(&self) -> Result<Option<String>> {
        Ok(self.last_tag.clone())
    }

    fn commit_subjects(&self, _since: Option<&str>) -> Result<Vec<String>> {
        Ok(self.subjects.clone())
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        self.record("stage", Operation::Stage(paths.to_vec()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", Operation::Commit(message.to_string()))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record("tag", Operation::Tag(name.to_string()))
    }

    fn head_hash(&self) -> Result<String> {
        if self.fail_on == Some("head") {
            return Err(TaggerError::release("mock head failure"));
        }
        Ok("0".repeat(40))
    }
}
