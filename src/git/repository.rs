use crate::error::{Result, TaggerError};
use git2::{
    DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo, Sort,
};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Self::from_git2(repo)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| TaggerError::release("Bare repositories cannot be released"))?
            .to_path_buf();
        Ok(Git2Repository { repo, workdir })
    }

    /// Index path for `path`, which may be relative to the current directory
    fn relative_to_workdir(&self, path: &Path) -> Result<PathBuf> {
        let absolute = if path.is_relative() {
            std::env::current_dir()?.join(path)
        } else {
            path.to_path_buf()
        };
        // Both sides canonicalized so symlinked temp dirs and `.` components line up.
        let workdir = self.workdir.canonicalize()?;
        let absolute = absolute.canonicalize()?;
        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                TaggerError::release(format!(
                    "{} is outside the working tree {}",
                    path.display(),
                    self.workdir.display()
                ))
            })
    }

    fn head_is_unborn(&self) -> Result<bool> {
        match self.repo.head() {
            Ok(_) => Ok(false),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl super::Repository for Git2Repository {
    fn last_tag(&self) -> Result<Option<String>> {
        if self.head_is_unborn()? {
            return Ok(None);
        }

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let description = match self.repo.describe(&options) {
            Ok(description) => description,
            // No tag can describe HEAD, or the repository has no tags at all.
            Err(e) if e.code() == ErrorCode::NotFound || e.class() == ErrorClass::Describe => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = description.format(Some(&format))?;

        tracing::debug!("Last tag: {}", tag);
        Ok(Some(tag))
    }

    fn commit_subjects(&self, since: Option<&str>) -> Result<Vec<String>> {
        if self.head_is_unborn()? {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        if let Some(tag) = since {
            let tagged = self
                .repo
                .revparse_single(&format!("refs/tags/{}", tag))?
                .peel_to_commit()?;
            revwalk.hide(tagged.id())?;
        }

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            match commit.summary() {
                Some(summary) if !summary.trim().is_empty() => subjects.push(summary.to_string()),
                _ => continue,
            }
        }

        tracing::debug!(
            "Collected {} commit subject(s) since {}",
            subjects.len(),
            since.unwrap_or("the first commit")
        );
        Ok(subjects)
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(&self.relative_to_workdir(path)?)?;
        }
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let parent = if self.head_is_unborn()? {
            None
        } else {
            Some(self.repo.head()?.peel_to_commit()?)
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        tracing::debug!("Created commit {}", oid);
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.tag_lightweight(name, head.as_object(), false)?;
        Ok(())
    }

    fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?;
        let oid = head
            .target()
            .ok_or_else(|| TaggerError::release("HEAD is detached or invalid"))?;
        Ok(oid.to_string())
    }
}
