//! Release orchestration
//!
//! Ties the pure engine in [crate::domain] to git and the filesystem:
//! 1. Find the last tag and the commit subjects since it
//! 2. Classify the subjects and decide the bump level
//! 3. Read the current version from the root manifest and bump it
//! 4. Compose the changelog entry
//! 5. Write manifests, prepend the changelog, then stage, commit and tag
//!
//! Every step runs in order and the first failure stops the rest.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::boundary::BoundaryWarning;
use crate::changelog_file;
use crate::config::Config;
use crate::domain::{self, BumpLevel, ChangelogEntry, CommitRecord, Version};
use crate::error::{Result, TaggerError};
use crate::git::Repository;
use crate::ignore::IgnoreList;
use crate::manifest;

/// Inputs that vary per invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOptions {
    /// Project root holding the root manifest and the changelog
    pub root: PathBuf,
    /// Date printed in the changelog header
    pub date: NaiveDate,
    /// Compute the release without touching files or git
    pub dry_run: bool,
}

/// Everything a release will change, computed before any side effect
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub last_tag: Option<String>,
    pub subjects: Vec<String>,
    pub bump: BumpLevel,
    pub current: Version,
    pub next: Version,
    pub tag: String,
    pub commit_message: String,
    pub manifests: Vec<PathBuf>,
    pub changelog_path: PathBuf,
    pub changelog: ChangelogEntry,
    pub warnings: Vec<BoundaryWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// No commit since the last tag warrants a release
    NothingToRelease {
        last_tag: Option<String>,
        commit_count: usize,
    },
    /// Dry run: the plan was computed but not applied
    Planned(ReleasePlan),
    Released(ReleasePlan),
}

pub struct ReleasePipeline<'a, R: Repository> {
    repo: &'a R,
    config: &'a Config,
}

impl<'a, R: Repository> ReleasePipeline<'a, R> {
    pub fn new(repo: &'a R, config: &'a Config) -> Self {
        ReleasePipeline { repo, config }
    }

    /// Plan the release and, unless this is a dry run, apply it
    pub fn run(&self, options: &ReleaseOptions) -> Result<ReleaseOutcome> {
        let outcome = self.plan(&options.root, options.date)?;
        match outcome {
            ReleaseOutcome::Planned(plan) if !options.dry_run => {
                self.apply(&plan)?;
                Ok(ReleaseOutcome::Released(plan))
            }
            other => Ok(other),
        }
    }

    /// Compute the next release without side effects
    pub fn plan(&self, root: &Path, date: NaiveDate) -> Result<ReleaseOutcome> {
        let last_tag = self.repo.last_tag()?;
        let subjects = self.repo.commit_subjects(last_tag.as_deref())?;
        let records = CommitRecord::classify_all(&subjects);
        let bump = domain::decide(&records);
        tracing::info!(
            "{} commit(s) since {}: {} bump",
            subjects.len(),
            last_tag.as_deref().unwrap_or("the first commit"),
            bump
        );

        if bump == BumpLevel::None {
            return Ok(ReleaseOutcome::NothingToRelease {
                last_tag,
                commit_count: subjects.len(),
            });
        }

        // HEAD has commits from here on, so its hash must resolve.
        let mut warnings = Vec::new();
        if last_tag.is_none() {
            warnings.push(BoundaryWarning::NoPriorTag {
                current_commit_hash: self.repo.head_hash()?,
            });
        }

        let release = &self.config.release;
        let root_manifest = root.join(&release.manifest);
        let current = match manifest::read_version(&root_manifest)? {
            Some(version) => version,
            None => {
                warnings.push(BoundaryWarning::MissingVersionField {
                    manifest: root_manifest.display().to_string(),
                });
                Version::default()
            }
        };
        let next = current.bump(bump)?;

        let manifests = if release.multi_package {
            let ignore = IgnoreList::load(root, &self.config.ignore)?;
            manifest::discover(root, &release.manifest, &ignore)?
        } else {
            vec![root_manifest]
        };

        let next_str = next.to_string();
        Ok(ReleaseOutcome::Planned(ReleasePlan {
            tag: release.tag_name(&next_str),
            commit_message: release.commit_message(&next_str),
            changelog_path: root.join(&release.changelog),
            changelog: domain::compose(next, date, &records),
            last_tag,
            subjects,
            bump,
            current,
            next,
            manifests,
            warnings,
        }))
    }

    /// Write files, then stage, commit and tag, strictly in that order
    pub fn apply(&self, plan: &ReleasePlan) -> Result<()> {
        for path in &plan.manifests {
            manifest::write_version(path, &plan.next)?;
        }

        changelog_file::prepend(&plan.changelog_path, &plan.changelog.render())?;
        tracing::debug!("Prepended changelog entry to {}", plan.changelog_path.display());

        let mut staged = plan.manifests.clone();
        staged.push(plan.changelog_path.clone());

        self.repo
            .stage(&staged)
            .map_err(|e| step_failed("git add", e))?;
        self.repo
            .commit(&plan.commit_message)
            .map_err(|e| step_failed("git commit", e))?;
        self.repo
            .create_tag(&plan.tag)
            .map_err(|e| step_failed("git tag", e))?;

        tracing::info!("Released {} ({} bump)", plan.tag, plan.bump);
        Ok(())
    }
}

fn step_failed(step: &str, err: TaggerError) -> TaggerError {
    tracing::error!("{} failed, skipping remaining release steps", step);
    TaggerError::release(format!("{} failed: {}", step, err))
}
