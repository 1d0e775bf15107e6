use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// `type(scope): description`, the scope being optional.
    static ref SUBJECT_REGEX: Regex =
        Regex::new(r"^([A-Za-z0-9_]+)(\(.+\))?:\s(.+)").unwrap();
}

/// Conventional commit type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Refactor,
    Chore,
    Style,
    Test,
    Perf,
    Build,
    Ci,
    Revert,
    Other,
}

/// Recognized type keywords. Anything else classifies as `Other`.
const KNOWN_TYPES: &[(&str, CommitType)] = &[
    ("feat", CommitType::Feat),
    ("fix", CommitType::Fix),
    ("docs", CommitType::Docs),
    ("refactor", CommitType::Refactor),
    ("chore", CommitType::Chore),
    ("style", CommitType::Style),
    ("test", CommitType::Test),
    ("perf", CommitType::Perf),
    ("build", CommitType::Build),
    ("ci", CommitType::Ci),
    ("revert", CommitType::Revert),
];

impl CommitType {
    /// Changelog section order.
    pub const DISPLAY_ORDER: [CommitType; 12] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Style,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Revert,
        CommitType::Other,
    ];

    /// Look up a type keyword, case-sensitively
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        KNOWN_TYPES
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, commit_type)| *commit_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Refactor => "refactor",
            CommitType::Chore => "chore",
            CommitType::Style => "style",
            CommitType::Test => "test",
            CommitType::Perf => "perf",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Revert => "revert",
            CommitType::Other => "other",
        }
    }

    /// Changelog heading text for this type
    pub fn label(&self) -> &'static str {
        match self {
            CommitType::Feat => "✨ Features",
            CommitType::Fix => "🐛 Fixes",
            CommitType::Docs => "📝 Documentation",
            CommitType::Refactor => "♻️ Refactors",
            CommitType::Perf => "⚡ Performance",
            CommitType::Style => "🎨 Code Style",
            CommitType::Test => "✅ Tests",
            CommitType::Build => "🏗️ Build",
            CommitType::Ci => "🔧 CI/CD",
            CommitType::Chore => "🧹 Chores",
            CommitType::Revert => "⏪ Reverts",
            CommitType::Other => "📦 Others",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified commit subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub subject: String,
    pub r#type: CommitType,
    pub description: String,
}

impl CommitRecord {
    /// Classify a raw subject line.
    ///
    /// Subjects that do not match `type(scope): description`, or whose type is
    /// not a known keyword, become `Other` with the full subject kept as the
    /// description.
    pub fn classify(subject: &str) -> Self {
        let known = SUBJECT_REGEX.captures(subject).and_then(|captures| {
            let commit_type = CommitType::from_keyword(captures.get(1)?.as_str())?;
            let description = captures.get(3)?.as_str().to_string();
            Some((commit_type, description))
        });

        let (r#type, description) =
            known.unwrap_or_else(|| (CommitType::Other, subject.to_string()));

        CommitRecord {
            subject: subject.to_string(),
            r#type,
            description,
        }
    }

    /// Classify every subject, keeping input order
    pub fn classify_all<S: AsRef<str>>(subjects: &[S]) -> Vec<Self> {
        subjects
            .iter()
            .map(|subject| CommitRecord::classify(subject.as_ref()))
            .collect()
    }
}
