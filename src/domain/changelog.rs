use super::commit::{CommitRecord, CommitType};
use super::version::Version;
use chrono::NaiveDate;
use std::fmt;

/// Descriptions of one commit type, in original commit order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogSection {
    pub r#type: CommitType,
    pub entries: Vec<String>,
}

/// A rendered-on-demand changelog block for one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: Version,
    pub date: NaiveDate,
    pub sections: Vec<ChangelogSection>,
}

/// Group records by type into sections for `version`.
///
/// Sections follow `CommitType::DISPLAY_ORDER` and empty ones are left out.
pub fn compose(version: Version, date: NaiveDate, records: &[CommitRecord]) -> ChangelogEntry {
    let sections = CommitType::DISPLAY_ORDER
        .iter()
        .filter_map(|commit_type| {
            let entries: Vec<String> = records
                .iter()
                .filter(|record| record.r#type == *commit_type)
                .map(|record| record.description.clone())
                .collect();

            (!entries.is_empty()).then(|| ChangelogSection {
                r#type: *commit_type,
                entries,
            })
        })
        .collect();

    ChangelogEntry {
        version,
        date,
        sections,
    }
}

impl ChangelogEntry {
    pub fn header(&self) -> String {
        format!("## v{} - {}", self.version, self.date.format("%Y-%m-%d"))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "### {}", section.r#type.label())?;
            for entry in &section.entries {
                writeln!(f, "- {}", entry)?;
            }
        }
        writeln!(f)
    }
}
