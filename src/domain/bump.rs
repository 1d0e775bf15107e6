use super::commit::{CommitRecord, CommitType};
use super::version::BumpLevel;

/// Marker text that forces a major bump wherever it appears in a subject.
const BREAKING_CHANGE: &str = "BREAKING CHANGE";
const BREAKING_MARKER: &str = "!:";

/// Reduce classified commits to a single bump level.
///
/// Checked in order, first match wins:
/// 1. any raw subject containing `BREAKING CHANGE` or `!:` => major
/// 2. any `feat` record => minor
/// 3. any `fix`, `revert` or `perf` record => patch
/// 4. otherwise none
///
/// Breaking markers are looked up on the raw subject, not the type, so they
/// count even on subjects that classify as `other`.
pub fn decide(records: &[CommitRecord]) -> BumpLevel {
    if records
        .iter()
        .any(|r| r.subject.contains(BREAKING_CHANGE) || r.subject.contains(BREAKING_MARKER))
    {
        return BumpLevel::Major;
    }

    if records.iter().any(|r| r.r#type == CommitType::Feat) {
        return BumpLevel::Minor;
    }

    // TODO: revert and perf share fix's severity; confirm with release owners
    // whether perf should stay a patch bump.
    if records.iter().any(|r| {
        matches!(
            r.r#type,
            CommitType::Fix | CommitType::Revert | CommitType::Perf
        )
    }) {
        return BumpLevel::Patch;
    }

    BumpLevel::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide_subjects(subjects: &[&str]) -> BumpLevel {
        decide(&CommitRecord::classify_all(subjects))
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(decide(&[]), BumpLevel::None);
    }

    #[test]
    fn test_feat_outranks_fix() {
        assert_eq!(decide_subjects(&["feat: x", "fix: y"]), BumpLevel::Minor);
        assert_eq!(decide_subjects(&["fix: y", "feat: x"]), BumpLevel::Minor);
    }

    #[test]
    fn test_fix_is_patch() {
        assert_eq!(decide_subjects(&["fix: y", "chore: z"]), BumpLevel::Patch);
    }

    #[test]
    fn test_revert_and_perf_are_patch() {
        assert_eq!(decide_subjects(&["revert: undo x"]), BumpLevel::Patch);
        assert_eq!(decide_subjects(&["perf(db): faster query"]), BumpLevel::Patch);
    }

    #[test]
    fn test_other_types_are_none() {
        assert_eq!(decide_subjects(&["refactor: x"]), BumpLevel::None);
        assert_eq!(
            decide_subjects(&["docs: a", "style: b", "test: c", "build: d", "ci: e", "chore: f"]),
            BumpLevel::None
        );
        assert_eq!(decide_subjects(&["Merge branch 'main'"]), BumpLevel::None);
    }

    #[test]
    fn test_bang_marker_is_major() {
        assert_eq!(decide_subjects(&["feat!: remove api"]), BumpLevel::Major);
        assert_eq!(decide_subjects(&["fix(core)!: drop flag"]), BumpLevel::Major);
    }

    #[test]
    fn test_bang_marker_anywhere_in_subject() {
        assert_eq!(decide_subjects(&["chore: a!: b"]), BumpLevel::Major);
        assert_eq!(decide_subjects(&["chore: a! b"]), BumpLevel::None);
    }

    #[test]
    fn test_breaking_change_text_is_major() {
        assert_eq!(
            decide_subjects(&["docs: note BREAKING CHANGE in config", "fix: y"]),
            BumpLevel::Major
        );
        assert_eq!(
            decide_subjects(&["refactor: breaking change lowercase"]),
            BumpLevel::None
        );
    }

    #[test]
    fn test_decide_is_repeatable() {
        let records = CommitRecord::classify_all(&["fix: a", "docs: b"]);
        assert_eq!(decide(&records), decide(&records));
    }
}
