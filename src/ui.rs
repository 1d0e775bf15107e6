//! Terminal output for the release flow.
//!
//! Plain functions that print; nothing here reads input.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::CommitRecord;
use crate::release::ReleasePlan;

/// Commits listed before the rest are summarised as a count.
const MAX_LISTED_COMMITS: usize = 10;
const MAX_SUBJECT_WIDTH: usize = 60;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Cut a subject to `MAX_SUBJECT_WIDTH` characters without splitting a char.
fn shorten(subject: &str) -> String {
    match subject.char_indices().nth(MAX_SUBJECT_WIDTH) {
        Some((cut, _)) => format!("{}…", &subject[..cut]),
        None => subject.to_string(),
    }
}

/// Show the commits going into the release with their classification.
pub fn display_commit_analysis(subjects: &[String], last_tag: Option<&str>) {
    println!(
        "\n{}",
        style(format!(
            "Analyzing commits since {}",
            last_tag.unwrap_or("the first commit")
        ))
        .bold()
    );
    println!(
        "{}",
        style(format!("{} commit(s):", subjects.len())).underlined()
    );

    for (i, subject) in subjects.iter().take(MAX_LISTED_COMMITS).enumerate() {
        let record = CommitRecord::classify(subject);
        println!(
            "  {}. {} {}",
            i + 1,
            style(format!("[{}]", record.r#type)).cyan(),
            shorten(subject)
        );
    }

    if subjects.len() > MAX_LISTED_COMMITS {
        println!(
            "  ... and {} more commits",
            subjects.len() - MAX_LISTED_COMMITS
        );
    }
}

pub fn display_nothing_to_release(commit_count: usize) {
    println!(
        "\n{} Nothing to release yet ({} commit(s) checked).",
        style("→").cyan(),
        commit_count
    );
}

/// Show the version change and the files a release touches.
pub fn display_release_plan(plan: &ReleasePlan) {
    println!(
        "\n{} {} → {} ({})",
        style("Releasing:").yellow().bold(),
        style(plan.current).red(),
        style(plan.next).green(),
        plan.bump
    );
    for manifest in &plan.manifests {
        println!("  update  {}", manifest.display());
    }
    println!("  prepend {}", plan.changelog_path.display());
    println!("  tag     {}", plan.tag);
}

pub fn display_changelog_preview(plan: &ReleasePlan) {
    println!("\n{}", style("Changelog entry:").bold());
    print!("{}", plan.changelog);
}

pub fn display_push_instruction(tag: &str) {
    println!(
        "\n{} Release tagged as {}\n  Push with: {}",
        style("✓").green(),
        style(tag).green().bold(),
        style("git push && git push --tags").cyan()
    );
}
