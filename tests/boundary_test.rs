use tagger::boundary::BoundaryWarning;
use tagger::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_prior_tag_display() {
    let warning = BoundaryWarning::NoPriorTag {
        current_commit_hash: "abc1234def5678".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No previous tag"),
        "Message should mention the missing tag, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("abc1234"),
        "Message should contain shortened commit hash 'abc1234', got: {}",
        display_msg
    );
    assert!(
        !display_msg.contains("abc1234d"),
        "Hash should be shortened to 7 characters, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_short_hash_is_kept() {
    let warning = BoundaryWarning::NoPriorTag {
        current_commit_hash: "abc".to_string(),
    };
    assert!(warning.to_string().ends_with("abc"));
}

#[test]
fn test_boundary_warning_missing_version_display() {
    let warning = BoundaryWarning::MissingVersionField {
        manifest: "/work/app/package.json".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("/work/app/package.json"),
        "Message should name the manifest, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("0.0.0"),
        "Message should mention the assumed version, got: {}",
        display_msg
    );
}

#[test]
fn test_display_boundary_warning_prints() {
    // Output goes to stderr; this only checks nothing panics.
    ui::display_boundary_warning(&BoundaryWarning::MissingVersionField {
        manifest: "package.json".to_string(),
    });
}
