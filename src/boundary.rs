use std::fmt;

/// Warnings raised while preparing a release near repository boundaries.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag is reachable from HEAD, so the whole history is released
    NoPriorTag { current_commit_hash: String },
    /// The root manifest has no version field; 0.0.0 is assumed
    MissingVersionField { manifest: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorTag {
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No previous tag found, using full history up to {}",
                    short_hash
                )
            }
            BoundaryWarning::MissingVersionField { manifest } => {
                write!(f, "No version field in '{}', starting from 0.0.0", manifest)
            }
        }
    }
}
