use crate::error::{Result, TaggerError};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a manifest version string (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// Only exactly three dot-separated runs of ASCII digits are accepted.
    /// Signs, prefixes and pre-release or build suffixes are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(TaggerError::version(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH",
                input
            )));
        }

        let component = |part: &str| -> Result<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TaggerError::version(format!(
                    "Invalid version component '{}' in '{}'",
                    part, input
                )));
            }
            part.parse::<u32>().map_err(|_| {
                TaggerError::version(format!(
                    "Version component '{}' in '{}' is out of range",
                    part, input
                ))
            })
        };

        Ok(Version {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            patch: component(parts[2])?,
        })
    }

    /// Bump version according to bump level
    ///
    /// `BumpLevel::None` is never passed by the release pipeline; it leaves the
    /// version as is. Fails when the bumped component would exceed `u32::MAX`.
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let overflow = || {
            TaggerError::version(format!("Cannot apply a {} bump to {}", level, self))
        };
        Ok(match level {
            BumpLevel::Major => Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpLevel::Minor => {
                Version::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            BumpLevel::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
            BumpLevel::None => *self,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Aggregate severity of a set of commits, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpLevel {
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::None => "none",
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
