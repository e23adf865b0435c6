use crate::error::{Result, StampError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Base version triple read from a version source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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

    /// Parse an exact `X.Y.Z` string (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// Anything other than three dot-separated digit runs is rejected with
    /// `InvalidVersionFormat`; a component that does not fit in a `u32`
    /// yields `UnparseableInteger`.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(StampError::invalid_format(text));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(StampError::invalid_format(text));
            }
            *slot = part
                .parse::<u32>()
                .map_err(|_| StampError::unparseable(*part))?;
        }

        Ok(Version::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Find the first `X.Y.Z` triple anywhere in `text`
    ///
    /// Used for tag names such as "v1.2.3" or "release-1.2.3".
    pub fn extract(text: &str) -> Result<Self> {
        if let Ok(re) = Regex::new(r"\d+\.\d+\.\d+") {
            if let Some(found) = re.find(text) {
                return Version::parse(found.as_str());
            }
        }
        Err(StampError::invalid_format(text))
    }

    /// Next minor line, keeping the patch component as is
    ///
    /// Fails with `UnparseableInteger` when the minor is already `u32::MAX`.
    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self
            .minor
            .checked_add(1)
            .ok_or_else(|| StampError::unparseable(format!("{}+1", self.minor)))?;
        Ok(Version { minor, ..*self })
    }

    /// Next patch on the current line
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| StampError::unparseable(format!("{}+1", self.patch)))?;
        Ok(Version { patch, ..*self })
    }
}

impl FromStr for Version {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
