//! Version fields in build descriptor files

use crate::domain::Version;
use crate::error::{Result, StampError};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Descriptor file formats carrying a version field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    /// `version=X.Y.Z` at the start of a line
    GradleProperties,
    /// `"version": "X.Y.Z"`
    PackageJson,
}

impl Descriptor {
    fn pattern(&self) -> &'static str {
        match self {
            Descriptor::GradleProperties => r"(?m)^version=(\d+\.\d+\.\d+)",
            Descriptor::PackageJson => r#""version": "(\d+\.\d+\.\d+)"#,
        }
    }

    /// First version field in `contents`, if any
    pub fn find_version<'t>(&self, contents: &'t str) -> Option<&'t str> {
        Regex::new(self.pattern())
            .ok()?
            .captures(contents)?
            .get(1)
            .map(|m| m.as_str())
    }

    /// Read `path` and parse its first version field
    ///
    /// # Errors
    /// * `ReadFile` - the file cannot be read
    /// * `VersionNotFound` - no version field matches
    /// * `UnparseableInteger` - a component does not fit in a `u32`
    pub fn read_version(&self, path: &Path) -> Result<Version> {
        debug!(path = %path.display(), descriptor = ?self, "reading version descriptor");
        let contents = fs::read_to_string(path).map_err(|source| StampError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let text = self
            .find_version(&contents)
            .ok_or_else(|| StampError::version_not_found(path))?;
        Version::parse(text)
    }
}
