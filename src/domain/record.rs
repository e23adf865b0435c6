//! The version record emitted for a build and its field selector

use crate::error::{Result, StampError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fully derived version for one build
///
/// Serializes with PascalCase keys (`SemVer`, `AssemblySemVer`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionRecord {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub branch_name: String,
    pub commits_since_source: u32,
    pub commits_since_source_padded: String,
    pub pre_release_label: String,
    pub pre_release_tag: String,
    pub pre_release_tag_with_dash: String,
    pub major_minor_patch: String,
    pub sem_ver: String,
    pub build_meta_data: String,
    pub assembly_sem_ver: String,
}

impl VersionRecord {
    /// Plain-text value of a single field
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Major => self.major.to_string(),
            Field::Minor => self.minor.to_string(),
            Field::Patch => self.patch.to_string(),
            Field::BranchName => self.branch_name.clone(),
            Field::CommitsSinceSource => self.commits_since_source.to_string(),
            Field::CommitsSinceSourcePadded => self.commits_since_source_padded.clone(),
            Field::PreReleaseLabel => self.pre_release_label.clone(),
            Field::PreReleaseTag => self.pre_release_tag.clone(),
            Field::PreReleaseTagWithDash => self.pre_release_tag_with_dash.clone(),
            Field::MajorMinorPatch => self.major_minor_patch.clone(),
            Field::SemVer => self.sem_ver.clone(),
            Field::BuildMetaData => self.build_meta_data.clone(),
            Field::AssemblySemVer => self.assembly_sem_ver.clone(),
        }
    }

    /// Whether `sem_ver` is accepted by a strict SemVer 2.0 parser
    ///
    /// Branch-derived labels may contain characters SemVer forbids
    /// (`_`, `/`, ...); the record is still emitted as-is.
    pub fn is_strict_semver(&self) -> bool {
        semver::Version::parse(&self.sem_ver).is_ok()
    }
}

/// Selector for a single record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Major,
    Minor,
    Patch,
    BranchName,
    CommitsSinceSource,
    CommitsSinceSourcePadded,
    PreReleaseLabel,
    PreReleaseTag,
    PreReleaseTagWithDash,
    MajorMinorPatch,
    SemVer,
    BuildMetaData,
    AssemblySemVer,
}

/// Field names accepted by the selector, matched case-insensitively
const FIELD_NAMES: &[(&str, Field)] = &[
    ("Major", Field::Major),
    ("Minor", Field::Minor),
    ("Patch", Field::Patch),
    ("BranchName", Field::BranchName),
    ("CommitsSinceSource", Field::CommitsSinceSource),
    ("CommitsSinceSourcePadded", Field::CommitsSinceSourcePadded),
    ("PreReleaseLabel", Field::PreReleaseLabel),
    ("PreReleaseTag", Field::PreReleaseTag),
    ("PreReleaseTagWithDash", Field::PreReleaseTagWithDash),
    ("MajorMinorPatch", Field::MajorMinorPatch),
    ("SemVer", Field::SemVer),
    ("BuildMetaData", Field::BuildMetaData),
    ("AssemblySemVer", Field::AssemblySemVer),
    // names used by older pipelines
    ("CommitsSinceVersionSource", Field::CommitsSinceSource),
    ("CommitsSinceVersionSourcePadded", Field::CommitsSinceSourcePadded),
];

impl Field {
    /// Canonical key, identical to the serialized JSON key
    pub fn key(&self) -> &'static str {
        FIELD_NAMES
            .iter()
            .find(|(_, f)| f == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

impl FromStr for Field {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        FIELD_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, field)| *field)
            .ok_or_else(|| StampError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionRecord {
        VersionRecord {
            major: 1,
            minor: 3,
            patch: 3,
            branch_name: "develop".to_string(),
            commits_since_source: 5,
            commits_since_source_padded: "0005".to_string(),
            pre_release_label: "alpha".to_string(),
            pre_release_tag: "alpha.5".to_string(),
            pre_release_tag_with_dash: "-alpha.5".to_string(),
            major_minor_patch: "1.3.3".to_string(),
            sem_ver: "1.3.3-alpha.5".to_string(),
            build_meta_data: "0".to_string(),
            assembly_sem_ver: "1.3.3-alpha.5.0".to_string(),
        }
    }

    #[test]
    fn test_field_lookup_accepts_both_casings() {
        assert_eq!("SemVer".parse::<Field>().unwrap(), Field::SemVer);
        assert_eq!("semVer".parse::<Field>().unwrap(), Field::SemVer);
        assert_eq!("semver".parse::<Field>().unwrap(), Field::SemVer);
        assert_eq!(
            "CommitsSinceVersionSource".parse::<Field>().unwrap(),
            Field::CommitsSinceSource
        );
    }

    #[test]
    fn test_unknown_field_fails() {
        let err = "Sha".parse::<Field>().unwrap_err();
        assert!(matches!(err, StampError::UnknownField(name) if name == "Sha"));
    }

    #[test]
    fn test_value_of_integer_fields() {
        let record = sample();
        assert_eq!(record.value(Field::Minor), "3");
        assert_eq!(record.value(Field::CommitsSinceSource), "5");
        assert_eq!(record.value(Field::AssemblySemVer), "1.3.3-alpha.5.0");
    }

    #[test]
    fn test_json_keys_match_field_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        for (name, field) in FIELD_NAMES {
            if field.key() == *name {
                assert!(object.contains_key(*name), "missing key {}", name);
            }
        }
        assert_eq!(object.len(), 13);
        assert_eq!(object["SemVer"], "1.3.3-alpha.5");
    }

    #[test]
    fn test_strict_semver_check() {
        let mut record = sample();
        assert!(record.is_strict_semver());
        record.sem_ver = "1.1.0-my_branch.0".to_string();
        assert!(!record.is_strict_semver());
    }
}
