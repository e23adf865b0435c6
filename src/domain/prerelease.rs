//! Pre-release labels derived from the branch channel
//!
//! Non-trunk builds carry `<label>.<commits>`, e.g. `alpha.5`, `beta.0` or
//! `042-login.3`. Trunk builds carry no pre-release at all.

use crate::domain::branch::Channel;
use std::fmt;

/// Pre-release identifier (alpha, beta, or a branch-derived label)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreReleaseType {
    /// develop builds
    Alpha,
    /// release and hotfix builds
    Beta,
    /// Feature slug or verbatim branch name
    Custom(String),
}

impl PreReleaseType {
    /// Label for a channel, `None` on trunk
    pub fn for_channel(channel: &Channel) -> Option<Self> {
        match channel {
            Channel::Trunk => None,
            Channel::ReleaseCandidate { .. } => Some(PreReleaseType::Beta),
            Channel::Develop => Some(PreReleaseType::Alpha),
            Channel::Feature(slug) => Some(PreReleaseType::Custom(slug.clone())),
            Channel::Other(name) => Some(PreReleaseType::Custom(name.clone())),
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release label with the commit distance as its number
///
/// # Examples
/// - develop, 5 commits -> "alpha.5"
/// - release/2.0, 0 commits -> "beta.0"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub identifier: PreReleaseType,
    pub number: u32,
}

impl PreRelease {
    pub fn new(identifier: PreReleaseType, number: u32) -> Self {
        PreRelease { identifier, number }
    }

    /// Build the pre-release for a channel, `None` on trunk
    pub fn for_channel(channel: &Channel, commits_since_source: u32) -> Option<Self> {
        PreReleaseType::for_channel(channel).map(|id| PreRelease::new(id, commits_since_source))
    }

    /// Suffix appended to the version, including the leading dash
    pub fn with_dash(&self) -> String {
        format!("-{}", self)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.identifier, self.number)
    }
}
