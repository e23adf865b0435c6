//! Version source resolution
//!
//! Produces the base version, the branch name and, for tag-based sources,
//! the commit distance from the tag. Everything here may touch the
//! filesystem, the environment or git; the derivation engine never does.

pub mod descriptor;
pub mod environment;

pub use descriptor::Descriptor;
pub use environment::{resolve_branch_name, Environment, ProcessEnvironment};

use crate::config::Config;
use crate::domain::Version;
use crate::error::{Result, StampError};
use crate::git::Repository;
use regex::Regex;
use tracing::debug;

/// Where the base version comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VersionSource {
    /// `version=` line of gradle.properties
    #[default]
    #[value(alias = "descriptor-field-a")]
    Gradle,
    /// `"version"` field of package.json
    #[value(alias = "descriptor-field-b")]
    Node,
    /// Latest tag, or the version in a release branch name
    #[value(alias = "latest-tag")]
    GitTag,
}

/// Resolver output consumed by the derivation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub base: Version,
    pub branch: String,
    /// Always 0 unless the source is [VersionSource::GitTag]
    pub commits_since_source: u32,
}

/// Resolves a [Resolution] for a given [VersionSource]
pub struct VersionResolver<'a, E: ?Sized, R: ?Sized> {
    config: &'a Config,
    env: &'a E,
    repo: &'a R,
}

impl<'a, E, R> VersionResolver<'a, E, R>
where
    E: Environment + ?Sized,
    R: Repository + ?Sized,
{
    /// Create a new resolver
    pub fn new(config: &'a Config, env: &'a E, repo: &'a R) -> Self {
        VersionResolver { config, env, repo }
    }

    /// Resolve the branch, then the base version from `source`
    pub fn resolve(&self, source: VersionSource) -> Result<Resolution> {
        let branch = resolve_branch_name(&self.config.environment, self.env, self.repo)?;

        let (base, commits_since_source) = match source {
            VersionSource::Gradle => (
                Descriptor::GradleProperties.read_version(&self.config.sources.gradle_file)?,
                0,
            ),
            VersionSource::Node => (
                Descriptor::PackageJson.read_version(&self.config.sources.node_file)?,
                0,
            ),
            VersionSource::GitTag => match release_branch_version(&branch)? {
                Some(version) => (version, self.commits_since_release(version)?),
                None => self.latest_tag_version()?,
            },
        };

        debug!(%base, %branch, commits_since_source, ?source, "resolved version source");
        Ok(Resolution {
            base,
            branch,
            commits_since_source,
        })
    }

    /// Distance from the tag matching a release branch version, if it exists
    fn commits_since_release(&self, version: Version) -> Result<u32> {
        let tag = version.to_string();
        if self.repo.has_tag(&tag)? {
            self.repo.commits_since(&tag)
        } else {
            debug!(%tag, "release branch version has no tag yet");
            Ok(0)
        }
    }

    /// Base version from the most recently tagged commit
    fn latest_tag_version(&self) -> Result<(Version, u32)> {
        let tags = self.repo.latest_tags()?;
        if tags.is_empty() {
            return Err(StampError::NoTagsFound);
        }

        for tag in &tags {
            match Version::extract(tag) {
                Ok(version) => {
                    debug!(%tag, "using latest tag");
                    return Ok((version, self.repo.commits_since(tag)?));
                }
                Err(StampError::InvalidVersionFormat(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(StampError::invalid_format(tags.join(", ")))
    }
}

/// Version embedded in a `release-X.Y.Z` or `release/X.Y.Z` branch name
pub fn release_branch_version(branch: &str) -> Result<Option<Version>> {
    let re = Regex::new(r"release[-/](\d+\.\d+\.\d+)")
        .map_err(|_| StampError::invalid_format(branch))?;
    match re.captures(branch).and_then(|caps| caps.get(1)) {
        Some(m) => Version::parse(m.as_str()).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use std::collections::HashMap;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_release_branch_version() {
        assert_eq!(
            release_branch_version("release/1.4.0").unwrap(),
            Some(Version::new(1, 4, 0))
        );
        assert_eq!(
            release_branch_version("release-2.0.1").unwrap(),
            Some(Version::new(2, 0, 1))
        );
        assert_eq!(release_branch_version("release/next").unwrap(), None);
        assert_eq!(release_branch_version("develop").unwrap(), None);
    }

    #[test]
    fn test_git_tag_uses_latest_tag() {
        let mut repo = MockRepository::new("develop");
        repo.add_tagged_commit(&["1.0.0"], 12);
        repo.add_tagged_commit(&["1.2.0"], 4);
        let config = Config::default();
        let env = no_env();

        let resolution = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::GitTag)
            .unwrap();
        assert_eq!(resolution.base, Version::new(1, 2, 0));
        assert_eq!(resolution.commits_since_source, 4);
        assert_eq!(resolution.branch, "develop");
    }

    #[test]
    fn test_git_tag_skips_non_version_tags() {
        let mut repo = MockRepository::new("master");
        repo.add_tagged_commit(&["deployed", "v3.1.0"], 1);
        let config = Config::default();
        let env = no_env();

        let resolution = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::GitTag)
            .unwrap();
        assert_eq!(resolution.base, Version::new(3, 1, 0));
        assert_eq!(resolution.commits_since_source, 1);
    }

    #[test]
    fn test_git_tag_without_tags() {
        let repo = MockRepository::new("master");
        let config = Config::default();
        let env = no_env();

        let err = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::GitTag)
            .unwrap_err();
        assert!(matches!(err, StampError::NoTagsFound));
    }

    #[test]
    fn test_git_tag_invalid_format() {
        let mut repo = MockRepository::new("master");
        repo.add_tagged_commit(&["nightly"], 0);
        let config = Config::default();
        let env = no_env();

        let err = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::GitTag)
            .unwrap_err();
        assert!(matches!(err, StampError::InvalidVersionFormat(text) if text == "nightly"));
    }

    #[test]
    fn test_release_branch_overrides_tags() {
        let mut repo = MockRepository::new("release/2.0.0");
        repo.add_tagged_commit(&["1.9.0"], 30);
        let config = Config::default();
        let env = no_env();

        let resolution = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::GitTag)
            .unwrap();
        assert_eq!(resolution.base, Version::new(2, 0, 0));
        assert_eq!(resolution.commits_since_source, 0);
    }

    #[test]
    fn test_release_branch_counts_from_matching_tag() {
        let mut repo = MockRepository::new("release-2.0.0");
        repo.add_tagged_commit(&["2.0.0"], 6);
        let config = Config::default();
        let env = no_env();

        let resolution = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::GitTag)
            .unwrap();
        assert_eq!(resolution.commits_since_source, 6);
    }

    #[test]
    fn test_descriptor_source_never_counts_commits() {
        let dir = tempfile::tempdir().unwrap();
        let gradle = dir.path().join("gradle.properties");
        std::fs::write(&gradle, "version=1.2.3\n").unwrap();

        let mut config = Config::default();
        config.sources.gradle_file = gradle;
        let mut repo = MockRepository::new("develop");
        repo.add_tagged_commit(&["1.0.0"], 40);
        let env = no_env();

        let resolution = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::Gradle)
            .unwrap();
        assert_eq!(resolution.base, Version::new(1, 2, 3));
        assert_eq!(resolution.commits_since_source, 0);
    }

    #[test]
    fn test_node_source_missing_file() {
        let mut config = Config::default();
        config.sources.node_file = "/nonexistent/package.json".into();
        let repo = MockRepository::default();
        let env = no_env();

        let err = VersionResolver::new(&config, &env, &repo)
            .resolve(VersionSource::Node)
            .unwrap_err();
        assert!(matches!(err, StampError::ReadFile { .. }));
    }
}
