use crate::config::BranchesConfig;
use crate::domain::{BranchContext, Channel, PreRelease, Version, VersionRecord};
use crate::error::Result;
use crate::resolver::Resolution;
use tracing::{debug, warn};

/// Derives the final version record from a resolved base version
///
/// Pure: no filesystem or git access happens here.
pub struct VersionEngine {
    config: BranchesConfig,
}

impl VersionEngine {
    /// Create a new version engine
    pub fn new(config: BranchesConfig) -> Self {
        VersionEngine { config }
    }

    /// Derive the record for a resolver output
    pub fn derive_from(
        &self,
        resolution: &Resolution,
        build_meta_data: &str,
    ) -> Result<VersionRecord> {
        self.derive(
            resolution.base,
            &resolution.branch,
            resolution.commits_since_source,
            build_meta_data,
        )
    }

    /// Classify the branch, adjust the base version and assemble the record
    ///
    /// Fails with `UnparseableInteger` when the bumped component would
    /// overflow.
    pub fn derive(
        &self,
        base: Version,
        branch_name: &str,
        commits_since_source: u32,
        build_meta_data: &str,
    ) -> Result<VersionRecord> {
        let branch = BranchContext::with_trunk(branch_name, &self.config.trunk);
        debug!(branch = %branch.name, channel = ?branch.channel, "classified branch");

        let version = match branch.channel {
            Channel::ReleaseCandidate { hotfix: true } => base.bump_patch()?,
            Channel::Develop | Channel::Feature(_) | Channel::Other(_) => base.bump_minor()?,
            Channel::Trunk | Channel::ReleaseCandidate { hotfix: false } => base,
        };

        let pre_release = PreRelease::for_channel(&branch.channel, commits_since_source);
        let pre_release_label = pre_release
            .as_ref()
            .map(|pr| pr.identifier.to_string())
            .unwrap_or_default();
        let pre_release_tag = format!("{}.{}", pre_release_label, commits_since_source);

        let (sem_ver, pre_release_tag_with_dash) = match &pre_release {
            Some(pr) => (format!("{}{}", version, pr.with_dash()), pr.with_dash()),
            None => (version.to_string(), String::new()),
        };
        let assembly_sem_ver = format!("{}.{}", sem_ver, build_meta_data);

        let record = VersionRecord {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            branch_name: branch.name,
            commits_since_source,
            commits_since_source_padded: format!("{:04}", commits_since_source),
            pre_release_label,
            pre_release_tag,
            pre_release_tag_with_dash,
            major_minor_patch: version.to_string(),
            sem_ver,
            build_meta_data: build_meta_data.to_string(),
            assembly_sem_ver,
        };

        if !record.is_strict_semver() {
            warn!(sem_ver = %record.sem_ver, "derived version is not valid SemVer 2.0");
        }

        Ok(record)
    }
}

impl Default for VersionEngine {
    fn default() -> Self {
        Self::new(BranchesConfig::default())
    }
}
