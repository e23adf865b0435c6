/// Release channel a branch builds for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    /// master/main: the already released version
    Trunk,
    /// release/* or hotfix/*
    ReleaseCandidate { hotfix: bool },
    /// develop*
    Develop,
    /// feature/<slug>, carrying the slug
    Feature(String),
    /// Anything else, carrying the branch name verbatim
    Other(String),
}

const FEATURE_PREFIX: &str = "feature/";

/// Represents a git branch with its resolved channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub channel: Channel,
}

impl BranchContext {
    /// Classify a branch, treating `master` and `main` as trunk
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_trunk(name, &["master", "main"])
    }

    /// Classify a branch against a custom list of trunk names
    ///
    /// Rules are tried in order and the first match wins: trunk, release or
    /// hotfix, develop, feature, other.
    pub fn with_trunk<S: AsRef<str>>(name: impl Into<String>, trunk: &[S]) -> Self {
        let name = name.into();
        let channel = classify(&name, trunk);
        BranchContext { name, channel }
    }

    pub fn is_trunk(&self) -> bool {
        self.channel == Channel::Trunk
    }

    pub fn is_hotfix(&self) -> bool {
        self.channel == Channel::ReleaseCandidate { hotfix: true }
    }
}

/// `master` matches as a prefix; other trunk names match exactly or as
/// the first path segment (`main`, `main/x`, but not `maintenance`).
fn is_trunk_name(name: &str, trunk: &str) -> bool {
    if trunk == "master" {
        return name.starts_with(trunk);
    }
    match name.strip_prefix(trunk) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn classify<S: AsRef<str>>(name: &str, trunk: &[S]) -> Channel {
    if trunk.iter().any(|t| is_trunk_name(name, t.as_ref())) {
        Channel::Trunk
    } else if name.starts_with("hotfix") {
        Channel::ReleaseCandidate { hotfix: true }
    } else if name.starts_with("release") {
        Channel::ReleaseCandidate { hotfix: false }
    } else if name.starts_with("develop") {
        Channel::Develop
    } else if let Some(slug) = name.strip_prefix(FEATURE_PREFIX) {
        Channel::Feature(slug.to_string())
    } else {
        Channel::Other(name.to_string())
    }
}
