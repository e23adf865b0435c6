use crate::error::Result;
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Tags are recorded in creation order; the ones added last are reported
/// as the latest. Commit distances are set per tag.
pub struct MockRepository {
    branch: String,
    tags: Vec<Vec<String>>,
    distances: HashMap<String, u32>,
}

impl MockRepository {
    /// Create a new mock repository with `branch` checked out and no tags
    pub fn new(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: branch.into(),
            tags: Vec::new(),
            distances: HashMap::new(),
        }
    }

    /// Tag a new commit with one or more names, `commits` behind HEAD
    pub fn add_tagged_commit(&mut self, names: &[&str], commits: u32) {
        for name in names {
            self.distances.insert(name.to_string(), commits);
        }
        self.tags
            .push(names.iter().map(|name| name.to_string()).collect());
    }

    /// Switch the checked out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new("master")
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn latest_tags(&self) -> Result<Vec<String>> {
        let mut latest = self.tags.last().cloned().unwrap_or_default();
        latest.sort();
        Ok(latest)
    }

    fn commits_since(&self, tag: &str) -> Result<u32> {
        self.distances.get(tag).copied().ok_or_else(|| {
            git2::Error::from_str(&format!("revspec '{}' not found", tag)).into()
        })
    }

    fn has_tag(&self, name: &str) -> Result<bool> {
        Ok(self.distances.contains_key(name))
    }
}
