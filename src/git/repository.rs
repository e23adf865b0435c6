use crate::error::{Result, StampError};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// libgit2-backed implementation of [super::Repository]
///
/// The repository is discovered on each query rather than on
/// construction, so a build that never needs git never requires a `.git`
/// directory.
pub struct Git2Repository {
    path: PathBuf,
}

impl Git2Repository {
    /// Query the repository containing `path` (or one of its parents)
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Git2Repository {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn discover(&self) -> Result<Git2Repo> {
        Ok(Git2Repo::discover(&self.path)?)
    }

    fn tag_commit(repo: &Git2Repo, tag_name: &str) -> Result<Oid> {
        let reference = repo.find_reference(&format!("refs/tags/{}", tag_name))?;
        Ok(reference.peel_to_commit()?.id())
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        let repo = self.discover()?;
        if repo.head_detached()? {
            return Ok("HEAD".to_string());
        }
        let head = repo.head()?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    fn latest_tags(&self) -> Result<Vec<String>> {
        let repo = self.discover()?;
        let names = repo.tag_names(None)?;

        let mut tagged: Vec<(i64, Oid, String)> = Vec::new();
        for name in names.iter().flatten() {
            // tags on trees or blobs are not versions of anything
            let Ok(oid) = Self::tag_commit(&repo, name) else {
                debug!(tag = name, "skipping tag that does not point at a commit");
                continue;
            };
            let time = repo.find_commit(oid)?.time().seconds();
            tagged.push((time, oid, name.to_string()));
        }

        let Some(&(_, newest, _)) = tagged.iter().max_by_key(|(time, oid, _)| (*time, *oid))
        else {
            return Ok(Vec::new());
        };

        let mut latest: Vec<String> = tagged
            .into_iter()
            .filter(|(_, oid, _)| *oid == newest)
            .map(|(_, _, name)| name)
            .collect();
        latest.sort();
        Ok(latest)
    }

    fn commits_since(&self, tag: &str) -> Result<u32> {
        let repo = self.discover()?;
        let since = Self::tag_commit(&repo, tag)?;

        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.hide(since)?;

        let mut count: u64 = 0;
        for oid in revwalk {
            oid?;
            count += 1;
        }

        u32::try_from(count).map_err(|_| StampError::unparseable(count.to_string()))
    }

    fn has_tag(&self, name: &str) -> Result<bool> {
        let repo = self.discover()?;
        let found = match repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Ok(false),
            Err(e) => Err(e.into()),
        };
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_open_outside_repository_fails_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repository::open(dir.path());
        // construction never fails; the first query does
        assert!(matches!(
            repo.current_branch(),
            Err(StampError::VersionControl(_))
        ));
    }

    #[test]
    fn test_has_tag_in_repository_without_tags() {
        let dir = tempfile::tempdir().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let repo = Git2Repository::open(dir.path());
        assert!(!repo.has_tag("1.0.0").unwrap());
    }
}
