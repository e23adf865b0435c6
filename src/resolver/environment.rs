//! Branch name lookup through CI environment variables

use crate::config::EnvironmentConfig;
use crate::error::Result;
use crate::git::Repository;
use std::collections::HashMap;
use tracing::debug;

/// Source of environment variables
pub trait Environment {
    /// Value of `key`, `None` when unset or empty
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty()).cloned()
    }
}

/// Resolve the branch being built
///
/// Tried in order:
/// 1. the multibranch pipeline variable, verbatim
/// 2. the generic pipeline variable, with the remote prefix stripped
/// 3. the checked out reference reported by git
pub fn resolve_branch_name<E, R>(config: &EnvironmentConfig, env: &E, repo: &R) -> Result<String>
where
    E: Environment + ?Sized,
    R: Repository + ?Sized,
{
    if let Some(branch) = env.var(&config.multibranch_var) {
        debug!(var = %config.multibranch_var, %branch, "branch from environment");
        return Ok(branch);
    }

    if let Some(value) = env.var(&config.pipeline_var) {
        let branch = value
            .strip_prefix(config.remote_prefix.as_str())
            .unwrap_or(value.as_str())
            .to_string();
        debug!(var = %config.pipeline_var, %branch, "branch from environment");
        return Ok(branch);
    }

    let branch = repo.current_branch()?;
    debug!(%branch, "branch from repository HEAD");
    Ok(branch)
}
