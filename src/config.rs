use crate::error::{Result, StampError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name, looked up in the working directory
/// and in the user config directory.
pub const CONFIG_FILE_NAME: &str = "semver-stamp.toml";

/// Represents the complete configuration for semver-stamp.
///
/// Every section is optional; missing keys fall back to the conventions of
/// Gradle/npm projects built by Jenkins.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,
}

fn default_gradle_file() -> PathBuf {
    PathBuf::from("gradle.properties")
}

fn default_node_file() -> PathBuf {
    PathBuf::from("package.json")
}

/// Locations of the descriptor files read by the file-based sources.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourcesConfig {
    #[serde(default = "default_gradle_file")]
    pub gradle_file: PathBuf,

    #[serde(default = "default_node_file")]
    pub node_file: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            gradle_file: default_gradle_file(),
            node_file: default_node_file(),
        }
    }
}

fn default_trunk() -> Vec<String> {
    vec!["master".to_string(), "main".to_string()]
}

/// Branch classification settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    /// Branch name prefixes that build the released version
    #[serde(default = "default_trunk")]
    pub trunk: Vec<String>,
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            trunk: default_trunk(),
        }
    }
}

fn default_multibranch_var() -> String {
    "BRANCH_NAME".to_string()
}

fn default_pipeline_var() -> String {
    "GIT_BRANCH".to_string()
}

fn default_remote_prefix() -> String {
    "origin/".to_string()
}

/// Environment variables consulted for the branch name before asking git.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvironmentConfig {
    /// Set by multibranch pipelines, used verbatim
    #[serde(default = "default_multibranch_var")]
    pub multibranch_var: String,

    /// Set by plain pipelines, may carry the remote prefix
    #[serde(default = "default_pipeline_var")]
    pub pipeline_var: String,

    #[serde(default = "default_remote_prefix")]
    pub remote_prefix: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            multibranch_var: default_multibranch_var(),
            pipeline_var: default_pipeline_var(),
            remote_prefix: default_remote_prefix(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-stamp.toml` in current directory
/// 3. `semver-stamp.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
        path
    } else {
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|source| StampError::ReadFile {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&config_str)
        .map_err(|e| StampError::config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sources.gradle_file, PathBuf::from("gradle.properties"));
        assert_eq!(config.sources.node_file, PathBuf::from("package.json"));
        assert_eq!(config.branches.trunk, vec!["master", "main"]);
        assert_eq!(config.environment.multibranch_var, "BRANCH_NAME");
        assert_eq!(config.environment.pipeline_var, "GIT_BRANCH");
        assert_eq!(config.environment.remote_prefix, "origin/");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[branches]
trunk = ["trunk"]
"#,
        )
        .unwrap();
        assert_eq!(config.branches.trunk, vec!["trunk"]);
        assert_eq!(config.sources, SourcesConfig::default());
        assert_eq!(config.environment, EnvironmentConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
