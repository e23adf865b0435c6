//! Main workflow orchestration logic
//!
//! Keeps `main.rs` down to argument parsing and process exit handling:
//! resolve the version source, derive the record, render the output.

use crate::config::Config;
use crate::domain::VersionRecord;
use crate::engine::VersionEngine;
use crate::error::Result;
use crate::git::Repository;
use crate::resolver::{Environment, VersionResolver, VersionSource};
use crate::ui;

/// Build id folded into `AssemblySemVer` when none is given
pub const DEFAULT_BUILD_ID: &str = "0";

/// Arguments for the stamp workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampArgs {
    pub source: VersionSource,

    /// Opaque build identifier appended to `AssemblySemVer`
    pub build_id: String,

    /// Print only this field instead of the whole record
    pub show_field: Option<String>,
}

impl Default for StampArgs {
    fn default() -> Self {
        StampArgs {
            source: VersionSource::default(),
            build_id: DEFAULT_BUILD_ID.to_string(),
            show_field: None,
        }
    }
}

/// Resolve and derive the version record
pub fn compute_record<E, R>(
    args: &StampArgs,
    config: &Config,
    env: &E,
    repo: &R,
) -> Result<VersionRecord>
where
    E: Environment + ?Sized,
    R: Repository + ?Sized,
{
    let resolution = VersionResolver::new(config, env, repo).resolve(args.source)?;
    let engine = VersionEngine::new(config.branches.clone());
    engine.derive_from(&resolution, &args.build_id)
}

/// Full stamp workflow, returning the text to print
///
/// The output is not newline-terminated; the caller prints it with one.
pub fn run_stamp<E, R>(args: &StampArgs, config: &Config, env: &E, repo: &R) -> Result<String>
where
    E: Environment + ?Sized,
    R: Repository + ?Sized,
{
    let record = compute_record(args, config, env, repo)?;
    ui::render(&record, args.show_field.as_deref())
}
