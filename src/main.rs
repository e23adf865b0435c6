use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use semver_stamp::cli::{run_stamp, StampArgs, DEFAULT_BUILD_ID};
use semver_stamp::config;
use semver_stamp::git::Git2Repository;
use semver_stamp::resolver::{ProcessEnvironment, VersionSource};
use semver_stamp::ui;

#[derive(clap::Parser)]
#[command(
    name = "semver-stamp",
    version,
    about = "Derive a branch-aware semantic version for a CI build"
)]
struct Args {
    #[arg(long, value_enum, default_value_t = VersionSource::Gradle, help = "Where to read the base version from")]
    source: VersionSource,

    #[arg(long, default_value = DEFAULT_BUILD_ID, help = "Build identifier appended to AssemblySemVer")]
    build_id: String,

    #[arg(
        long,
        visible_alias = "showvariable",
        help = "Print only this field (e.g. SemVer) instead of the whole record"
    )]
    show_field: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log resolution steps to stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;

    let stamp_args = StampArgs {
        source: args.source,
        build_id: args.build_id,
        show_field: args.show_field,
    };
    let repo = Git2Repository::open(".");

    let output = run_stamp(&stamp_args, &config, &ProcessEnvironment, &repo)?;
    println!("{}", output);
    Ok(())
}

/// Logs go to stderr so stdout carries nothing but the version output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("semver_stamp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("semver_stamp=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
