use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use git_next_tag::config::{self, ConfigOverrides};
use git_next_tag::git::Git2TagSupplier;
use git_next_tag::output::{self, OutputFormat};
use git_next_tag::{resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-next-tag",
    about = "Compute the next release tag from the latest git tag",
    version
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Path inside the git repository"
    )]
    repo: PathBuf,

    #[arg(long, help = "Tag prefix [default: v]")]
    prefix: Option<String>,

    #[arg(long, help = "Versioning scheme: semver or single-number [default: semver]")]
    versioning: Option<String>,

    #[arg(long, help = "Use this version verbatim instead of computing one")]
    force: Option<String>,

    #[arg(long, help = "Pre-release identifier, e.g. rc or beta")]
    pre_release_suffix: Option<String>,

    #[arg(
        short,
        long,
        help = "Increment level: major, minor, patch, premajor, preminor, prepatch or prerelease [default: patch]"
    )]
    level: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        ui::display_error(&err.to_string());
        for (i, cause) in err.chain().skip(1).enumerate() {
            ui::display_cause(i.saturating_add(1), &cause.to_string());
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let overrides = ConfigOverrides {
        prefix: args.prefix,
        versioning: args.versioning,
        force: args.force,
        pre_release_suffix: args.pre_release_suffix,
        level: args.level,
    };
    let config = config::load_config(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(overrides);
    log::debug!("effective configuration: {:?}", config);

    let supplier = Git2TagSupplier::open(&args.repo).with_context(|| {
        format!("failed to open git repository at {}", args.repo.display())
    })?;

    let resolution = resolver::resolve(&config, &supplier)?;

    let github_output = std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from);
    output::emit(
        &resolution,
        args.format,
        &mut io::stdout().lock(),
        github_output.as_deref(),
    )?;

    Ok(())
}
