use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use release_hygiene::checks::{load_rules, run_checks};
use release_hygiene::cli::{run_bump, run_validate, Backend, BumpArgs, ValidateArgs};
use release_hygiene::config::{self, Config};
use release_hygiene::logo;
use release_hygiene::sanitize::scan_files;
use release_hygiene::ui;
use release_hygiene::HygieneError;

#[derive(Parser)]
#[command(
    name = "release-hygiene",
    version,
    about = "Version bumping, release validation and repository hygiene checks"
)]
struct Args {
    #[arg(long, global = true, default_value = ".", help = "Repository root")]
    repo_root: PathBuf,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump the version in the version file
    Bump {
        #[arg(help = "major, minor or patch")]
        kind: String,

        #[arg(long, help = "Show the new version without writing it")]
        dry_run: bool,
    },

    /// Check the version file is ahead of the latest release tag
    Validate {
        #[arg(long, value_enum, default_value_t = Backend::Command)]
        backend: Backend,
    },

    /// Generate the generic placeholder logo
    Logo {
        #[arg(help = "Output PNG path")]
        output: Option<PathBuf>,

        #[arg(long, help = "Width and height in pixels")]
        size: Option<u32>,
    },

    /// Scan test sources for personal data
    Scan {
        #[arg(help = "Files to scan, relative to the repository root")]
        files: Vec<PathBuf>,
    },

    /// Run the documentation and template checks
    Check {
        #[arg(long, help = "Only run rules whose id starts with this prefix")]
        only: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            match e.downcast_ref::<HygieneError>() {
                Some(err) if err.is_expected() => ui::display_error(&err.to_string()),
                _ => ui::display_unexpected_error(&format!("{:#}", e)),
            }
            std::process::exit(1);
        }
    }
}

/// Runs the selected subcommand; `Ok(false)` means it completed but did not pass.
fn run(args: &Args) -> Result<bool> {
    let repo_root = args.repo_root.as_path();
    let config = config::load_config(repo_root, args.config.as_deref())?;
    log::debug!("repository root {}", repo_root.display());

    match &args.command {
        Command::Bump { kind, dry_run } => {
            let bump_args = BumpArgs::from_config(repo_root, &config, kind.as_str(), *dry_run);
            let outcome = run_bump(&bump_args)?;
            ui::display_bump(&outcome);
            Ok(true)
        }
        Command::Validate { backend } => {
            let validate_args = ValidateArgs::from_config(repo_root, &config);
            let source = backend.tag_source(repo_root);
            let outcome = run_validate(&validate_args, source.as_ref())?;
            ui::display_validation(&outcome);
            Ok(outcome.passed())
        }
        Command::Logo { output, size } => {
            generate_logo(repo_root, &config, output.as_deref(), *size)?;
            Ok(true)
        }
        Command::Scan { files } => {
            let files = if files.is_empty() {
                config.scan.files.clone()
            } else {
                files.clone()
            };
            let findings = scan_files(repo_root, &files);
            ui::display_findings(&findings);
            Ok(findings.is_empty())
        }
        Command::Check { only } => {
            let mut rules = load_rules(repo_root, &config.checks)?;
            if let Some(prefix) = only {
                rules.retain(|rule| rule.id.starts_with(prefix.as_str()));
                if rules.is_empty() {
                    ui::display_status(&format!("No rules match '{}'", prefix));
                }
            }
            let report = run_checks(repo_root, &rules);
            ui::display_check_report(&report);
            Ok(report.passed())
        }
    }
}

fn generate_logo(
    repo_root: &Path,
    config: &Config,
    output: Option<&Path>,
    size: Option<u32>,
) -> Result<()> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => repo_root.join(&config.logo.path),
    };
    let size = size.unwrap_or(config.logo.size);

    logo::generate_with_fonts(&path, size, &config.logo.font_candidates)
        .with_context(|| format!("Failed to generate logo at {}", path.display()))?;
    let summary = logo::inspect_logo(&path)
        .with_context(|| format!("Failed to read back {}", path.display()))?;

    ui::display_logo_summary(&path.display().to_string(), &summary);
    Ok(())
}
