//! sdkbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dialoguer::Confirm;

use sdkbump::buildozer::{OVERRIDES_FILE_NAME, SystemBuildozer};
use sdkbump::bump::{BumpConfig, REMAINING_MANUAL_STEPS, StepOutcome, run_bump};
use sdkbump::plan::{ProductVersion, VersionBumpPlan};

/// Introduce a new platform version into the build configuration corpus.
#[derive(Parser, Debug)]
#[command(name = "sdkbump")]
#[command(about = "Bump IDE platform SDK versions across Bazel build files with buildozer")]
#[command(version)]
struct Cli {
    /// Version already present in the corpus (e.g. 2025.1)
    #[arg(long)]
    old: ProductVersion,

    /// Version to introduce (e.g. 2025.2)
    #[arg(long)]
    new: ProductVersion,

    /// Override the derived old API level (e.g. 251)
    #[arg(long)]
    old_api: Option<String>,

    /// Override the derived new API level (e.g. 252)
    #[arg(long)]
    new_api: Option<String>,

    /// Override the derived repository label (e.g. 2025_2)
    #[arg(long)]
    new_label: Option<String>,

    /// Workspace root containing the build configuration corpus
    #[arg(long, default_value = ".")]
    workspace: PathBuf,

    /// Print the operation sequence without executing anything
    #[arg(long)]
    dry_run: bool,

    /// Skip preflight checks
    #[arg(long)]
    force: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Verbose logging (external commands are logged at debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Step 1: Build the plan, deriving the identifier strings from the
    // version pair unless explicitly overridden.
    let mut plan = VersionBumpPlan::derive(&cli.old, &cli.new);
    if let Some(api) = cli.old_api {
        plan.old_api_level = api;
    }
    if let Some(api) = cli.new_api {
        plan.new_api_level = api;
    }
    if let Some(label) = cli.new_label {
        plan.new_label = label;
    }

    println!(
        "Bump: {} -> {} (api {} -> {}, label {})",
        plan.old_version, plan.new_version, plan.old_api_level, plan.new_api_level, plan.new_label
    );

    // Step 2: Confirm. The migration is one-shot and not idempotent, so the
    // operator owns the decision unless they pre-approved it with --yes.
    if !cli.dry_run && !cli.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Apply the {} -> {} migration to {}?",
                plan.old_version,
                plan.new_version,
                cli.workspace.display()
            ))
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            bail!("Aborted by user");
        }
    }

    // Step 3: Run the pipeline.
    let editor = SystemBuildozer::new(&cli.workspace, OVERRIDES_FILE_NAME);
    let config = BumpConfig {
        workspace: cli.workspace.clone(),
        dry_run: cli.dry_run,
        force: cli.force,
    };

    let report = run_bump(&config, &plan, &editor).context("Version bump failed")?;

    if let Some(failed) = report.failure() {
        let detail = match &failed.outcome {
            StepOutcome::Failed(e) => e.to_string(),
            _ => String::new(),
        };
        bail!(
            "Step '{}' failed after {} applied step(s): {}\n\
             The corpus is left partially migrated; fix it up before retrying.",
            failed.description,
            report.applied_count(),
            detail
        );
    }

    if cli.dry_run {
        println!(
            "\nDry run: {} operation(s), nothing executed.",
            report.steps.len()
        );
        return Ok(());
    }

    println!("\n✓ Applied {} operation(s).", report.applied_count());
    println!("Not covered by this run, migrate by hand:");
    for step in REMAINING_MANUAL_STEPS {
        println!("  - {}", step);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "sdkbump=debug"
    } else {
        "sdkbump=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
