use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tagger::config;
use tagger::git::Git2Repository;
use tagger::release::{ReleaseOptions, ReleaseOutcome, ReleasePipeline};
use tagger::ui;

#[derive(clap::Parser)]
#[command(
    name = "tagger",
    version,
    about = "Bump versions and generate changelogs from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Project root holding the manifest and changelog")]
    root: PathBuf,

    #[arg(
        long,
        value_name = "BOOL",
        help = "Update every manifest below the root (true) or only the root one (false)"
    )]
    multi: Option<bool>,

    #[arg(long, help = "Preview the release without changing files or git state")]
    dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    setup_logging(args.debug);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("tagger=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!("Debug logging enabled");
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref(), &args.root)
        .context("Error loading config")?;
    if let Some(multi) = args.multi {
        config.release.multi_package = multi;
    }

    let repo = Git2Repository::open(&args.root).context("Git repository error")?;
    let pipeline = ReleasePipeline::new(&repo, &config);

    let options = ReleaseOptions {
        root: args.root,
        date: Utc::now().date_naive(),
        dry_run: args.dry_run,
    };

    let plan = match pipeline.plan(&options.root, options.date)? {
        ReleaseOutcome::NothingToRelease { commit_count, .. } => {
            ui::display_nothing_to_release(commit_count);
            return Ok(());
        }
        ReleaseOutcome::Planned(plan) | ReleaseOutcome::Released(plan) => plan,
    };

    for warning in &plan.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_commit_analysis(&plan.subjects, plan.last_tag.as_deref());
    ui::display_release_plan(&plan);

    if options.dry_run {
        ui::display_changelog_preview(&plan);
        ui::display_status("Dry run: no files or git state were changed");
        return Ok(());
    }

    pipeline.apply(&plan).context("Release failed")?;
    ui::display_push_instruction(&plan.tag);

    Ok(())
}
