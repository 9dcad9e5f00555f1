mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tutor",
    about = "Arm onboarding tutorial — derive step progress from application state",
    version,
    propagate_version = true
)]
struct Cli {
    /// Tutorial root (default: auto-detect from .tutor/ or .git/)
    #[arg(long, global = true, env = "TUTOR_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tutorial step with its completion marker
    Steps,

    /// Show the current (first incomplete) step
    Current,

    /// Evaluate a state snapshot and record any newly completed steps
    Check {
        /// Snapshot JSON file: { "arm_pose": .., "action_list": .. }
        snapshot: PathBuf,
    },

    /// Clear all recorded progress and restart the tutorial
    Reset,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Steps => cmd::steps::run(&root, cli.json),
        Commands::Current => cmd::current::run(&root, cli.json),
        Commands::Check { snapshot } => cmd::check::run(&root, &snapshot, cli.json),
        Commands::Reset => cmd::reset::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
