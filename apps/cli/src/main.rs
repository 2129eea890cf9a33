mod commands;
mod discover;
mod error;
mod output;
mod runtime;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::settings::ThresholdArgs;

#[derive(Parser)]
#[command(
    name = "srt-chunk",
    about = "Regroup subtitle files into readable transcript chunks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    thresholds: ThresholdArgs,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every .srt under ROOT into a .txt under the matching txt/ tree
    Convert {
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Run the pipeline and report, but write nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the parsed captions of one file as JSON
    Parse { file: PathBuf },
    /// Print chunk statistics for one file as JSON
    Stats { file: PathBuf },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Convert { root, dry_run } => commands::convert::run(commands::convert::Args {
            root,
            dry_run,
            thresholds: cli.thresholds,
        }),
        Commands::Parse { file } => commands::parse::run(&file, &mut stdout),
        Commands::Stats { file } => commands::stats::run(&file, &cli.thresholds, &mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "failed");
            ExitCode::FAILURE
        }
    }
}
