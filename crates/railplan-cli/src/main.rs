use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use railplan_lib::load_timetable;

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rail timetable routing utilities")]
struct Cli {
    /// Timetable file with one `origin,destination,HH:MM` connection per line.
    #[arg(long)]
    timetable: PathBuf,

    /// Output format for resolved routes.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the fastest route between two stations.
    Route {
        /// Origin station name.
        #[arg(long)]
        from: String,
        /// Destination station name.
        #[arg(long)]
        to: String,
        /// Write a Graphviz document for the resolved route.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Interactively plan trips, one origin/destination pair at a time.
    Plan {
        /// Write a Graphviz document for the last resolved route on exit.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Write the whole network as a Graphviz document.
    Export {
        /// Output path for the document.
        #[arg(long)]
        out: PathBuf,
        /// Bold the fastest route starting at this station.
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Bold the fastest route ending at this station.
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// Report station and connection counts.
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let timetable = load_timetable(&cli.timetable)
        .with_context(|| format!("failed to load timetable from {}", cli.timetable.display()))?;

    match cli.command {
        Command::Route { from, to, export } => {
            commands::route::run(&timetable, cli.format, &from, &to, export.as_deref())
        }
        Command::Plan { export } => commands::plan::run(&timetable, cli.format, export.as_deref()),
        Command::Export { out, from, to } => {
            commands::export::run(&timetable, &out, from.as_deref(), to.as_deref())
        }
        Command::Stats => commands::stats::run(&timetable),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
