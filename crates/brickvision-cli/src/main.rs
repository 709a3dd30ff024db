mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brickvision", about = "Count dice and bricks in images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment images and report the objects found
    Count(commands::count::CountArgs),
    /// Aggregate region statistics of a stored label image
    Labels(commands::labels::LabelsArgs),
    /// Draw centroid markers over an image
    Annotate(commands::annotate::AnnotateArgs),
    /// Run an analysis described by a TOML config file
    Run(commands::run::RunArgs),
    /// Print or save a default analysis config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Count(args) => commands::count::run(args),
        Commands::Labels(args) => commands::labels::run(args),
        Commands::Annotate(args) => commands::annotate::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
