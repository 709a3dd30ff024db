use std::path::PathBuf;

use anyhow::{Context, Result};
use brickvision_core::pipeline::config::AnalysisConfig;
use brickvision_core::pipeline::run_analysis;
use clap::Args;
use tracing::info;

use crate::summary::{
    print_contour_count, print_image_result, print_region_table, print_segmentation_summary,
};

#[derive(Args)]
pub struct RunArgs {
    /// TOML analysis config
    pub config: PathBuf,

    /// Override the input image from the config
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = AnalysisConfig::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    if let Some(ref input) = args.input {
        config.input = input.clone();
    }
    info!(config = %args.config.display(), "Loaded analysis config");

    print_segmentation_summary(&config.segmentation);

    let analysis = run_analysis(&config)
        .with_context(|| format!("Failed to analyse {}", config.input.display()))?;

    print_image_result(&config.input, &analysis.stats);
    print_contour_count(&analysis.contours);
    print_region_table(&analysis.stats);

    Ok(())
}
