use std::path::PathBuf;

use anyhow::{Context, Result};
use brickvision_core::consts::PARALLEL_PIXEL_THRESHOLD;
use brickvision_core::io::image_io::load_label_image;
use brickvision_core::regions::{compute_stats, compute_stats_parallel};
use clap::Args;

use crate::summary::{print_image_result, print_region_table};

#[derive(Args)]
pub struct LabelsArgs {
    /// Grayscale image whose pixel values are region ids (8 or 16 bit)
    pub file: PathBuf,

    /// Number of regions including the background (default: max label + 1)
    #[arg(long)]
    pub regions: Option<usize>,
}

pub fn run(args: &LabelsArgs) -> Result<()> {
    let labels = load_label_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let region_count = args
        .regions
        .unwrap_or_else(|| labels.implied_region_count());

    println!(
        "Loaded {}x{} label image, {} regions",
        labels.width(),
        labels.height(),
        region_count
    );

    let stats = if labels.width() * labels.height() >= PARALLEL_PIXEL_THRESHOLD {
        compute_stats_parallel(&labels, region_count)?
    } else {
        compute_stats(&labels, region_count)?
    };

    print_image_result(&args.file, &stats);
    print_region_table(&stats);

    Ok(())
}
