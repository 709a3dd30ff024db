use std::path::PathBuf;

use anyhow::{Context, Result};
use brickvision_core::annotate::AnnotationConfig;
use brickvision_core::consts::DEFAULT_MARKER_SIZE;
use brickvision_core::pipeline::config::AnalysisConfig;
use brickvision_core::pipeline::run_analysis;
use clap::Args;

use crate::summary::print_image_result;

use super::SegmentationArgs;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub segmentation: SegmentationArgs,

    /// Image of the empty scene, subtracted before thresholding
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Also save the binary mask
    #[arg(long)]
    pub mask: Option<PathBuf>,

    /// Also save the label image (16-bit PNG)
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Also save the Canny edge mask
    #[arg(long)]
    pub edges: Option<PathBuf>,

    /// Marker size in pixels
    #[arg(long, default_value_t = DEFAULT_MARKER_SIZE)]
    pub marker_size: u32,

    /// Draw a cross on each centroid
    #[arg(long)]
    pub cross: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "annotated.png")]
    pub output: PathBuf,
}

pub fn run(args: &AnnotateArgs) -> Result<()> {
    let mut config = AnalysisConfig::new(&args.file);
    config.background = args.background.clone();
    config.fit_working_size = !args.segmentation.no_resize;
    config.segmentation = args.segmentation.to_config();
    config.annotation = AnnotationConfig {
        marker_size: args.marker_size,
        draw_cross: args.cross,
        include_background: false,
    };
    config.annotated_output = Some(args.output.clone());
    config.mask_output = args.mask.clone();
    config.labels_output = args.labels.clone();
    config.edges_output = args.edges.clone();

    let analysis = run_analysis(&config)
        .with_context(|| format!("Failed to annotate {}", args.file.display()))?;

    print_image_result(&args.file, &analysis.stats);
    println!("Saved to {}", args.output.display());
    if let Some(ref mask) = args.mask {
        println!("Mask saved to {}", mask.display());
    }
    if let Some(ref labels) = args.labels {
        println!("Labels saved to {}", labels.display());
    }
    if let Some(ref edges) = args.edges {
        println!("Edges saved to {}", edges.display());
    }

    Ok(())
}
