use std::path::PathBuf;

use anyhow::{Context, Result};
use brickvision_core::pipeline::config::AnalysisConfig;
use brickvision_core::pipeline::{run_analysis, write_report, Analysis, StatsReport};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::summary::{
    print_contour_count, print_image_result, print_region_table, print_segmentation_summary,
};

use super::SegmentationArgs;

#[derive(Args)]
pub struct CountArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub segmentation: SegmentationArgs,

    /// Image of the empty scene, subtracted before thresholding
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Print the per-region table for each image
    #[arg(long)]
    pub regions: bool,

    /// Write a TOML report next to each input (<name>.regions.toml)
    #[arg(long)]
    pub report: bool,

    /// Save a Canny edge mask next to each input (<name>.edges.png)
    #[arg(long)]
    pub edges: bool,
}

pub fn run(args: &CountArgs) -> Result<()> {
    let seg_config = args.segmentation.to_config();
    print_segmentation_summary(&seg_config);

    let configs: Vec<AnalysisConfig> = args
        .files
        .iter()
        .map(|file| {
            let mut cfg = AnalysisConfig::new(file);
            cfg.background = args.background.clone();
            cfg.fit_working_size = !args.segmentation.no_resize;
            cfg.segmentation = seg_config.clone();
            if args.edges {
                cfg.edges_output = Some(file.with_extension("edges.png"));
            }
            cfg
        })
        .collect();

    let results: Vec<Result<Analysis>> = if configs.len() > 1 {
        let pb = ProgressBar::new(configs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message("Analysing images");

        let results: Vec<Result<Analysis>> = configs
            .par_iter()
            .map(|cfg| {
                let r = analyse_one(cfg);
                pb.inc(1);
                r
            })
            .collect();
        pb.finish_and_clear();
        results
    } else {
        configs.iter().map(analyse_one).collect()
    };

    let mut total_objects = 0;
    for (cfg, result) in configs.iter().zip(results) {
        let analysis = result?;
        print_image_result(&cfg.input, &analysis.stats);
        print_contour_count(&analysis.contours);
        if let Some(ref path) = cfg.edges_output {
            println!("  Edges saved to {}", path.display());
        }
        if args.regions {
            print_region_table(&analysis.stats);
        }
        if args.report {
            let path = cfg.input.with_extension("regions.toml");
            let report =
                StatsReport::new(&cfg.input, &analysis.stats).with_contours(analysis.contours);
            write_report(&report, &path)
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            println!("  Report saved to {}", path.display());
        }
        total_objects += analysis.stats.object_count();
    }

    if configs.len() > 1 {
        println!("\nTotal objects: {}", total_objects);
    }

    Ok(())
}

fn analyse_one(cfg: &AnalysisConfig) -> Result<Analysis> {
    run_analysis(cfg).with_context(|| format!("Failed to analyse {}", cfg.input.display()))
}
