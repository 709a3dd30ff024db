use image::GrayImage;
use tracing::info;

use crate::annotate::annotate;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::io::image_io::{fit_working_size, load_gray, save_label_png, save_png, save_rgb_png};
use crate::regions::{compute_stats, compute_stats_parallel, RegionStatsSet};
use crate::segmentation::{
    count_contours, detect_edges, remove_background, segment, ContourCount, Labeling,
    SegmentationConfig,
};

use super::config::AnalysisConfig;
use super::report::{write_report, StatsReport};

/// Everything produced for one image.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The grayscale image that was segmented (after resizing).
    pub image: GrayImage,
    pub mask: GrayImage,
    pub labeling: Labeling,
    pub stats: RegionStatsSet,
    /// Borders traced in `mask`, outer and hole.
    pub contours: ContourCount,
    /// Edge mask, when the edge stage ran.
    pub edges: Option<GrayImage>,
}

/// Segment an in-memory image and aggregate its regions.
///
/// Pipeline: optional background subtraction -> blur -> threshold ->
/// connected components -> region statistics, plus a contour count of the
/// mask. The edge stage is not run here.
pub fn analyze(
    image: &GrayImage,
    background: Option<&GrayImage>,
    config: &SegmentationConfig,
) -> Result<Analysis> {
    let source = match background {
        Some(bg) => remove_background(image, bg)?,
        None => image.clone(),
    };

    let segmentation = segment(&source, config)?;
    let labeling = segmentation.labeling;

    let pixels = (image.width() as usize) * (image.height() as usize);
    let stats = if pixels >= PARALLEL_PIXEL_THRESHOLD {
        compute_stats_parallel(&labeling.labels, labeling.region_count)?
    } else {
        compute_stats(&labeling.labels, labeling.region_count)?
    };

    let contours = count_contours(&segmentation.mask);

    Ok(Analysis {
        image: image.clone(),
        mask: segmentation.mask,
        labeling,
        stats,
        contours,
        edges: None,
    })
}

/// Load the configured input, analyse it and write every requested output.
pub fn run_analysis(config: &AnalysisConfig) -> Result<Analysis> {
    let mut image = load_gray(&config.input)?;
    info!(
        width = image.width(),
        height = image.height(),
        input = %config.input.display(),
        "Loaded image"
    );

    if config.fit_working_size {
        image = fit_working_size(&image);
    }

    let background = match &config.background {
        Some(path) => {
            let mut bg = load_gray(path)?;
            if config.fit_working_size {
                bg = fit_working_size(&bg);
            }
            Some(bg)
        }
        None => None,
    };

    let mut analysis = analyze(&image, background.as_ref(), &config.segmentation)?;
    info!(
        objects = analysis.stats.object_count(),
        contours = analysis.contours.total(),
        threshold = config.segmentation.threshold,
        mode = %config.segmentation.mode,
        "Segmentation complete"
    );

    if let Some(edge_config) = config.edge_config() {
        let edges = detect_edges(&analysis.image, &edge_config)?;
        info!(
            canny_low = edge_config.canny_low,
            canny_high = edge_config.canny_high,
            "Edge mask complete"
        );
        analysis.edges = Some(edges);
    }

    if let Some(path) = &config.mask_output {
        save_png(&analysis.mask, path)?;
        info!(path = %path.display(), "Saved mask");
    }
    if let Some(path) = &config.labels_output {
        save_label_png(&analysis.labeling.labels, path)?;
        info!(path = %path.display(), "Saved label image");
    }
    if let (Some(path), Some(edges)) = (&config.edges_output, &analysis.edges) {
        save_png(edges, path)?;
        info!(path = %path.display(), "Saved edge mask");
    }
    if let Some(path) = &config.annotated_output {
        let annotated = annotate(&analysis.image, &analysis.stats, &config.annotation);
        save_rgb_png(&annotated, path)?;
        info!(path = %path.display(), "Saved annotated image");
    }
    if let Some(path) = &config.report_output {
        let report =
            StatsReport::new(&config.input, &analysis.stats).with_contours(analysis.contours);
        write_report(&report, path)?;
        info!(path = %path.display(), "Saved report");
    }

    Ok(analysis)
}
