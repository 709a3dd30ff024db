use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::median_filter;
use imageproc::morphology::{dilate, erode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW, DEFAULT_DILATE_RADIUS, DEFAULT_ERODE_RADIUS,
    DEFAULT_MEDIAN_RADIUS,
};
use crate::error::{Result, VisionError};

/// Parameters for building an edge mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Median filter radius; the window is `2 * radius + 1` pixels wide. 0 disables.
    #[serde(default = "default_median_radius")]
    pub median_radius: u32,
    /// Canny hysteresis thresholds on the gradient magnitude.
    #[serde(default = "default_canny_low")]
    pub canny_low: f32,
    #[serde(default = "default_canny_high")]
    pub canny_high: f32,
    /// Radius of the disc eroding the edge mask. Applied before dilation.
    #[serde(default = "default_erode_radius")]
    pub erode_radius: u8,
    /// Radius of the disc dilating the edge mask.
    #[serde(default = "default_dilate_radius")]
    pub dilate_radius: u8,
}

fn default_median_radius() -> u32 {
    DEFAULT_MEDIAN_RADIUS
}
fn default_canny_low() -> f32 {
    DEFAULT_CANNY_LOW
}
fn default_canny_high() -> f32 {
    DEFAULT_CANNY_HIGH
}
fn default_erode_radius() -> u8 {
    DEFAULT_ERODE_RADIUS
}
fn default_dilate_radius() -> u8 {
    DEFAULT_DILATE_RADIUS
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            median_radius: DEFAULT_MEDIAN_RADIUS,
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
            erode_radius: DEFAULT_ERODE_RADIUS,
            dilate_radius: DEFAULT_DILATE_RADIUS,
        }
    }
}

/// Contours found in a binary mask, split by border kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourCount {
    /// Outer borders, one per connected foreground component.
    pub outer: usize,
    /// Borders of holes inside a component.
    pub holes: usize,
}

impl ContourCount {
    pub fn total(&self) -> usize {
        self.outer + self.holes
    }
}

/// Median blur -> Canny -> erode -> dilate. Returns a 0/255 edge mask.
///
/// `canny_low` above `canny_high` is a `Config` error.
pub fn detect_edges(image: &GrayImage, config: &EdgeConfig) -> Result<GrayImage> {
    if !(config.canny_low >= 0.0 && config.canny_low <= config.canny_high) {
        return Err(VisionError::Config(format!(
            "canny thresholds must satisfy 0 <= low <= high, got {} and {}",
            config.canny_low, config.canny_high
        )));
    }

    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Ok(image.clone());
    }

    let smoothed = match config.median_radius {
        0 => image.clone(),
        r => median_filter(image, r, r),
    };
    let mut edges = canny(&smoothed, config.canny_low, config.canny_high);
    if config.erode_radius > 0 {
        edges = erode(&edges, Norm::L2, config.erode_radius);
    }
    if config.dilate_radius > 0 {
        edges = dilate(&edges, Norm::L2, config.dilate_radius);
    }

    debug!(
        edge_pixels = edges.pixels().filter(|p| p.0[0] > 0).count(),
        "Built edge mask"
    );
    Ok(edges)
}

/// Trace the borders of the non-zero pixels of `mask`.
pub fn count_contours(mask: &GrayImage) -> ContourCount {
    let (w, h) = mask.dimensions();
    if w == 0 || h == 0 {
        return ContourCount::default();
    }

    find_contours::<i32>(mask)
        .iter()
        .fold(ContourCount::default(), |mut count, contour| {
            match contour.border_type {
                BorderType::Outer => count.outer += 1,
                BorderType::Hole => count.holes += 1,
            }
            count
        })
}
