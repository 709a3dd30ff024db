use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_LABEL, CROSS_COLOR, DEFAULT_MARKER_SIZE, MARKER_COLOR};
use crate::regions::RegionStatsSet;

/// How detected regions are marked on the output image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Offset from the centroid to the far corner of the square marker.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    /// Also draw a cross exactly on the centroid.
    #[serde(default)]
    pub draw_cross: bool,
    /// Mark the background region too.
    #[serde(default)]
    pub include_background: bool,
}

fn default_marker_size() -> u32 {
    DEFAULT_MARKER_SIZE
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            marker_size: DEFAULT_MARKER_SIZE,
            draw_cross: false,
            include_background: false,
        }
    }
}

/// Draw a marker at the centroid of every populated region.
///
/// The marker is a hollow square spanning `(cx, cy)..=(cx + size, cy + size)`.
pub fn annotate(image: &GrayImage, stats: &RegionStatsSet, config: &AnnotationConfig) -> RgbImage {
    let mut canvas = RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let v = image.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    });

    let side = config.marker_size.saturating_add(1);
    for region in stats.iter() {
        if region.label == BACKGROUND_LABEL && !config.include_background {
            continue;
        }
        let Some(c) = region.centroid else {
            continue;
        };

        let rect = Rect::at(c.x as i32, c.y as i32).of_size(side, side);
        draw_hollow_rect_mut(&mut canvas, rect, Rgb(MARKER_COLOR));
        if config.draw_cross {
            draw_cross_mut(&mut canvas, Rgb(CROSS_COLOR), c.x as i32, c.y as i32);
        }
    }

    canvas
}
