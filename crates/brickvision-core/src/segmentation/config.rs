use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLUR_RADIUS, DEFAULT_THRESHOLD};

/// How intensities map to foreground after thresholding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMode {
    /// Pixels brighter than the threshold are foreground.
    Binary,
    /// Pixels at or below the threshold are foreground (dark objects on a
    /// bright background).
    #[default]
    BinaryInverted,
}

impl std::fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "Binary"),
            Self::BinaryInverted => write!(f, "Binary Inverted"),
        }
    }
}

/// Pixel neighbourhood used when grouping foreground pixels into regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    Four,
    #[default]
    Eight,
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Four => write!(f, "4-connected"),
            Self::Eight => write!(f, "8-connected"),
        }
    }
}

/// Parameters for turning a grayscale image into a label image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Box blur radius; the window is `2 * radius + 1` pixels wide. 0 disables.
    #[serde(default = "default_blur_radius")]
    pub blur_radius: u32,
    /// Intensity threshold in [0, 255].
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default)]
    pub mode: ThresholdMode,
    #[serde(default)]
    pub connectivity: Connectivity,
}

fn default_blur_radius() -> u32 {
    DEFAULT_BLUR_RADIUS
}
fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            blur_radius: DEFAULT_BLUR_RADIUS,
            threshold: DEFAULT_THRESHOLD,
            mode: ThresholdMode::default(),
            connectivity: Connectivity::default(),
        }
    }
}
