pub mod annotate;
pub mod config;
pub mod count;
pub mod labels;
pub mod run;

use brickvision_core::consts::{DEFAULT_BLUR_RADIUS, DEFAULT_THRESHOLD};
use brickvision_core::segmentation::{Connectivity, SegmentationConfig, ThresholdMode};
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Bright objects on a dark background
    Bright,
    /// Dark objects on a bright background
    Dark,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConnectivityArg {
    Four,
    Eight,
}

/// Segmentation flags shared by the image commands.
#[derive(Args)]
pub struct SegmentationArgs {
    /// Intensity threshold (0-255)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Which side of the threshold counts as an object
    #[arg(long, value_enum, default_value = "dark")]
    pub mode: ModeArg,

    /// Box blur radius before thresholding (0 disables)
    #[arg(long, default_value_t = DEFAULT_BLUR_RADIUS)]
    pub blur: u32,

    /// Pixel connectivity for grouping
    #[arg(long, value_enum, default_value = "eight")]
    pub connectivity: ConnectivityArg,

    /// Keep the original resolution instead of scaling down to 640x480
    #[arg(long)]
    pub no_resize: bool,
}

impl SegmentationArgs {
    pub fn to_config(&self) -> SegmentationConfig {
        SegmentationConfig {
            blur_radius: self.blur,
            threshold: self.threshold,
            mode: match self.mode {
                ModeArg::Bright => ThresholdMode::Binary,
                ModeArg::Dark => ThresholdMode::BinaryInverted,
            },
            connectivity: match self.connectivity {
                ConnectivityArg::Four => Connectivity::Four,
                ConnectivityArg::Eight => Connectivity::Eight,
            },
        }
    }
}
