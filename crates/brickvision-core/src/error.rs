use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Label buffer holds {actual} cells, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Label {value} at ({x}, {y}) is outside [0, {region_count})")]
    InvalidLabel {
        value: i64,
        x: usize,
        y: usize,
        region_count: usize,
    },

    #[error("Label {value} cannot be stored: valid labels lie in [0, {max}]")]
    LabelOutOfRange { value: i64, max: i64 },

    #[error("Region count must be at least 1")]
    InvalidRegionCount,

    #[error("Region {label} has no pixels")]
    NoPixels { label: usize },

    #[error("Image size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VisionError>;
