use image::{ImageBuffer, Luma};
use ndarray::Array2;

use crate::error::{Result, VisionError};

/// A segmented image: each cell holds the id of the region it belongs to.
///
/// Cells are stored row-major, shape = (height, width). Id 0 is the
/// background by convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelImage {
    data: Array2<i32>,
}

impl LabelImage {
    pub fn new(data: Array2<i32>) -> Self {
        Self { data }
    }

    /// Build a label image from a flat row-major buffer.
    ///
    /// Negative dimensions are rejected with `InvalidDimensions`; zero is fine.
    pub fn from_raw(width: i64, height: i64, data: Vec<i32>) -> Result<Self> {
        let invalid = || VisionError::InvalidDimensions { width, height };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        let expected = w.checked_mul(h).ok_or_else(invalid)?;
        let actual = data.len();
        let data = Array2::from_shape_vec((h, w), data)
            .map_err(|_| VisionError::BufferSizeMismatch { expected, actual })?;
        Ok(Self { data })
    }

    /// Convert the `u32` label buffer produced by connected-component labelling.
    pub fn from_luma32(labels: &ImageBuffer<Luma<u32>, Vec<u32>>) -> Result<Self> {
        let (w, h) = labels.dimensions();
        let mut data = Array2::<i32>::zeros((h as usize, w as usize));
        for (x, y, pixel) in labels.enumerate_pixels() {
            let value = pixel.0[0];
            data[[y as usize, x as usize]] =
                i32::try_from(value).map_err(|_| VisionError::LabelOutOfRange {
                    value: value as i64,
                    max: i32::MAX as i64,
                })?;
        }
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Label at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        self.data.get([y, x]).copied()
    }

    pub fn data(&self) -> &Array2<i32> {
        &self.data
    }

    /// Smallest label present, or `None` for an empty image.
    pub fn min_label(&self) -> Option<i32> {
        self.data.iter().copied().min()
    }

    /// Largest label present, or `None` for an empty image.
    pub fn max_label(&self) -> Option<i32> {
        self.data.iter().copied().max()
    }

    /// Region count implied by the labels present (`max_label + 1`, at least 1).
    pub fn implied_region_count(&self) -> usize {
        match self.max_label() {
            Some(max) if max > 0 => max as usize + 1,
            _ => 1,
        }
    }
}
