use image::{GrayImage, Luma};
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::filter::box_filter;
use imageproc::map::map_colors2;

use crate::error::{Result, VisionError};

use super::config::ThresholdMode;

/// Subtract `image` from `background`, saturating at 0.
///
/// With a bright empty scene as background, objects come out bright on a
/// dark field.
pub fn remove_background(image: &GrayImage, background: &GrayImage) -> Result<GrayImage> {
    if image.dimensions() != background.dimensions() {
        return Err(VisionError::SizeMismatch {
            expected: image.dimensions(),
            actual: background.dimensions(),
        });
    }

    Ok(map_colors2(background, image, |b, i| {
        Luma([b[0].saturating_sub(i[0])])
    }))
}

/// Box blur with a `(2r + 1) x (2r + 1)` window.
pub fn blur(image: &GrayImage, radius: u32) -> GrayImage {
    if radius == 0 || image.width() == 0 || image.height() == 0 {
        return image.clone();
    }
    box_filter(image, radius, radius)
}

/// Produce a 0/255 mask where 255 marks foreground.
pub fn binarize(image: &GrayImage, level: u8, mode: ThresholdMode) -> GrayImage {
    let kind = match mode {
        ThresholdMode::Binary => ThresholdType::Binary,
        ThresholdMode::BinaryInverted => ThresholdType::BinaryInverted,
    };
    threshold(image, level, kind)
}
