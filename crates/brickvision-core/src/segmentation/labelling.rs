use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity as NeighbourhoodKind};
use ndarray::Array2;
use tracing::debug;

use crate::error::Result;
use crate::label_image::LabelImage;

use super::config::{Connectivity, SegmentationConfig};
use super::threshold::{binarize, blur};

/// Connected-component labelling of a mask.
#[derive(Clone, Debug)]
pub struct Labeling {
    pub labels: LabelImage,
    /// Number of labels including the background (`max label + 1`).
    pub region_count: usize,
}

impl Labeling {
    /// Number of foreground components.
    pub fn object_count(&self) -> usize {
        self.region_count - 1
    }
}

/// Output of [`segment`]: the binary mask and its labelling.
#[derive(Clone, Debug)]
pub struct Segmentation {
    pub mask: GrayImage,
    pub labeling: Labeling,
}

/// Label the non-zero pixels of `mask` as connected regions.
///
/// Background (zero) pixels get label 0, components are numbered 1..=N.
pub fn label_components(mask: &GrayImage, connectivity: Connectivity) -> Result<Labeling> {
    let (w, h) = mask.dimensions();
    if w == 0 || h == 0 {
        return Ok(Labeling {
            labels: LabelImage::new(Array2::zeros((h as usize, w as usize))),
            region_count: 1,
        });
    }

    let kind = match connectivity {
        Connectivity::Four => NeighbourhoodKind::Four,
        Connectivity::Eight => NeighbourhoodKind::Eight,
    };
    let raw = connected_components(mask, kind, Luma([0u8]));
    let labels = LabelImage::from_luma32(&raw)?;
    let region_count = labels.implied_region_count();
    debug!(objects = region_count - 1, %connectivity, "Labelled connected components");
    Ok(Labeling {
        labels,
        region_count,
    })
}

/// Blur, threshold and label a grayscale image.
pub fn segment(image: &GrayImage, config: &SegmentationConfig) -> Result<Segmentation> {
    let blurred = blur(image, config.blur_radius);
    let mask = binarize(&blurred, config.threshold, config.mode);
    let labeling = label_components(&mask, config.connectivity)?;
    Ok(Segmentation { mask, labeling })
}
