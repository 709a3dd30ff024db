use image::{GrayImage, Luma};
use ndarray::Array2;

use brickvision_core::label_image::LabelImage;

/// The 4x4 layout: label 0 in the top-left 2x2 block, label 1 elsewhere.
pub fn quadrant_labels() -> LabelImage {
    let mut data = Array2::<i32>::ones((4, 4));
    for y in 0..2 {
        for x in 0..2 {
            data[[y, x]] = 0;
        }
    }
    LabelImage::new(data)
}

/// Label image built from row slices.
pub fn labels_from_rows(rows: &[&[i32]]) -> LabelImage {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    let flat: Vec<i32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    LabelImage::from_raw(w as i64, h as i64, flat).expect("rectangular rows")
}

/// Deterministic pseudo-random label image with labels in `[0, region_count)`.
pub fn scrambled_labels(width: usize, height: usize, region_count: usize) -> LabelImage {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let data = Array2::from_shape_fn((height, width), |_| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % region_count as u64) as i32
    });
    LabelImage::new(data)
}

/// Bright canvas with dark filled squares at the given top-left corners.
pub fn dark_squares(width: u32, height: u32, side: u32, corners: &[(u32, u32)]) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([220u8]));
    for &(cx, cy) in corners {
        for y in cy..(cy + side).min(height) {
            for x in cx..(cx + side).min(width) {
                img.put_pixel(x, y, Luma([10u8]));
            }
        }
    }
    img
}
