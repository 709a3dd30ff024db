#[allow(dead_code)]
mod common;

use std::collections::HashSet;

use image::{GrayImage, Luma};

use brickvision_core::error::VisionError;
use brickvision_core::regions::{compute_stats, Centroid};
use brickvision_core::segmentation::{
    binarize, blur, label_components, remove_background, segment, Connectivity,
    SegmentationConfig, ThresholdMode,
};

fn sharp_config() -> SegmentationConfig {
    SegmentationConfig {
        blur_radius: 0,
        ..SegmentationConfig::default()
    }
}

#[test]
fn test_default_config() {
    let cfg = SegmentationConfig::default();
    assert_eq!(cfg.blur_radius, 3);
    assert_eq!(cfg.threshold, 65);
    assert_eq!(cfg.mode, ThresholdMode::BinaryInverted);
    assert_eq!(cfg.connectivity, Connectivity::Eight);
}

#[test]
fn test_binarize_inverted_marks_dark_pixels() {
    let img = common::dark_squares(10, 10, 3, &[(2, 2)]);
    let mask = binarize(&img, 65, ThresholdMode::BinaryInverted);
    assert_eq!(mask.get_pixel(3, 3).0[0], 255);
    assert_eq!(mask.get_pixel(0, 0).0[0], 0);
}

#[test]
fn test_binarize_binary_marks_bright_pixels() {
    let img = common::dark_squares(10, 10, 3, &[(2, 2)]);
    let mask = binarize(&img, 65, ThresholdMode::Binary);
    assert_eq!(mask.get_pixel(3, 3).0[0], 0);
    assert_eq!(mask.get_pixel(0, 0).0[0], 255);
}

#[test]
fn test_blur_radius_zero_is_identity() {
    let img = common::dark_squares(8, 8, 2, &[(1, 1)]);
    assert_eq!(blur(&img, 0), img);
}

#[test]
fn test_blur_keeps_uniform_image() {
    let img = GrayImage::from_pixel(12, 9, Luma([90u8]));
    let out = blur(&img, 3);
    assert_eq!(out.dimensions(), (12, 9));
    assert!(out.pixels().all(|p| p.0[0] == 90));
}

#[test]
fn test_remove_background() {
    let bg = GrayImage::from_pixel(4, 4, Luma([200u8]));
    let mut img = bg.clone();
    img.put_pixel(1, 1, Luma([50u8]));
    img.put_pixel(2, 2, Luma([250u8]));

    let out = remove_background(&img, &bg).unwrap();
    assert_eq!(out.get_pixel(1, 1).0[0], 150);
    // Saturates instead of wrapping.
    assert_eq!(out.get_pixel(2, 2).0[0], 0);
    assert_eq!(out.get_pixel(0, 0).0[0], 0);
}

#[test]
fn test_remove_background_keeps_pixel_positions() {
    let bg = GrayImage::from_pixel(3, 2, Luma([100u8]));
    let img = GrayImage::from_fn(3, 2, |x, y| Luma([(10 * x + 40 * y) as u8]));

    let out = remove_background(&img, &bg).unwrap();
    assert_eq!(out.dimensions(), (3, 2));
    assert_eq!(out.get_pixel(2, 0).0[0], 80);
    assert_eq!(out.get_pixel(0, 1).0[0], 60);
    assert_eq!(out.get_pixel(2, 1).0[0], 40);
}

#[test]
fn test_remove_background_size_mismatch() {
    let bg = GrayImage::new(4, 4);
    let img = GrayImage::new(5, 4);
    assert!(matches!(
        remove_background(&img, &bg),
        Err(VisionError::SizeMismatch { .. })
    ));
}

#[test]
fn test_connectivity_changes_grouping() {
    let mut mask = GrayImage::new(4, 4);
    mask.put_pixel(1, 1, Luma([255u8]));
    mask.put_pixel(2, 2, Luma([255u8]));

    let four = label_components(&mask, Connectivity::Four).unwrap();
    let eight = label_components(&mask, Connectivity::Eight).unwrap();
    assert_eq!(four.object_count(), 2);
    assert_eq!(eight.object_count(), 1);
}

#[test]
fn test_label_empty_mask() {
    let labeling = label_components(&GrayImage::new(0, 0), Connectivity::Eight).unwrap();
    assert_eq!(labeling.region_count, 1);
    assert!(labeling.labels.is_empty());
}

#[test]
fn test_label_blank_mask_has_only_background() {
    let labeling = label_components(&GrayImage::new(6, 6), Connectivity::Eight).unwrap();
    assert_eq!(labeling.region_count, 1);
    assert_eq!(labeling.object_count(), 0);
}

#[test]
fn test_segment_two_squares() {
    let img = common::dark_squares(40, 30, 6, &[(5, 5), (20, 10)]);
    let seg = segment(&img, &sharp_config()).unwrap();
    assert_eq!(seg.labeling.object_count(), 2);

    let stats = compute_stats(&seg.labeling.labels, seg.labeling.region_count).unwrap();
    assert_eq!(stats.total_pixels(), 40 * 30);

    let centroids: HashSet<Centroid> = stats.objects().filter_map(|r| r.centroid).collect();
    let expected: HashSet<Centroid> = [Centroid { x: 7, y: 7 }, Centroid { x: 22, y: 12 }]
        .into_iter()
        .collect();
    assert_eq!(centroids, expected);
    assert!(stats.objects().all(|r| r.pixel_count == 36));
}

#[test]
fn test_segment_with_default_blur_counts_objects() {
    let img = common::dark_squares(60, 40, 8, &[(6, 6), (30, 20)]);
    let seg = segment(&img, &SegmentationConfig::default()).unwrap();
    assert_eq!(seg.labeling.object_count(), 2);
}
