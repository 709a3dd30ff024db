use image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;

use brickvision_core::error::VisionError;
use brickvision_core::io::image_io::{
    fit_working_size, load_gray, load_label_image, save_label_png, save_png, working_size,
};
use brickvision_core::label_image::LabelImage;

#[test]
fn test_working_size_small_image_unchanged() {
    assert_eq!(working_size(320, 240), (320, 240));
    // Only one dimension over the limit: unchanged.
    assert_eq!(working_size(1000, 400), (1000, 400));
}

#[test]
fn test_working_size_landscape() {
    assert_eq!(working_size(1280, 960), (640, 480));
    assert_eq!(working_size(1920, 1080), (640, 360));
}

#[test]
fn test_working_size_square() {
    assert_eq!(working_size(800, 800), (640, 640));
}

#[test]
fn test_working_size_portrait() {
    assert_eq!(working_size(960, 1280), (360, 480));
}

#[test]
fn test_fit_working_size_resizes() {
    let img = GrayImage::from_pixel(1280, 960, Luma([128u8]));
    let out = fit_working_size(&img);
    assert_eq!(out.dimensions(), (640, 480));
    let v = out.get_pixel(10, 10).0[0];
    assert!((127..=129).contains(&v), "got {v}");
}

#[test]
fn test_png_roundtrip_gray() {
    let mut img = GrayImage::new(5, 3);
    img.put_pixel(4, 2, Luma([77u8]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    save_png(&img, &path).unwrap();

    let loaded = load_gray(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_label_png_roundtrip() {
    let data = Array2::from_shape_vec((2, 3), vec![0, 1, 2, 300, 0, 1]).unwrap();
    let labels = LabelImage::new(data);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.png");
    save_label_png(&labels, &path).unwrap();

    let loaded = load_label_image(&path).unwrap();
    assert_eq!(loaded, labels);
}

#[test]
fn test_label_png_largest_storable_label_roundtrips() {
    let labels = LabelImage::from_raw(2, 1, vec![0, 65_535]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("max.png");
    save_label_png(&labels, &path).unwrap();
    assert_eq!(load_label_image(&path).unwrap().get(1, 0), Some(65_535));
}

#[test]
fn test_label_png_rejects_label_above_u16() {
    let labels = LabelImage::from_raw(2, 1, vec![0, 70_000]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("too_big.png");
    assert!(matches!(
        save_label_png(&labels, &path),
        Err(VisionError::LabelOutOfRange {
            value: 70_000,
            max: 65_535
        })
    ));
    assert!(!path.exists());
}

#[test]
fn test_label_png_rejects_negative_label() {
    let labels = LabelImage::from_raw(2, 1, vec![-1, 1]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("negative.png");
    assert!(matches!(
        save_label_png(&labels, &path),
        Err(VisionError::LabelOutOfRange { value: -1, .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_label_png_8bit_values_not_rescaled() {
    let img = ImageBuffer::<Luma<u8>, Vec<u8>>::from_fn(2, 2, |x, y| Luma([(x + 2 * y) as u8]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels8.png");
    img.save(&path).unwrap();

    let loaded = load_label_image(&path).unwrap();
    assert_eq!(loaded.get(1, 1), Some(3));
    assert_eq!(loaded.implied_region_count(), 4);
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_gray(&dir.path().join("missing.png")).is_err());
}
