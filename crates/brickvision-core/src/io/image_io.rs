use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma, RgbImage};
use ndarray::Array2;

use crate::consts::{WORKING_MAX_HEIGHT, WORKING_MAX_WIDTH};
use crate::error::{Result, VisionError};
use crate::label_image::LabelImage;

/// Load any supported image file as 8-bit grayscale.
pub fn load_gray(path: &Path) -> Result<GrayImage> {
    let img = image::open(path)?;
    Ok(img.to_luma8())
}

/// Load a grayscale image whose pixel values are region ids.
///
/// 8-bit and 16-bit grayscale values are taken as-is; other color types are
/// converted to 16-bit luma first.
pub fn load_label_image(path: &Path) -> Result<LabelImage> {
    let gray: ImageBuffer<Luma<u16>, Vec<u16>> = match image::open(path)? {
        DynamicImage::ImageLuma8(g) => ImageBuffer::from_fn(g.width(), g.height(), |x, y| {
            Luma([u16::from(g.get_pixel(x, y).0[0])])
        }),
        DynamicImage::ImageLuma16(g) => g,
        other => other.to_luma16(),
    };

    let (w, h) = gray.dimensions();
    let mut data = Array2::<i32>::zeros((h as usize, w as usize));
    for (x, y, pixel) in gray.enumerate_pixels() {
        data[[y as usize, x as usize]] = i32::from(pixel.0[0]);
    }

    Ok(LabelImage::new(data))
}

/// Target size after fitting into the working resolution.
///
/// Only images exceeding the working size in both dimensions are scaled.
/// Landscape and square images get width 640; portrait images get height 480.
pub fn working_size(width: u32, height: u32) -> (u32, u32) {
    if width <= WORKING_MAX_WIDTH || height <= WORKING_MAX_HEIGHT {
        return (width, height);
    }
    let (w, h) = (width as u64, height as u64);
    if width >= height {
        (WORKING_MAX_WIDTH, (WORKING_MAX_WIDTH as u64 * h / w) as u32)
    } else {
        ((WORKING_MAX_HEIGHT as u64 * w / h) as u32, WORKING_MAX_HEIGHT)
    }
}

/// Scale an image down to the working resolution if it is too large.
pub fn fit_working_size(image: &GrayImage) -> GrayImage {
    let (w, h) = image.dimensions();
    let (nw, nh) = working_size(w, h);
    if (nw, nh) == (w, h) {
        return image.clone();
    }
    imageops::resize(image, nw, nh, FilterType::Triangle)
}

/// Save an 8-bit grayscale image as PNG.
pub fn save_png(image: &GrayImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an 8-bit RGB image as PNG.
pub fn save_rgb_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a label image as 16-bit grayscale PNG.
///
/// Labels outside `[0, 65535]` cannot be stored losslessly and fail with
/// `LabelOutOfRange` before anything is written.
pub fn save_label_png(labels: &LabelImage, path: &Path) -> Result<()> {
    let out_of_range = |value: i32| VisionError::LabelOutOfRange {
        value: value as i64,
        max: u16::MAX as i64,
    };
    if let Some(min) = labels.min_label().filter(|&v| v < 0) {
        return Err(out_of_range(min));
    }
    if let Some(max) = labels.max_label().filter(|&v| v > u16::MAX as i32) {
        return Err(out_of_range(max));
    }

    let w = labels.width() as u32;
    let h = labels.height() as u32;
    let data = labels.data();
    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_fn(w, h, |x, y| {
        Luma([data[[y as usize, x as usize]] as u16])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
