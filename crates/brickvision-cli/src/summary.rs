use std::path::Path;

use brickvision_core::regions::RegionStatsSet;
use brickvision_core::segmentation::{ContourCount, SegmentationConfig};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_segmentation_summary(config: &SegmentationConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Segmentation"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.threshold)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(config.mode)
    );
    if config.blur_radius == 0 {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Blur"),
            s.disabled.apply_to("disabled")
        );
    } else {
        let side = 2 * config.blur_radius + 1;
        println!(
            "    {:<14}{}",
            s.label.apply_to("Blur"),
            s.value.apply_to(format!("{side}x{side} box"))
        );
    }
    println!(
        "    {:<14}{}",
        s.label.apply_to("Connectivity"),
        s.method.apply_to(config.connectivity)
    );
    println!();
}

/// One line per image: path, size and object count.
pub fn print_image_result(path: &Path, stats: &RegionStatsSet) {
    let s = Styles::new();
    println!(
        "  {}  {}  {} {}",
        s.path.apply_to(path.display()),
        s.label.apply_to(format!("{}x{}", stats.width(), stats.height())),
        s.value.apply_to(stats.object_count()),
        s.label.apply_to("objects"),
    );
}

/// Contour count of the segmentation mask, indented under the image line.
pub fn print_contour_count(contours: &ContourCount) {
    let s = Styles::new();
    println!(
        "    {} {}  {}",
        s.value.apply_to(contours.total()),
        s.label.apply_to("contours"),
        s.label.apply_to(format!(
            "({} outer, {} holes)",
            contours.outer, contours.holes
        )),
    );
}

/// Table of every region: label, area and centroid.
pub fn print_region_table(stats: &RegionStatsSet) {
    let s = Styles::new();

    println!();
    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:>6}  {:>10}  {:>12}",
            "Label", "Pixels", "Centroid"
        ))
    );
    println!("  {}", "-".repeat(32));
    for region in stats {
        let centroid = match region.centroid {
            Some(c) => format!("({}, {})", c.x, c.y),
            None => "-".to_string(),
        };
        let line = format!(
            "{:>6}  {:>10}  {:>12}",
            region.label, region.pixel_count, centroid
        );
        if region.is_empty() {
            println!("  {}", s.disabled.apply_to(line));
        } else {
            println!("  {}", line);
        }
    }

    let empty = stats.empty_regions();
    if !empty.is_empty() {
        println!();
        println!(
            "  {:<14}{}",
            s.label.apply_to("No pixels"),
            s.disabled.apply_to(format!("{:?}", empty))
        );
    }
    println!();
}
