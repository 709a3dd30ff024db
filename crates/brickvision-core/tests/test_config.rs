use std::path::PathBuf;

use brickvision_core::annotate::AnnotationConfig;
use brickvision_core::pipeline::config::AnalysisConfig;
use brickvision_core::regions::TraversalOrder;
use brickvision_core::segmentation::{
    Connectivity, EdgeConfig, SegmentationConfig, ThresholdMode,
};

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_threshold_mode_display() {
    assert_eq!(format!("{}", ThresholdMode::Binary), "Binary");
    assert_eq!(format!("{}", ThresholdMode::BinaryInverted), "Binary Inverted");
}

#[test]
fn test_connectivity_display() {
    assert_eq!(format!("{}", Connectivity::Four), "4-connected");
    assert_eq!(format!("{}", Connectivity::Eight), "8-connected");
}

#[test]
fn test_traversal_order_display() {
    assert_eq!(format!("{}", TraversalOrder::RowMajor), "Row-major");
    assert_eq!(TraversalOrder::default(), TraversalOrder::RowMajor);
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_minimal_toml_uses_defaults() {
    let cfg = AnalysisConfig::from_toml_str("input = \"dice.png\"\n").unwrap();
    assert_eq!(cfg.input, PathBuf::from("dice.png"));
    assert!(cfg.fit_working_size);
    assert!(cfg.background.is_none());
    assert_eq!(cfg.segmentation, SegmentationConfig::default());
    assert_eq!(cfg.annotation, AnnotationConfig::default());
    assert!(cfg.edges.is_none());
    assert!(cfg.edge_config().is_none());
}

#[test]
fn test_partial_segmentation_table() {
    let text = r#"
input = "dice.png"
fit_working_size = false

[segmentation]
threshold = 120
mode = "Binary"
connectivity = "Four"
"#;
    let cfg = AnalysisConfig::from_toml_str(text).unwrap();
    assert!(!cfg.fit_working_size);
    assert_eq!(cfg.segmentation.threshold, 120);
    assert_eq!(cfg.segmentation.mode, ThresholdMode::Binary);
    assert_eq!(cfg.segmentation.connectivity, Connectivity::Four);
    assert_eq!(cfg.segmentation.blur_radius, 3);
}

#[test]
fn test_toml_roundtrip() {
    let mut cfg = AnalysisConfig::new("in.png");
    cfg.annotated_output = Some(PathBuf::from("out.png"));
    cfg.annotation.draw_cross = true;
    cfg.segmentation.blur_radius = 1;
    cfg.edges_output = Some(PathBuf::from("edges.png"));
    cfg.edges = Some(EdgeConfig {
        dilate_radius: 3,
        ..EdgeConfig::default()
    });

    let text = cfg.to_toml_string().unwrap();
    let parsed = AnalysisConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, cfg);
}

#[test]
fn test_partial_edges_table() {
    let text = r#"
input = "dice.png"

[edges]
canny_low = 100.0
erode_radius = 2
"#;
    let cfg = AnalysisConfig::from_toml_str(text).unwrap();
    let edges = cfg.edge_config().unwrap();
    assert_eq!(edges.canny_low, 100.0);
    assert_eq!(edges.canny_high, 255.0);
    assert_eq!(edges.median_radius, 1);
    assert_eq!(edges.erode_radius, 2);
    assert_eq!(edges.dilate_radius, 1);
}

#[test]
fn test_edges_output_alone_enables_default_edges() {
    let cfg =
        AnalysisConfig::from_toml_str("input = \"dice.png\"\nedges_output = \"e.png\"\n").unwrap();
    assert!(cfg.edges.is_none());
    assert_eq!(cfg.edge_config(), Some(EdgeConfig::default()));
}

#[test]
fn test_missing_input_is_config_error() {
    let err = AnalysisConfig::from_toml_str("[segmentation]\nthreshold = 1\n").unwrap_err();
    assert!(err.to_string().contains("Configuration error"), "got: {err}");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis.toml");
    std::fs::write(&path, "input = \"a.png\"\n[annotation]\nmarker_size = 9\n").unwrap();

    let cfg = AnalysisConfig::load(&path).unwrap();
    assert_eq!(cfg.annotation.marker_size, 9);
}
