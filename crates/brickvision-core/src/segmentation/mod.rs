pub mod config;
pub mod edges;
pub mod labelling;
pub mod threshold;

pub use config::{Connectivity, SegmentationConfig, ThresholdMode};
pub use edges::{count_contours, detect_edges, ContourCount, EdgeConfig};
pub use labelling::{label_components, segment, Labeling, Segmentation};
pub use threshold::{binarize, blur, remove_background};
