use serde::{Deserialize, Serialize};

use crate::consts::BACKGROUND_LABEL;
use crate::error::{Result, VisionError};

/// Integer centroid of a region, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Centroid {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

/// Statistics for one region id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    /// Region id (index into the owning [`RegionStatsSet`]).
    pub label: usize,
    /// Number of pixels carrying this label.
    pub pixel_count: u64,
    /// Sum of the column coordinates of member pixels.
    pub sum_x: u64,
    /// Sum of the row coordinates of member pixels.
    pub sum_y: u64,
    /// Truncated mean position, `None` when the region has no pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Centroid>,
}

impl RegionStats {
    pub fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    /// Centroid of a populated region, or `NoPixels` for an empty one.
    pub fn require_centroid(&self) -> Result<Centroid> {
        self.centroid
            .ok_or(VisionError::NoPixels { label: self.label })
    }
}

/// Order in which the aggregator visits cells.
///
/// Aggregates do not depend on the order; it only decides which invalid
/// cell is reported first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowMajor => write!(f, "Row-major"),
            Self::ColumnMajor => write!(f, "Column-major"),
        }
    }
}

/// Immutable per-region statistics for one label image, indexed by region id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStatsSet {
    width: usize,
    height: usize,
    regions: Vec<RegionStats>,
}

impl RegionStatsSet {
    pub(crate) fn new(regions: Vec<RegionStats>, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            regions,
        }
    }

    /// Number of regions, background included.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, label: usize) -> Option<&RegionStats> {
        self.regions.get(label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionStats> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[RegionStats] {
        &self.regions
    }

    /// Sum of all pixel counts; equals `width * height`.
    pub fn total_pixels(&self) -> u64 {
        self.regions.iter().map(|r| r.pixel_count).sum()
    }

    pub fn background(&self) -> Option<&RegionStats> {
        self.regions.get(BACKGROUND_LABEL)
    }

    /// Non-background regions that contain at least one pixel.
    pub fn objects(&self) -> impl Iterator<Item = &RegionStats> {
        self.regions
            .iter()
            .filter(|r| r.label != BACKGROUND_LABEL && !r.is_empty())
    }

    /// Number of labels excluding the background.
    pub fn object_count(&self) -> usize {
        self.regions.len().saturating_sub(1)
    }

    /// Labels of regions that have no pixels.
    pub fn empty_regions(&self) -> Vec<usize> {
        self.regions
            .iter()
            .filter(|r| r.is_empty())
            .map(|r| r.label)
            .collect()
    }
}

impl<'a> IntoIterator for &'a RegionStatsSet {
    type Item = &'a RegionStats;
    type IntoIter = std::slice::Iter<'a, RegionStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
