use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisionError};
use crate::regions::{RegionStats, RegionStatsSet};
use crate::segmentation::ContourCount;

/// Serializable summary of one analysed image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub source: PathBuf,
    pub width: usize,
    pub height: usize,
    pub object_count: usize,
    /// Borders traced in the segmentation mask.
    #[serde(default)]
    pub contours: ContourCount,
    pub regions: Vec<RegionStats>,
}

impl StatsReport {
    pub fn new(source: impl Into<PathBuf>, stats: &RegionStatsSet) -> Self {
        Self {
            source: source.into(),
            width: stats.width(),
            height: stats.height(),
            object_count: stats.object_count(),
            contours: ContourCount::default(),
            regions: stats.as_slice().to_vec(),
        }
    }

    pub fn with_contours(mut self, contours: ContourCount) -> Self {
        self.contours = contours;
        self
    }
}

/// Write the report as TOML.
pub fn write_report(report: &StatsReport, path: &Path) -> Result<()> {
    let text = toml::to_string_pretty(report).map_err(|e| VisionError::Config(e.to_string()))?;
    std::fs::write(path, text)?;
    Ok(())
}
