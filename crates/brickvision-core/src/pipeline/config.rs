use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::annotate::AnnotationConfig;
use crate::error::{Result, VisionError};
use crate::segmentation::{EdgeConfig, SegmentationConfig};

/// Everything needed to analyse one image file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    /// Image of the empty scene, subtracted before segmentation.
    #[serde(default)]
    pub background: Option<PathBuf>,
    /// PNG with centroid markers drawn over the input.
    #[serde(default)]
    pub annotated_output: Option<PathBuf>,
    /// Binary mask PNG.
    #[serde(default)]
    pub mask_output: Option<PathBuf>,
    /// 16-bit label image PNG.
    #[serde(default)]
    pub labels_output: Option<PathBuf>,
    /// Edge mask PNG. Uses the default `edges` settings when that section is absent.
    #[serde(default)]
    pub edges_output: Option<PathBuf>,
    /// TOML region report.
    #[serde(default)]
    pub report_output: Option<PathBuf>,
    /// Scale large inputs down to the working resolution first.
    #[serde(default = "default_true")]
    pub fit_working_size: bool,
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub annotation: AnnotationConfig,
    /// Edge-mask stage; skipped unless set or `edges_output` is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<EdgeConfig>,
}

fn default_true() -> bool {
    true
}

impl AnalysisConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            background: None,
            annotated_output: None,
            mask_output: None,
            labels_output: None,
            edges_output: None,
            report_output: None,
            fit_working_size: true,
            segmentation: SegmentationConfig::default(),
            annotation: AnnotationConfig::default(),
            edges: None,
        }
    }

    /// Edge settings to run with, if the edge stage is wanted at all.
    pub fn edge_config(&self) -> Option<EdgeConfig> {
        match (&self.edges, &self.edges_output) {
            (Some(edges), _) => Some(edges.clone()),
            (None, Some(_)) => Some(EdgeConfig::default()),
            (None, None) => None,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| VisionError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| VisionError::Config(e.to_string()))
    }
}
