use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::report::DEFAULT_CONTOUR_LEVELS;
use crate::resample::DEFAULT_MAX_DIMENSION;

/// Which grid the landform classifiers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandformSource {
    /// The downsampled grid every other stage uses.
    #[default]
    Resampled,
    /// The grid as loaded, before downsampling.
    Full,
}

/// Analysis parameters. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Cap on the longer axis after resampling. Default 128.
    pub max_dimension: usize,
    pub landform_source: LandformSource,
    /// Number of contour intervals between min and max elevation. Default 15.
    pub contour_levels: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            landform_source: LandformSource::Resampled,
            contour_levels: DEFAULT_CONTOUR_LEVELS,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON config. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(AnalysisError::InvalidParameter {
                name: "maxDimension",
                value: self.max_dimension.to_string(),
                reason: "must be at least 1",
            });
        }
        if self.contour_levels == 0 {
            return Err(AnalysisError::InvalidParameter {
                name: "contourLevels",
                value: self.contour_levels.to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
