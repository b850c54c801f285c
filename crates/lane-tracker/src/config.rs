//! Lane tracker configuration

use crate::TrackerError;
use serde::{Deserialize, Serialize};

/// Handling of segments with zero horizontal extent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalSegmentPolicy {
    /// Use the vertical extent (dy) as the slope value
    #[default]
    DeltaY,
    /// Drop vertical segments from both lanes
    Exclude,
}

/// Overlay drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Boundary line colour (RGBA)
    pub boundary_color: [u8; 4],

    /// Boundary line thickness (pixels)
    pub boundary_thickness: u32,

    /// Centerline colour (RGBA)
    pub centerline_color: [u8; 4],

    /// Centerline thickness (pixels)
    pub centerline_thickness: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            boundary_color: [255, 0, 0, 255],
            boundary_thickness: 5,
            centerline_color: [0, 255, 0, 255],
            centerline_thickness: 3,
        }
    }
}

/// Lane tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum |slope| for a segment to count as a lane candidate
    pub slope_threshold: f64,

    /// Frames retained for the temporal slope median
    pub history_window: usize,

    /// Weight of the new observation in exponential smoothing
    pub smoothing_alpha: f64,

    /// Vertical segment handling
    pub vertical_policy: VerticalSegmentPolicy,

    /// Overlay drawing
    pub render: RenderConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            slope_threshold: 0.4,
            history_window: 5,
            smoothing_alpha: 0.9,
            vertical_policy: VerticalSegmentPolicy::DeltaY,
            render: RenderConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Create strict config (steeper candidates, longer memory)
    pub fn strict() -> Self {
        Self {
            slope_threshold: 0.5,
            history_window: 9,
            smoothing_alpha: 0.7,
            vertical_policy: VerticalSegmentPolicy::Exclude,
            ..Default::default()
        }
    }

    /// Create lenient config (shallower candidates, faster response)
    pub fn lenient() -> Self {
        Self {
            slope_threshold: 0.3,
            history_window: 3,
            smoothing_alpha: 1.0,
            ..Default::default()
        }
    }

    /// Check the tuning constants are usable
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.slope_threshold.is_finite() || self.slope_threshold < 0.0 {
            return Err(TrackerError::InvalidConfig(format!(
                "slope_threshold must be finite and >= 0, got {}",
                self.slope_threshold
            )));
        }
        if self.history_window == 0 {
            return Err(TrackerError::InvalidConfig(
                "history_window must be at least 1".to_string(),
            ));
        }
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            return Err(TrackerError::InvalidConfig(format!(
                "smoothing_alpha must be in (0, 1], got {}",
                self.smoothing_alpha
            )));
        }
        Ok(())
    }
}
