//! Per-frame tracking outcome

use crate::aggregate::FrameObservation;
use crate::geometry::LaneGeometry;
use crate::history::SmoothedSlopes;
use serde::Serialize;
use thiserror::Error;

/// Why a frame produced no new geometry. Always frame-local.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("No line segments detected")]
    NoLinesDetected,

    #[error("Lane not detected (left: {left} segments, right: {right} segments)")]
    LaneNotDetected { left: usize, right: usize },

    #[error("Degenerate slope after temporal median (left: {left}, right: {right})")]
    DegenerateSlope { left: f64, right: f64 },
}

impl SkipReason {
    /// Stable label for metrics and logs
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::NoLinesDetected => "no_lines_detected",
            SkipReason::LaneNotDetected { .. } => "lane_not_detected",
            SkipReason::DegenerateSlope { .. } => "degenerate_slope",
        }
    }
}

/// A successfully tracked frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameResult {
    /// Source frame sequence number
    pub sequence: Option<u64>,

    /// Smoothed geometry to draw
    pub geometry: LaneGeometry,

    /// Geometry solved from this frame before smoothing
    pub raw_geometry: LaneGeometry,

    /// Slopes after the temporal median
    pub slopes: SmoothedSlopes,

    /// Heading of the median mean slope (degrees)
    pub heading_deg: f64,

    /// Left boundary observation
    pub left: FrameObservation,

    /// Right boundary observation
    pub right: FrameObservation,
}

/// Result of processing one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// New geometry is available; redraw
    Tracked(FrameResult),
    /// Nothing new; keep showing the previous geometry
    Skipped(SkipReason),
}

impl FrameOutcome {
    pub fn is_tracked(&self) -> bool {
        matches!(self, FrameOutcome::Tracked(_))
    }

    /// New geometry, if this frame produced any
    pub fn geometry(&self) -> Option<&LaneGeometry> {
        match self {
            FrameOutcome::Tracked(result) => Some(&result.geometry),
            FrameOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            FrameOutcome::Tracked(_) => None,
            FrameOutcome::Skipped(reason) => Some(*reason),
        }
    }
}
