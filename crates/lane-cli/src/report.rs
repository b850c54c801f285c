//! Per-frame output records

use lane_tracker::{FrameOutcome, LaneGeometry, SkipReason};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStatus {
    Tracked,
    Skipped,
}

/// One JSON line of output
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub sequence: u64,
    pub status: FrameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
    /// New geometry when tracked, otherwise the geometry being reused
    pub geometry: Option<LaneGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
}

impl FrameRecord {
    pub fn new(sequence: u64, outcome: &FrameOutcome, previous: Option<&LaneGeometry>) -> Self {
        match outcome {
            FrameOutcome::Tracked(result) => Self {
                sequence,
                status: FrameStatus::Tracked,
                reason: None,
                geometry: Some(result.geometry),
                heading_deg: Some(result.heading_deg),
            },
            FrameOutcome::Skipped(reason) => Self {
                sequence,
                status: FrameStatus::Skipped,
                reason: Some(*reason),
                geometry: previous.copied(),
                heading_deg: None,
            },
        }
    }
}
