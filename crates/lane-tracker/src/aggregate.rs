//! Per-frame median aggregation of classified segments

use crate::analysis::SkipReason;
use crate::classify::{ClassifiedSegment, ClassifiedSegments};
use robust_stats::{elementwise_median, median};
use serde::Serialize;

/// Median summary of one side's segments in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameObservation {
    /// Median slope of the side's segments
    pub representative_slope: f64,
    /// First endpoint of the element-wise median segment
    pub anchor: (f64, f64),
    /// Number of segments summarised
    pub segment_count: usize,
}

/// Both sides' observations for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameAggregate {
    pub left: FrameObservation,
    pub right: FrameObservation,
    /// Mean of the two representative slopes
    pub mean_slope: f64,
}

/// Summarise a classified frame. Both sides must be populated.
pub fn aggregate(classified: &ClassifiedSegments) -> Result<FrameAggregate, SkipReason> {
    let (left, right) = match (observe(&classified.left), observe(&classified.right)) {
        (Some(left), Some(right)) => (left, right),
        _ => {
            return Err(SkipReason::LaneNotDetected {
                left: classified.left.len(),
                right: classified.right.len(),
            })
        }
    };

    Ok(FrameAggregate {
        left,
        right,
        mean_slope: (left.representative_slope + right.representative_slope) / 2.0,
    })
}

fn observe(side: &[ClassifiedSegment]) -> Option<FrameObservation> {
    let slopes: Vec<f64> = side.iter().map(|c| c.slope).collect();
    let representative_slope = median(&slopes)?;

    let coords: Vec<[f64; 4]> = side.iter().map(|c| c.segment.to_f64()).collect();
    let [x1, y1, _, _] = elementwise_median(&coords)?;

    Some(FrameObservation {
        representative_slope,
        anchor: (x1, y1),
        segment_count: side.len(),
    })
}
