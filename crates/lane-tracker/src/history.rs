//! Temporal median filtering of representative slopes

use crate::aggregate::FrameAggregate;
use crate::analysis::SkipReason;
use crate::TrackerError;
use ring_buffer::HistoryBuffer;
use robust_stats::median_of_history;
use serde::Serialize;
use tracing::debug;

/// Slopes after the cross-frame median
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothedSlopes {
    pub left: f64,
    pub right: f64,
    pub mean: f64,
}

impl SmoothedSlopes {
    /// Heading of the mean slope, in degrees
    pub fn heading_deg(&self) -> f64 {
        self.mean.atan().to_degrees()
    }
}

/// Bounded slope history for the left, right and mean slopes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryTracker {
    left: HistoryBuffer<f64>,
    right: HistoryBuffer<f64>,
    mean: HistoryBuffer<f64>,
}

impl HistoryTracker {
    pub fn new(window: usize) -> Result<Self, TrackerError> {
        Ok(Self {
            left: HistoryBuffer::new(window)?,
            right: HistoryBuffer::new(window)?,
            mean: HistoryBuffer::new(window)?,
        })
    }

    /// Record the frame's slopes and return the medians over the window.
    ///
    /// A zero left or right median is rejected; the samples stay in history.
    pub fn update(&mut self, frame: &FrameAggregate) -> Result<SmoothedSlopes, SkipReason> {
        let slopes = SmoothedSlopes {
            left: push_median(&mut self.left, frame.left.representative_slope),
            right: push_median(&mut self.right, frame.right.representative_slope),
            mean: push_median(&mut self.mean, frame.mean_slope),
        };

        debug!(
            left = slopes.left,
            right = slopes.right,
            heading_deg = slopes.heading_deg(),
            window = self.left.len(),
            window_full = self.left.is_full(),
            samples_seen = self.left.total_written(),
            "Slope history updated"
        );

        if slopes.left == 0.0 || slopes.right == 0.0 {
            return Err(SkipReason::DegenerateSlope {
                left: slopes.left,
                right: slopes.right,
            });
        }

        Ok(slopes)
    }

    pub fn left(&self) -> &HistoryBuffer<f64> {
        &self.left
    }

    pub fn right(&self) -> &HistoryBuffer<f64> {
        &self.right
    }

    pub fn mean(&self) -> &HistoryBuffer<f64> {
        &self.mean
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
        self.mean.clear();
    }
}

fn push_median(buffer: &mut HistoryBuffer<f64>, sample: f64) -> f64 {
    buffer.push(sample);
    median_of_history(buffer).unwrap_or(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::FrameObservation;

    fn frame(left: f64, right: f64) -> FrameAggregate {
        let obs = |slope| FrameObservation {
            representative_slope: slope,
            anchor: (0.0, 0.0),
            segment_count: 1,
        };
        FrameAggregate {
            left: obs(left),
            right: obs(right),
            mean_slope: (left + right) / 2.0,
        }
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut history = HistoryTracker::new(5).unwrap();
        for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            history.update(&frame(-v, v)).unwrap();
        }

        assert_eq!(history.right().to_vec(), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(history.left().len(), 5);
    }

    #[test]
    fn test_median_damps_outlier() {
        let mut history = HistoryTracker::new(5).unwrap();
        for _ in 0..4 {
            history.update(&frame(-1.0, 1.0)).unwrap();
        }

        let slopes = history.update(&frame(-25.0, 30.0)).unwrap();
        assert_eq!(slopes.left, -1.0);
        assert_eq!(slopes.right, 1.0);
    }

    #[test]
    fn test_first_frame_passes_through() {
        let mut history = HistoryTracker::new(5).unwrap();
        let slopes = history.update(&frame(-0.8, 1.2)).unwrap();

        assert_eq!(slopes.left, -0.8);
        assert_eq!(slopes.right, 1.2);
        assert!((slopes.mean - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_median_is_degenerate() {
        let mut history = HistoryTracker::new(5).unwrap();
        history.update(&frame(1.0, 1.0)).unwrap();

        let err = history.update(&frame(-1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            SkipReason::DegenerateSlope {
                left: 0.0,
                right: 1.0
            }
        );
        // Samples are retained
        assert_eq!(history.left().len(), 2);
    }

    #[test]
    fn test_heading() {
        let slopes = SmoothedSlopes {
            left: -1.0,
            right: 3.0,
            mean: 1.0,
        };
        assert!((slopes.heading_deg() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            HistoryTracker::new(0),
            Err(TrackerError::Buffer(_))
        ));
    }
}
