//! Exponential smoothing of solved lane geometry

use crate::geometry::LaneGeometry;
use serde::{Deserialize, Serialize};

/// Session phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingPhase {
    /// No frame has been tracked yet
    #[default]
    Uninitialized,
    /// At least one frame has produced geometry
    Tracking,
}

/// One-frame exponential moving average over the 8 geometry scalars
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalSmoother {
    alpha: f64,
    phase: TrackingPhase,
    previous: Option<LaneGeometry>,
}

impl TemporalSmoother {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            phase: TrackingPhase::Uninitialized,
            previous: None,
        }
    }

    /// Blend `current` with the previous output and store the result.
    ///
    /// The first frame of a session is adopted unchanged.
    pub fn smooth(&mut self, current: LaneGeometry) -> LaneGeometry {
        let next = match (self.phase, self.previous) {
            (TrackingPhase::Tracking, Some(prev)) => prev.blend(&current, self.alpha),
            _ => {
                self.phase = TrackingPhase::Tracking;
                current
            }
        };
        self.previous = Some(next);
        next
    }

    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }

    /// Last smoothed geometry
    pub fn previous(&self) -> Option<&LaneGeometry> {
        self.previous.as_ref()
    }

    pub fn reset(&mut self) {
        self.phase = TrackingPhase::Uninitialized;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_frame_adopted() {
        let mut smoother = TemporalSmoother::new(0.9);
        let g = LaneGeometry::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

        assert_eq!(smoother.phase(), TrackingPhase::Uninitialized);
        assert_eq!(smoother.smooth(g), g);
        assert_eq!(smoother.phase(), TrackingPhase::Tracking);
        assert_eq!(smoother.previous(), Some(&g));
    }

    #[test]
    fn test_blends_after_first() {
        let mut smoother = TemporalSmoother::new(0.9);
        smoother.smooth(LaneGeometry::from_array([100.0; 8]));

        let out = smoother.smooth(LaneGeometry::from_array([200.0; 8]));
        for v in out.to_array() {
            assert!((v - 190.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reset_restarts_session() {
        let mut smoother = TemporalSmoother::new(0.5);
        smoother.smooth(LaneGeometry::from_array([100.0; 8]));
        smoother.reset();

        let g = LaneGeometry::from_array([7.0; 8]);
        assert_eq!(smoother.smooth(g), g);
    }

    proptest! {
        #[test]
        fn prop_constant_input_converges(
            alpha in 0.05f64..=1.0,
            start in proptest::array::uniform8(-1000.0f64..1000.0),
            target in proptest::array::uniform8(-1000.0f64..1000.0),
        ) {
            let mut smoother = TemporalSmoother::new(alpha);
            smoother.smooth(LaneGeometry::from_array(start));

            let target = LaneGeometry::from_array(target);
            let mut out = target;
            for _ in 0..500 {
                out = smoother.smooth(target);
            }
            prop_assert!(out.max_abs_diff(&target) < 1e-6);
        }
    }
}
