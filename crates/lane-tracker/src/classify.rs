//! Segment classification into left/right lane candidates

use crate::analysis::SkipReason;
use crate::config::{TrackerConfig, VerticalSegmentPolicy};
use crate::segment::{LaneSide, Segment};
use tracing::trace;

/// A segment routed to one lane side, with its slope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedSegment {
    pub segment: Segment,
    pub slope: f64,
}

/// Result of classifying one frame's segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedSegments {
    pub left: Vec<ClassifiedSegment>,
    pub right: Vec<ClassifiedSegment>,
    /// Segments dropped by the slope threshold or the vertical policy
    pub discarded: usize,
    /// Highest point reached by any segment (smallest y), capped at frame height
    pub y_top: f64,
}

impl ClassifiedSegments {
    pub fn side(&self, side: LaneSide) -> &[ClassifiedSegment] {
        match side {
            LaneSide::Left => &self.left,
            LaneSide::Right => &self.right,
        }
    }
}

/// Slope-sign classifier
///
/// Image y grows downward, so the left boundary climbs to the right with a
/// negative slope and the right boundary with a positive one.
#[derive(Debug, Clone)]
pub struct SegmentClassifier {
    threshold: f64,
    vertical_policy: VerticalSegmentPolicy,
}

impl SegmentClassifier {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            threshold: config.slope_threshold,
            vertical_policy: config.vertical_policy,
        }
    }

    /// Slope used for classification, per the vertical segment policy
    pub fn effective_slope(&self, segment: &Segment) -> Option<f64> {
        match (segment.slope(), self.vertical_policy) {
            (Some(slope), _) => Some(slope),
            (None, VerticalSegmentPolicy::DeltaY) => Some(segment.dy() as f64),
            (None, VerticalSegmentPolicy::Exclude) => None,
        }
    }

    /// Side for a given slope, or `None` when it is too shallow
    pub fn side_for(&self, slope: f64) -> Option<LaneSide> {
        if slope < -self.threshold {
            Some(LaneSide::Left)
        } else if slope > self.threshold {
            Some(LaneSide::Right)
        } else {
            None
        }
    }

    /// Partition a frame's segments by side
    pub fn classify(
        &self,
        segments: &[Segment],
        frame_height: u32,
    ) -> Result<ClassifiedSegments, SkipReason> {
        if segments.is_empty() {
            return Err(SkipReason::NoLinesDetected);
        }

        let mut out = ClassifiedSegments {
            y_top: frame_height as f64,
            ..Default::default()
        };

        for segment in segments {
            out.y_top = out.y_top.min(segment.min_y() as f64);

            let routed = self
                .effective_slope(segment)
                .and_then(|slope| self.side_for(slope).map(|side| (side, slope)));

            match routed {
                Some((LaneSide::Left, slope)) => out.left.push(ClassifiedSegment {
                    segment: *segment,
                    slope,
                }),
                Some((LaneSide::Right, slope)) => out.right.push(ClassifiedSegment {
                    segment: *segment,
                    slope,
                }),
                None => out.discarded += 1,
            }
        }

        trace!(
            left = out.left.len(),
            right = out.right.len(),
            discarded = out.discarded,
            y_top = out.y_top,
            "Classified segments"
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(policy: VerticalSegmentPolicy) -> SegmentClassifier {
        SegmentClassifier::new(&TrackerConfig {
            vertical_policy: policy,
            ..Default::default()
        })
    }

    #[test]
    fn test_routes_by_slope_sign() {
        let c = classifier(VerticalSegmentPolicy::DeltaY);
        let segments = [
            Segment::new(100, 400, 200, 300), // -1.0
            Segment::new(300, 300, 400, 400), // +1.0
            Segment::new(0, 100, 100, 110),   // 0.1, too shallow
        ];

        let out = c.classify(&segments, 400).unwrap();
        assert_eq!(out.left.len(), 1);
        assert_eq!(out.right.len(), 1);
        assert_eq!(out.discarded, 1);
        assert_eq!(out.left[0].slope, -1.0);
        assert_eq!(out.side(LaneSide::Right)[0].segment, segments[1]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let c = classifier(VerticalSegmentPolicy::DeltaY);
        // Slopes of exactly +/-0.4
        let segments = [Segment::new(0, 0, 10, 4), Segment::new(0, 4, 10, 0)];

        let out = c.classify(&segments, 100).unwrap();
        assert!(out.left.is_empty());
        assert!(out.right.is_empty());
        assert_eq!(out.discarded, 2);
    }

    #[test]
    fn test_y_top_tracks_all_segments() {
        let c = classifier(VerticalSegmentPolicy::DeltaY);
        let segments = [
            Segment::new(100, 400, 200, 300),
            Segment::new(0, 120, 100, 125), // discarded but still moves y_top
        ];

        let out = c.classify(&segments, 400).unwrap();
        assert_eq!(out.y_top, 120.0);
    }

    #[test]
    fn test_y_top_capped_at_frame_height() {
        let c = classifier(VerticalSegmentPolicy::DeltaY);
        let out = c.classify(&[Segment::new(0, 600, 100, 500)], 360).unwrap();
        assert_eq!(out.y_top, 360.0);
    }

    #[test]
    fn test_empty_frame() {
        let c = classifier(VerticalSegmentPolicy::DeltaY);
        assert_eq!(c.classify(&[], 400), Err(SkipReason::NoLinesDetected));
    }

    #[test]
    fn test_vertical_delta_y_policy() {
        let c = classifier(VerticalSegmentPolicy::DeltaY);
        let up = Segment::new(50, 300, 50, 200); // dy = -100
        let down = Segment::new(60, 200, 60, 300); // dy = +100

        let out = c.classify(&[up, down], 400).unwrap();
        assert_eq!(out.left[0].slope, -100.0);
        assert_eq!(out.right[0].slope, 100.0);
    }

    #[test]
    fn test_vertical_exclude_policy() {
        let c = classifier(VerticalSegmentPolicy::Exclude);
        let out = c
            .classify(&[Segment::new(50, 300, 50, 200)], 400)
            .unwrap();
        assert!(out.left.is_empty());
        assert_eq!(out.discarded, 1);
        assert_eq!(out.y_top, 200.0);
    }
}
