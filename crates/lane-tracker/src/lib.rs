//! Lane Tracker
//!
//! Turns per-frame Hough line segments into two stable lane boundaries and a
//! centerline:
//! - Slope-sign classification into left/right candidates
//! - Per-frame median aggregation (slope and anchor segment)
//! - Cross-frame median over a bounded slope history
//! - Endpoint solving with a crossing guard
//! - Exponential smoothing between frames
//!
//! One [`LaneTracker`] holds the state of one video stream.

pub mod aggregate;
pub mod analysis;
pub mod classify;
pub mod config;
pub mod geometry;
pub mod history;
pub mod render;
pub mod segment;
pub mod smoother;

pub use aggregate::{FrameAggregate, FrameObservation};
pub use analysis::{FrameOutcome, FrameResult, SkipReason};
pub use classify::{ClassifiedSegments, SegmentClassifier};
pub use config::{RenderConfig, TrackerConfig, VerticalSegmentPolicy};
pub use geometry::{LaneGeometry, LaneLine};
pub use history::{HistoryTracker, SmoothedSlopes};
pub use render::LaneRenderer;
pub use segment::{FrameSegments, LaneSide, Segment};
pub use smoother::{TemporalSmoother, TrackingPhase};

use image::RgbaImage;
use ring_buffer::BufferError;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Tracker construction errors
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("History buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Lane tracking session for a single video stream
pub struct LaneTracker {
    config: TrackerConfig,
    classifier: SegmentClassifier,
    history: HistoryTracker,
    smoother: TemporalSmoother,
    renderer: LaneRenderer,
    frames_processed: u64,
    frames_skipped: u64,
}

impl LaneTracker {
    /// Create a new tracker with configuration
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;

        info!(
            slope_threshold = config.slope_threshold,
            history_window = config.history_window,
            smoothing_alpha = config.smoothing_alpha,
            "Creating lane tracker"
        );

        Ok(Self {
            classifier: SegmentClassifier::new(&config),
            history: HistoryTracker::new(config.history_window)?,
            smoother: TemporalSmoother::new(config.smoothing_alpha),
            renderer: LaneRenderer::new(config.render.clone()),
            config,
            frames_processed: 0,
            frames_skipped: 0,
        })
    }

    /// Process one frame of segments
    pub fn process_frame(&mut self, frame: &FrameSegments) -> FrameOutcome {
        self.frames_processed += 1;
        metrics::counter!("lane_tracker_frames_total").increment(1);

        match self.track(frame) {
            Ok(result) => FrameOutcome::Tracked(result),
            Err(reason) => {
                self.frames_skipped += 1;
                metrics::counter!("lane_tracker_frames_skipped_total", "reason" => reason.label())
                    .increment(1);
                warn!(sequence = ?frame.sequence, "Frame skipped: {}", reason);
                FrameOutcome::Skipped(reason)
            }
        }
    }

    fn track(&mut self, frame: &FrameSegments) -> Result<FrameResult, SkipReason> {
        let classified = self.classifier.classify(&frame.segments, frame.height)?;
        let observed = aggregate::aggregate(&classified)?;
        let slopes = self.history.update(&observed)?;

        let left = LaneLine::through(slopes.left, observed.left.anchor);
        let right = LaneLine::through(slopes.right, observed.right.anchor);
        let raw_geometry = geometry::solve(left, right, classified.y_top, frame.height as f64);
        let geometry = self.smoother.smooth(raw_geometry);

        let heading_deg = slopes.heading_deg();
        debug!(
            sequence = ?frame.sequence,
            left_slope = slopes.left,
            right_slope = slopes.right,
            heading_deg,
            "Frame tracked"
        );

        Ok(FrameResult {
            sequence: frame.sequence,
            geometry,
            raw_geometry,
            slopes,
            heading_deg,
            left: observed.left,
            right: observed.right,
        })
    }

    /// Last good geometry (reused while frames are skipped)
    pub fn current_geometry(&self) -> Option<&LaneGeometry> {
        self.smoother.previous()
    }

    pub fn phase(&self) -> TrackingPhase {
        self.smoother.phase()
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Draw geometry onto a fresh transparent overlay
    pub fn render(&self, geometry: &LaneGeometry, width: u32, height: u32) -> RgbaImage {
        self.renderer.render(geometry, width, height)
    }

    /// Start a new session (on stream change)
    pub fn reset(&mut self) {
        info!(
            frames_processed = self.frames_processed,
            frames_skipped = self.frames_skipped,
            "Resetting lane tracker"
        );
        self.history.clear();
        self.smoother.reset();
        self.frames_processed = 0;
        self.frames_skipped = 0;
    }
}
