//! Lane Tracking Driver
//!
//! Replays a recorded stream of per-frame Hough segments through a
//! [`LaneTracker`], writing one JSON record per frame and, optionally, a PNG
//! overlay per frame for the compositor.

mod report;
mod settings;

pub use report::{FrameRecord, FrameStatus};
pub use settings::{load_config, ENV_PREFIX};

use anyhow::{Context, Result};
use lane_tracker::{FrameSegments, LaneTracker, TrackerConfig};
use std::fs;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Totals for one replayed stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub tracked: usize,
    pub skipped: usize,
}

/// Read a JSON array of frames
pub fn read_frames(path: &Path) -> Result<Vec<FrameSegments>> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open input {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse frames from {}", path.display()))
}

/// Run frames through a fresh tracker, writing JSON lines to `out`.
///
/// With `overlay_dir`, each frame that has geometry (new or reused) gets a
/// `frame_NNNNNN.png` overlay.
pub fn process_stream<W: Write>(
    config: TrackerConfig,
    frames: &[FrameSegments],
    out: &mut W,
    overlay_dir: Option<&Path>,
) -> Result<RunSummary> {
    let mut tracker = LaneTracker::new(config)?;
    let mut summary = RunSummary::default();

    if let Some(dir) = overlay_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create overlay directory {}", dir.display()))?;
    }

    for (index, frame) in frames.iter().enumerate() {
        let sequence = frame.sequence.unwrap_or(index as u64);
        let outcome = tracker.process_frame(frame);

        summary.frames += 1;
        if outcome.is_tracked() {
            summary.tracked += 1;
        } else {
            summary.skipped += 1;
        }

        let record = FrameRecord::new(sequence, &outcome, tracker.current_geometry());
        serde_json::to_writer(&mut *out, &record).context("Failed to write frame record")?;
        writeln!(out).context("Failed to write frame record")?;

        if let (Some(dir), Some(geometry)) = (overlay_dir, record.geometry.as_ref()) {
            let path = overlay_path(dir, sequence);
            tracker
                .render(geometry, frame.width, frame.height)
                .save(&path)
                .with_context(|| format!("Failed to write overlay {}", path.display()))?;
        }
    }

    out.flush().context("Failed to flush output")?;

    info!(
        frames = summary.frames,
        tracked = summary.tracked,
        skipped = summary.skipped,
        "Stream complete"
    );

    Ok(summary)
}

pub fn overlay_path(dir: &Path, sequence: u64) -> PathBuf {
    dir.join(format!("frame_{sequence:06}.png"))
}
