//! Line segment input types

use serde::{Deserialize, Deserializer, Serialize};

/// Straight line candidate from the upstream Hough stage.
///
/// Pixel coordinates, y grows downward. Serialized as `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal extent (x2 - x1), widened so any i32 pair fits
    pub fn dx(&self) -> i64 {
        i64::from(self.x2) - i64::from(self.x1)
    }

    /// Vertical extent (y2 - y1), widened so any i32 pair fits
    pub fn dy(&self) -> i64 {
        i64::from(self.y2) - i64::from(self.y1)
    }

    /// Whether both endpoints share an x coordinate
    pub fn is_vertical(&self) -> bool {
        self.dx() == 0
    }

    /// Slope dy/dx, or `None` for a vertical segment
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.dy() as f64 / self.dx() as f64)
        }
    }

    /// Smaller of the two endpoint y coordinates
    pub fn min_y(&self) -> i32 {
        self.y1.min(self.y2)
    }

    /// Coordinates as floats, `[x1, y1, x2, y2]`
    pub fn to_f64(&self) -> [f64; 4] {
        [
            self.x1 as f64,
            self.y1 as f64,
            self.x2 as f64,
            self.y2 as f64,
        ]
    }
}

impl From<[i32; 4]> for Segment {
    fn from([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<Segment> for [i32; 4] {
    fn from(s: Segment) -> Self {
        [s.x1, s.y1, s.x2, s.y2]
    }
}

/// Lane boundary side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneSide {
    Left,
    Right,
}

/// One frame's worth of upstream line detection output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSegments {
    /// Detected segments; `null` or missing means none were found
    #[serde(default, deserialize_with = "null_as_empty")]
    pub segments: Vec<Segment>,
    /// Frame height in pixels
    pub height: u32,
    /// Frame width in pixels
    pub width: u32,
    /// Frame sequence number, if the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
}

impl FrameSegments {
    pub fn new(segments: Vec<Segment>, height: u32, width: u32) -> Self {
        Self {
            segments,
            height,
            width,
            sequence: None,
        }
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = Some(sequence);
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Segment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Segment>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope() {
        assert_eq!(Segment::new(100, 400, 200, 300).slope(), Some(-1.0));
        assert_eq!(Segment::new(300, 300, 400, 400).slope(), Some(1.0));
        assert_eq!(Segment::new(10, 0, 10, 50).slope(), None);
    }

    #[test]
    fn test_extreme_coordinates_keep_sign() {
        let wide = Segment::new(-2_000_000_000, 400, 2_000_000_000, 300);
        assert_eq!(wide.dx(), 4_000_000_000);
        assert!(wide.slope().unwrap() < 0.0);

        let tall = Segment::new(0, i32::MIN, 1, i32::MAX);
        assert_eq!(tall.dy(), u32::MAX as i64);
        assert!(tall.slope().unwrap() > 0.0);
    }

    #[test]
    fn test_segment_serializes_as_array() {
        let json = serde_json::to_string(&Segment::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "[1,2,3,4]");
    }

    #[test]
    fn test_frame_null_segments() {
        let frame: FrameSegments =
            serde_json::from_str(r#"{"segments": null, "height": 10, "width": 20}"#).unwrap();
        assert!(frame.segments.is_empty());
        assert_eq!(frame.sequence, None);

        let frame: FrameSegments = serde_json::from_str(
            r#"{"segments": [[0, 1, 2, 3]], "height": 10, "width": 20, "sequence": 7}"#,
        )
        .unwrap();
        assert_eq!(frame.segments, vec![Segment::new(0, 1, 2, 3)]);
        assert_eq!(frame.sequence, Some(7));
    }
}
