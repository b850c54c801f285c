//! Lane endpoint solving from slope and anchor
//!
//! Each boundary is the line `y = m·x + b` through its anchor point. Both
//! boundaries are evaluated at two fixed heights: the top of the observed
//! segments and the bottom of the frame.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates
pub type Point = (f64, f64);

/// Line in slope-intercept form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneLine {
    pub slope: f64,
    pub intercept: f64,
}

impl LaneLine {
    /// Line with the given slope through `anchor`
    pub fn through(slope: f64, anchor: Point) -> Self {
        Self {
            slope,
            intercept: anchor.1 - slope * anchor.0,
        }
    }

    /// x at height y. The slope must be non-zero.
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Two lane boundaries, each as a top and bottom endpoint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LaneGeometry {
    pub lx1: f64,
    pub ly1: f64,
    pub lx2: f64,
    pub ly2: f64,
    pub rx1: f64,
    pub ry1: f64,
    pub rx2: f64,
    pub ry2: f64,
}

impl LaneGeometry {
    pub fn to_array(&self) -> [f64; 8] {
        [
            self.lx1, self.ly1, self.lx2, self.ly2, self.rx1, self.ry1, self.rx2, self.ry2,
        ]
    }

    pub fn from_array([lx1, ly1, lx2, ly2, rx1, ry1, rx2, ry2]: [f64; 8]) -> Self {
        Self {
            lx1,
            ly1,
            lx2,
            ly2,
            rx1,
            ry1,
            rx2,
            ry2,
        }
    }

    pub fn left_line(&self) -> (Point, Point) {
        ((self.lx1, self.ly1), (self.lx2, self.ly2))
    }

    pub fn right_line(&self) -> (Point, Point) {
        ((self.rx1, self.ry1), (self.rx2, self.ry2))
    }

    /// Midpoint of the top endpoints to midpoint of the bottom endpoints
    pub fn centerline(&self) -> (Point, Point) {
        (
            ((self.lx1 + self.rx1) / 2.0, (self.ly1 + self.ry1) / 2.0),
            ((self.lx2 + self.rx2) / 2.0, (self.ly2 + self.ry2) / 2.0),
        )
    }

    /// Element-wise `(1 - alpha) * self + alpha * current`
    pub fn blend(&self, current: &LaneGeometry, alpha: f64) -> LaneGeometry {
        let prev = self.to_array();
        let cur = current.to_array();
        let mut out = [0.0; 8];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (1.0 - alpha) * prev[i] + alpha * cur[i];
        }
        LaneGeometry::from_array(out)
    }

    /// Largest absolute coordinate difference
    pub fn max_abs_diff(&self, other: &LaneGeometry) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

/// Solve both boundaries between `y_top` and `y_bottom`.
///
/// When the top endpoints cross (`lx1 > rx1`) they are joined at their mean x,
/// and each top y is taken from its own line at that x. Bottom endpoints always
/// stay at `y_bottom`.
pub fn solve(left: LaneLine, right: LaneLine, y_top: f64, y_bottom: f64) -> LaneGeometry {
    let mut g = LaneGeometry {
        lx1: left.x_at(y_top),
        ly1: y_top,
        lx2: left.x_at(y_bottom),
        ly2: y_bottom,
        rx1: right.x_at(y_top),
        ry1: y_top,
        rx2: right.x_at(y_bottom),
        ry2: y_bottom,
    };

    if g.lx1 > g.rx1 {
        let x = (g.lx1 + g.rx1) / 2.0;
        g.lx1 = x;
        g.rx1 = x;
        g.ly1 = left.y_at(x);
        g.ry1 = right.y_at(x);
    }

    g
}
