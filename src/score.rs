//! Per-race scores and fractional points comparison.

use serde::Serialize;
use std::cmp::Ordering;

/// Points are compared on this grid, so averages that are equal in exact
/// arithmetic compare equal despite floating point rounding.
const POINTS_RESOLUTION: f64 = 1e6;

/// The points a boat earned in one race and whether they were discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub points: f64,
    pub discarded: bool,
}

impl Score {
    pub fn new(points: f64) -> Self {
        Self {
            points,
            discarded: false,
        }
    }

    /// Placeholder for an average-points score not yet computed.
    pub fn placeholder() -> Self {
        Self::new(0.0)
    }

    pub fn is_placeholder(&self) -> bool {
        self.points <= 0.0
    }
}

fn points_key(points: f64) -> i64 {
    (points * POINTS_RESOLUTION).round() as i64
}

/// Total order on points.
pub fn cmp_points(a: f64, b: f64) -> Ordering {
    points_key(a).cmp(&points_key(b))
}

/// Format points for display: whole numbers without decimals, anything else
/// with one decimal place.
pub fn format_points(points: f64) -> String {
    if points.rem_euclid(1.0) < 0.01 {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}
