use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A 2-D coordinate pair. Whether `(x, y)` means (longitude, latitude) or
/// planar coordinates is a convention of the consuming system; the codec
/// only requires that everyone agrees on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Total order on `(x, y)`: x first, ties broken by y.
    ///
    /// Uses IEEE-754 total ordering so the sort is deterministic for every
    /// input, including -0.0 and NaN.
    pub fn canonical_cmp(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}
