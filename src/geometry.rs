//! Points in the plane and the distances between them.
use crate::units::Distance;
use serde::Deserialize;

/// A location in two dimensions.
///
/// In configuration files this is written as a two-element array, `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    /// The x coordinate
    pub x: f64,
    /// The y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new [`Point`]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// The Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> Distance {
    Distance((b.x - a.x).hypot(b.y - a.y))
}
