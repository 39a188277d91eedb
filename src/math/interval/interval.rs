use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::algorithms::evalpoints::EvalPoints;
use crate::math::interval::intervalerror::IntervalError;

#[derive(Deserialize)]
struct IntervalJsonProp {
    left: f64,
    right: f64
}

/// Ordered sub-range `[left, right]` of the real line together with the
/// affine map from the reference domain `[-1, 1]` onto it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalJsonProp")]
pub struct Interval {
    left: f64,
    right: f64
}

impl Interval {
    pub fn new(left: f64, right: f64) -> Result<Interval, IntervalError> {
        // written as a negation so NaN endpoints are rejected too
        if !(left < right) {
            return Err(IntervalError::InvalidValues { left, right });
        }
        Ok(Interval { left, right })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn values(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `other in self`: true when `other` lies entirely inside this interval,
    /// endpoints included.
    pub fn contains(&self, other: &Interval) -> bool {
        (self.left <= other.left) && (other.right <= self.right)
    }

    /// Sends points of the reference domain `[-1, 1]` to `[left, right]`.
    ///
    /// Written as `½·right·(y+1) + ½·left·(1-y)` so that `±1` land exactly on
    /// the endpoints.
    pub fn map<X: EvalPoints + ?Sized>(&self, y: &X) -> X::Output {
        let (left, right) = (self.left, self.right);
        y.map_points(|y| 0.5 * right * (y + 1.0) + 0.5 * left * (1.0 - y))
    }

    /// Inverse of [`Interval::map`]: `(2x - left - right)/(right - left)`,
    /// regrouped so the endpoints go back to exactly `±1`.
    pub fn invmap<X: EvalPoints + ?Sized>(&self, x: &X) -> X::Output {
        let (left, right) = (self.left, self.right);
        let width = self.width();
        x.map_points(|x| ((x - left) - (right - x)) / width)
    }

    pub fn is_interior_point(&self, x: f64) -> bool {
        (x > self.left) && (x < self.right)
    }

    /// Elementwise strict membership; both endpoints count as exterior.
    pub fn is_interior(&self, x: &[f64]) -> Vec<bool> {
        x.iter()
            .map(|&x| self.is_interior_point(x))
            .collect()
    }
}

impl Default for Interval {
    fn default() -> Interval {
        Interval { left: -1.0, right: 1.0 }
    }
}

impl TryFrom<IntervalJsonProp> for Interval {
    type Error = IntervalError;

    fn try_from(prop: IntervalJsonProp) -> Result<Interval, IntervalError> {
        Interval::new(prop.left, prop.right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}
