use log::debug;
use serde::Serialize;

use crate::math::fun::fun::Fun;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Boundary coordinates of a piecewise function with the function values
/// there, in ascending `x`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BreakData {
    points: Vec<Point2D>
}

impl BreakData {
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn keys(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.x()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.y()).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value stored for the breakpoint exactly at `x`. `-0.0` and `0.0` name
    /// the same breakpoint.
    pub fn get(&self, x: f64) -> Option<f64> {
        // adding +0.0 turns -0.0 into 0.0 and leaves everything else alone
        let x = x + 0.0;
        self.points
            .binary_search_by(|pt| (pt.x() + 0.0).total_cmp(&x))
            .ok()
            .map(|i| self.points[i].y())
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|pt| (pt.x(), pt.y()))
    }
}

/// Collects the endpoint values of contiguous, ordered pieces.
///
/// A boundary shared by two neighbours is stored once, at the mean of the
/// left piece's right end and the right piece's left end, with the mean of
/// the two one-sided values.
pub fn compute_breakdata<F: Fun>(funs: &[F]) -> BreakData {
    let Some(first) = funs.first() else {
        return BreakData::default();
    };

    let mut points = Vec::with_capacity(funs.len() + 1);
    let mut prev_x = first.support().left();
    let mut prev_y = first.endvalues()[0];

    for fun in funs {
        let [xl, xr] = fun.support().values();
        let [yl, yr] = fun.endvalues();
        points.push(Point2D::new(0.5 * (prev_x + xl), 0.5 * (prev_y + yl)));
        prev_x = xr;
        prev_y = yr;
    }
    points.push(Point2D::new(prev_x, prev_y));

    debug!("computed break data at {} points from {} pieces", points.len(), funs.len());
    BreakData { points }
}
