use crate::math::interval::interval::Interval;

/// A function piece living on a single bounded interval.
pub trait Fun {
    fn support(&self) -> Interval;

    /// Values at the left and right end of the support.
    fn endvalues(&self) -> [f64; 2];

    fn value(&self, x: f64) -> f64;
}
