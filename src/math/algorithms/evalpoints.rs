use nalgebra::DVector;

/// Shape of the points handed to an evaluator.
///
/// A scalar evaluates to a scalar and an array evaluates to an array of the
/// same kind, so callers never have to unwrap a one-element collection.
/// Evaluators check `is_empty_points` up front and answer with
/// `empty_output` without running any arithmetic.
pub trait EvalPoints {
    type Output;

    fn is_empty_points(&self) -> bool;

    /// Result returned when there is nothing to evaluate: a zero-length
    /// array, or `NaN` for a scalar point.
    fn empty_output(&self) -> Self::Output;

    fn map_points<F: FnMut(f64) -> f64>(&self, f: F) -> Self::Output;
}

impl EvalPoints for f64 {
    type Output = f64;

    fn is_empty_points(&self) -> bool {
        false
    }

    fn empty_output(&self) -> f64 {
        f64::NAN
    }

    fn map_points<F: FnMut(f64) -> f64>(&self, mut f: F) -> f64 {
        f(*self)
    }
}

impl EvalPoints for [f64] {
    type Output = Vec<f64>;

    fn is_empty_points(&self) -> bool {
        self.is_empty()
    }

    fn empty_output(&self) -> Vec<f64> {
        Vec::new()
    }

    fn map_points<F: FnMut(f64) -> f64>(&self, mut f: F) -> Vec<f64> {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl EvalPoints for Vec<f64> {
    type Output = Vec<f64>;

    fn is_empty_points(&self) -> bool {
        self.is_empty()
    }

    fn empty_output(&self) -> Vec<f64> {
        Vec::new()
    }

    fn map_points<F: FnMut(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.as_slice().map_points(f)
    }
}

impl EvalPoints for DVector<f64> {
    type Output = DVector<f64>;

    fn is_empty_points(&self) -> bool {
        self.is_empty()
    }

    fn empty_output(&self) -> DVector<f64> {
        DVector::zeros(0)
    }

    fn map_points<F: FnMut(f64) -> f64>(&self, mut f: F) -> DVector<f64> {
        self.map(|x| f(x))
    }
}
