//! Chebyshev series evaluation via the Clenshaw recurrence.

use crate::math::algorithms::evalpoints::EvalPoints;

/// Evaluates `Σ a_k T_k(x)` at `x`, a scalar or an array of points.
///
/// Coefficients are stored lowest degree first. If `x` or `ak` is empty the
/// result is [`EvalPoints::empty_output`].
pub fn clenshaw<X: EvalPoints + ?Sized>(x: &X, ak: &[f64]) -> X::Output {
    if x.is_empty_points() || ak.is_empty() {
        return x.empty_output();
    }
    x.map_points(|x| clenshaw_point(x, ak))
}

fn clenshaw_point(x: f64, ak: &[f64]) -> f64 {
    let mut b_k1 = 0.0; // b_{k+1}
    let mut b_k2 = 0.0; // b_{k+2}
    let two_x = 2.0 * x;

    for &a in ak[1..].iter().rev() {
        let b_k = a + two_x * b_k1 - b_k2;
        b_k2 = b_k1;
        b_k1 = b_k;
    }

    // a_0 + ½·(2x)·b_1 - b_2
    ak[0] + x * b_k1 - b_k2
}
