use crate::math::algorithms::evalpoints::EvalPoints;

// ─────────────────────────────────────────────────────────────────────────────
// Barycentric interpolation formula (2nd kind)
// ─────────────────────────────────────────────────────────────────────────────
//
//   p(x) = Σ v_i·f_i/(x-x_i) / Σ v_i/(x-x_i)
//
// Any valid barycentric weight vector works; for Chebyshev points of the
// second kind these are (-1)^j with the two boundary weights halved.
//
// A point that coincides exactly with a node returns that node's value, the
// rational form would otherwise produce 0/0 there. The same holds for a point
// so close to a node that v_i/(x-x_i) overflows.

/// Evaluates the barycentric interpolant through `(xk, fk)` with weights `vk`
/// at `x`, a scalar or an array of points.
///
/// If `x`, `fk`, `xk` or `vk` is empty the result is
/// [`EvalPoints::empty_output`].
pub fn bary<X: EvalPoints + ?Sized>(x: &X, fk: &[f64], xk: &[f64], vk: &[f64]) -> X::Output {
    if x.is_empty_points() || fk.is_empty() || xk.is_empty() || vk.is_empty() {
        return x.empty_output();
    }
    debug_assert_eq!(fk.len(), xk.len());
    debug_assert_eq!(xk.len(), vk.len());

    x.map_points(|x| bary_point(x, fk, xk, vk))
}

fn bary_point(x: f64, fk: &[f64], xk: &[f64], vk: &[f64]) -> f64 {
    if let Some(i) = xk.iter().position(|&xi| xi == x) {
        return fk[i];
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for ((&fi, &xi), &vi) in fk.iter().zip(xk).zip(vk) {
        let temp = vi / (x - xi);
        if !temp.is_finite() {
            return fi;
        }
        numerator += temp * fi;
        denominator += temp;
    }

    numerator / denominator
}
