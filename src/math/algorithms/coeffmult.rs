/// Chebyshev coefficients of the product of two Chebyshev expansions.
///
/// Uses `T_i·T_j = (T_{i+j} + T_{|i-j|}) / 2`. For inputs of length `m` and
/// `n` the result has length `m + n - 1`; it is empty if either input is.
pub fn coeffmult(fc: &[f64], gc: &[f64]) -> Vec<f64> {
    if fc.is_empty() || gc.is_empty() {
        return Vec::new();
    }

    let mut hc = vec![0.0; fc.len() + gc.len() - 1];
    for (i, &f) in fc.iter().enumerate() {
        if f == 0.0 {
            continue;
        }
        for (j, &g) in gc.iter().enumerate() {
            let half = 0.5 * f * g;
            hc[i + j] += half;
            hc[i.abs_diff(j)] += half;
        }
    }
    hc
}
