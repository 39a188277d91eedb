use std::f64::consts::PI;

use log::{
    debug,
    warn
};
use nalgebra::{
    DMatrix,
    DVector
};

use crate::configuration::{
    Preferences,
    MAX_MAXPOW2
};
use crate::math::algorithms::barycentric::bary;
use crate::math::algorithms::clenshaw::clenshaw;
use crate::math::algorithms::evalpoints::EvalPoints;
use crate::math::chebtech::evaluationmethod::EvaluationMethod;

// ─────────────────────────────────────────────────────────────────────────────
// Chebtech2
// ─────────────────────────────────────────────────────────────────────────────
//
// Chebyshev expansion on [-1, 1] tied to the Chebyshev points of the second
// kind
//
//   x_j = -cos(π·j/m),  j = 0..=m,  m = n - 1
//
// The coefficients are the only stored state; values at the points and the
// barycentric weights are rebuilt when asked for. Values and coefficients are
// related by a DCT-I:
//
//   v_j = Σ_k c_k·T_k(x_j)
//   c_k = (s_k/m)·Σ_j δ_j·v_j·T_k(x_j),   s_0 = s_m = 1, else 2
//                                         δ_0 = δ_m = ½, else 1

const MIN_POW2: u32 = 4;

/// Tail coefficients below `CHOP_FACTOR·eps·vscale` count as resolved.
const CHOP_FACTOR: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chebtech2 {
    coeffs: Vec<f64>,
}

impl Chebtech2 {
    pub fn initempty() -> Chebtech2 {
        Chebtech2 { coeffs: Vec::new() }
    }

    pub fn initconst(c: f64) -> Chebtech2 {
        Chebtech2 { coeffs: vec![c] }
    }

    pub fn initcoeffs(coeffs: Vec<f64>) -> Chebtech2 {
        Chebtech2 { coeffs }
    }

    /// Interpolant through `values` sampled at `chebpts(values.len())`.
    pub fn initvalues(values: &[f64]) -> Chebtech2 {
        Chebtech2 { coeffs: Self::vals2coeffs(values) }
    }

    /// Interpolant of `f` on exactly `n` Chebyshev points.
    pub fn initfun_fixedlen<F: Fn(f64) -> f64>(f: F, n: usize) -> Chebtech2 {
        let values: Vec<f64> = Self::chebpts(n).into_iter().map(&f).collect();
        Self::initvalues(&values)
    }

    /// Samples `f` on `2^k + 1` points for increasing `k` until the trailing
    /// coefficients drop below the tolerance set by `prefs`, then chops the
    /// negligible tail. `prefs.maxpow2` is clamped to `MIN_POW2..=MAX_MAXPOW2`.
    pub fn initfun_adaptive<F: Fn(f64) -> f64>(f: F, prefs: &Preferences) -> Chebtech2 {
        let maxpow2 = prefs.maxpow2.clamp(MIN_POW2, MAX_MAXPOW2);
        let mut coeffs = Vec::new();

        for k in MIN_POW2..=maxpow2 {
            let n = (1usize << k) + 1;
            let values: Vec<f64> = Self::chebpts(n).into_iter().map(&f).collect();
            let vscale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
            if vscale == 0.0 {
                debug!("adaptive construction: zero function on {} points", n);
                return Self::initconst(0.0);
            }

            coeffs = Self::vals2coeffs(&values);
            let tol = CHOP_FACTOR * prefs.eps * vscale;
            if coeffs[n - 2..].iter().all(|c| c.abs() <= tol) {
                let len = coeffs
                    .iter()
                    .rposition(|c| c.abs() > tol)
                    .map_or(1, |i| i + 1);
                coeffs.truncate(len);
                debug!("adaptive construction: resolved on {} points, kept {} coefficients", n, len);
                return Chebtech2 { coeffs };
            }
        }

        warn!(
            "adaptive construction did not converge within 2^{} + 1 points; returning unchopped coefficients",
            maxpow2
        );
        Chebtech2 { coeffs }
    }

    // ─────────────────────────────────────────────
    // Points, weights and transforms
    // ─────────────────────────────────────────────

    /// Chebyshev points of the second kind in ascending order.
    ///
    /// Written with `sin` so the set is exactly antisymmetric and holds
    /// ±1 (and 0 for odd `n`) exactly.
    pub fn chebpts(n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let m = (n - 1) as f64;
                (0..n)
                    .map(|j| (PI * (2.0 * j as f64 - m) / (2.0 * m)).sin())
                    .collect()
            }
        }
    }

    /// Barycentric weights for `chebpts(n)`: alternating signs, halved at
    /// both ends.
    pub fn barywts(n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![1.0],
            _ => {
                let mut wts: Vec<f64> = (0..n)
                    .map(|j| if (n - 1 - j) % 2 == 0 { 1.0 } else { -1.0 })
                    .collect();
                wts[0] *= 0.5;
                wts[n - 1] *= 0.5;
                wts
            }
        }
    }

    /// Values at `chebpts(n)` → Chebyshev coefficients.
    pub fn vals2coeffs(values: &[f64]) -> Vec<f64> {
        let n = values.len();
        if n <= 1 {
            return values.to_vec();
        }
        let m = n - 1;
        let mf = m as f64;

        let transform = DMatrix::from_fn(n, n, |k, j| {
            let scale = if k == 0 || k == m { 1.0 / mf } else { 2.0 / mf };
            let half = if j == 0 || j == m { 0.5 } else { 1.0 };
            scale * half * cheb_t_at_node(k, j, m)
        });
        let coeffs = transform * DVector::from_column_slice(values);
        coeffs.iter().copied().collect()
    }

    /// Chebyshev coefficients → values at `chebpts(n)`.
    pub fn coeffs2vals(coeffs: &[f64]) -> Vec<f64> {
        let n = coeffs.len();
        if n <= 1 {
            return coeffs.to_vec();
        }
        let m = n - 1;

        let transform = DMatrix::from_fn(n, n, |j, k| cheb_t_at_node(k, j, m));
        let values = transform * DVector::from_column_slice(coeffs);
        values.iter().copied().collect()
    }

    // ─────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn values(&self) -> Vec<f64> {
        Self::coeffs2vals(&self.coeffs)
    }

    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_const(&self) -> bool {
        self.coeffs.len() == 1
    }

    /// Largest absolute value at the Chebyshev points; 0 when empty.
    pub fn vscale(&self) -> f64 {
        self.values()
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Same expansion with `n` coefficients: zero-padded or truncated.
    pub fn prolong(&self, n: usize) -> Chebtech2 {
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(n, 0.0);
        Chebtech2 { coeffs }
    }

    // ─────────────────────────────────────────────
    // Evaluation
    // ─────────────────────────────────────────────

    pub fn eval<X: EvalPoints + ?Sized>(&self, x: &X, method: EvaluationMethod) -> X::Output {
        match method {
            EvaluationMethod::Clenshaw    => self.eval_clenshaw(x),
            EvaluationMethod::Barycentric => self.eval_bary(x),
        }
    }

    pub fn eval_clenshaw<X: EvalPoints + ?Sized>(&self, x: &X) -> X::Output {
        clenshaw(x, &self.coeffs)
    }

    pub fn eval_bary<X: EvalPoints + ?Sized>(&self, x: &X) -> X::Output {
        let n = self.size();
        bary(x, &self.values(), &Self::chebpts(n), &Self::barywts(n))
    }
}

/// `T_k(x_j)` on the ascending second-kind grid with `m + 1` points,
/// i.e. `cos(π·k·(m-j)/m)`.
///
/// The angle is folded into `[0, π]` and evaluated through `sin` so that
/// 0 and ±1 come out exact.
fn cheb_t_at_node(k: usize, j: usize, m: usize) -> f64 {
    let period = 2 * m;
    let p = (k * (m - j)) % period;
    let p = if p > m { period - p } else { p };
    (PI * (m as f64 - 2.0 * p as f64) / (2.0 * m as f64)).sin()
}
