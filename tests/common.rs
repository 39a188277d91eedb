#![allow(dead_code)]

pub const EPS: f64 = f64::EPSILON;

/// Tolerance for comparisons over `n` points.
pub fn scaled_tol(n: usize) -> f64 {
    if n < 20 {
        5e1 * EPS
    } else {
        (n as f64).ln().powf(2.5) * EPS
    }
}

pub fn infnorm(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(0.0_f64, |acc, (x, y)| acc.max((x - y).abs()))
}

pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![a];
    }
    let step = (b - a) / (n - 1) as f64;
    let mut pts: Vec<f64> = (0..n).map(|i| a + step * i as f64).collect();
    if let Some(last) = pts.last_mut() {
        *last = b;
    }
    pts
}

/// Deterministic, well-spread points in `[-1, 1]` (golden-ratio sequence).
pub fn spread_points(n: usize) -> Vec<f64> {
    const PHI_FRAC: f64 = 0.618_033_988_749_894_8;
    (1..=n)
        .map(|i| -1.0 + 2.0 * (i as f64 * PHI_FRAC).fract())
        .collect()
}

pub fn cubic(x: f64) -> f64 {
    x.powi(3) + x.powi(2) + x + 1.1
}

pub fn exp(x: f64) -> f64 {
    x.exp()
}

pub fn oscillatory(x: f64) -> f64 {
    (4.0 * std::f64::consts::PI * x).sin()
}

pub fn damped(x: f64) -> f64 {
    (-x * x).exp() * (3.0 * x).cos()
}

pub fn testfunctions() -> Vec<(&'static str, fn(f64) -> f64)> {
    vec![
        ("cubic", cubic as fn(f64) -> f64),
        ("exp", exp),
        ("oscillatory", oscillatory),
        ("damped", damped),
    ]
}
