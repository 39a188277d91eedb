use crate::configuration::Preferences;
use crate::math::algorithms::evalpoints::EvalPoints;
use crate::math::chebtech::chebtech2::Chebtech2;
use crate::math::chebtech::evaluationmethod::EvaluationMethod;
use crate::math::fun::fun::Fun;
use crate::math::interval::interval::Interval;

/// Chebyshev expansion on `[-1, 1]` paired with the interval it represents a
/// function on. Points are pulled back through [`Interval::invmap`] before
/// they reach the expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Bndfun {
    onefun: Chebtech2,
    interval: Interval,
}

impl Bndfun {
    pub fn new(onefun: Chebtech2, interval: Interval) -> Bndfun {
        Bndfun { onefun, interval }
    }

    pub fn initempty() -> Bndfun {
        Bndfun::new(Chebtech2::initempty(), Interval::default())
    }

    pub fn initconst(c: f64, interval: Interval) -> Bndfun {
        Bndfun::new(Chebtech2::initconst(c), interval)
    }

    pub fn initfun_fixedlen<F: Fn(f64) -> f64>(f: F, interval: Interval, n: usize) -> Bndfun {
        let onefun = Chebtech2::initfun_fixedlen(|y| f(interval.map(&y)), n);
        Bndfun::new(onefun, interval)
    }

    pub fn initfun_adaptive<F: Fn(f64) -> f64>(f: F, interval: Interval, prefs: &Preferences) -> Bndfun {
        let onefun = Chebtech2::initfun_adaptive(|y| f(interval.map(&y)), prefs);
        Bndfun::new(onefun, interval)
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn onefun(&self) -> &Chebtech2 {
        &self.onefun
    }

    pub fn coeffs(&self) -> &[f64] {
        self.onefun.coeffs()
    }

    pub fn size(&self) -> usize {
        self.onefun.size()
    }

    pub fn is_empty(&self) -> bool {
        self.onefun.is_empty()
    }

    pub fn is_const(&self) -> bool {
        self.onefun.is_const()
    }

    pub fn vscale(&self) -> f64 {
        self.onefun.vscale()
    }

    pub fn eval<X: EvalPoints + ?Sized>(&self, x: &X, method: EvaluationMethod) -> X::Output
    where
        X::Output: EvalPoints<Output = X::Output>,
    {
        let y = self.interval.invmap(x);
        self.onefun.eval(&y, method)
    }
}

impl Fun for Bndfun {
    fn support(&self) -> Interval {
        self.interval
    }

    fn endvalues(&self) -> [f64; 2] {
        let [a, b] = self.interval.values();
        [self.value(a), self.value(b)]
    }

    fn value(&self, x: f64) -> f64 {
        self.eval(&x, EvaluationMethod::default())
    }
}
