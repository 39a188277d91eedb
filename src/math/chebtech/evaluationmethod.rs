/// Algorithm used to evaluate a Chebyshev expansion at given points.
///
/// Both variants honour the same contract (shape preservation, empty input,
/// scalar output for scalar input) and may be swapped freely.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum EvaluationMethod {
    /// Clenshaw recurrence on the coefficients.
    #[default]
    Clenshaw,
    /// Barycentric formula on the values at Chebyshev points.
    Barycentric
}
