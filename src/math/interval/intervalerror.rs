use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    #[error("invalid interval values [{left}, {right}]: left must be strictly less than right")]
    InvalidValues {
        left: f64,
        right: f64
    }
}
