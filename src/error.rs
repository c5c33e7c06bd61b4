use crate::utils::Axis;

/// Error types
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{axis:?} bounds should satisfy min < max, found min = {min} and max = {max}")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },
    #[error("{name} should be positive, found {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} should be finite, found {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} should be at least {min}, found {value}")]
    CountTooSmall {
        name: &'static str,
        value: usize,
        min: usize,
    },
    #[error("Enlargement percentage should be greater than -99, found {0}")]
    EnlargementTooSmall(f64),
    #[error("Paired buffers should have equal lengths, found {first} and {second}")]
    MismatchedBuffers { first: usize, second: usize },
    #[error("{name} should lie in [{lo}, {hi}), found {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        lo: f64,
        hi: f64,
    },
    #[error("Could not parse box bounds from {0:?}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::NonPositive`] unless `value > 0`, or [`Error::NonFinite`] for NaN and
/// infinities.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { name, value })
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}

pub(crate) fn check_count(name: &'static str, value: usize, min: usize) -> Result<usize> {
    if value >= min {
        Ok(value)
    } else {
        Err(Error::CountTooSmall { name, value, min })
    }
}
