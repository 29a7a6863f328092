use thiserror::Error;

/// Errors raised while constructing a statistic
///
/// Construction is the only fallible step: once an instance exists, every
/// update is total over `f64`, including NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatisticsError {
    /// A constructor argument was outside its valid range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the rejected argument
        name: &'static str,
        /// Why the argument was rejected
        reason: &'static str,
    },
}

impl StatisticsError {
    /// Rejects a zero-length window
    pub(crate) const fn zero_period() -> Self {
        Self::InvalidParameter {
            name: "period",
            reason: "window size must be greater than zero",
        }
    }

    /// Rejects a band multiplier that is not a finite positive number
    pub(crate) const fn non_positive_multiplier() -> Self {
        Self::InvalidParameter {
            name: "multiplier",
            reason: "multiplier must be a finite number greater than zero",
        }
    }
}

/// Result alias used by every constructor in this crate
pub type Result<T> = core::result::Result<T, StatisticsError>;
