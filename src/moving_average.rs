use core::fmt;

use crate::{Result, mean::Sum, utils::Rolling};

/// # Simple Moving Average
///
/// The classic SMA used for trend following: the unweighted average of the
/// last `period` values. It shares its update rule with [`Mean`](crate::Mean)
/// and differs only in how it labels itself.
#[derive(Debug, Clone)]
pub struct MovingAverage(Rolling<Sum>);

impl MovingAverage {
    /// Creates a new MovingAverage with the specified period
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize) -> Result<Self> {
        Rolling::new(period, |_| Sum::default()).map(Self)
    }

    /// Pushes a new value and returns the average of the window
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        self.0.next(value)
    }

    /// Returns the average reported by the last update
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.0.get()
    }

    /// Returns the window period
    #[inline]
    pub fn period(&self) -> usize {
        self.0.period()
    }

    /// Returns true once the window holds `period` values
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.0.is_ready()
    }

    /// Resets the rolling window
    pub fn reset(&mut self) {
        self.0.reset();
    }
}

impl fmt::Display for MovingAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MA({})", self.period())
    }
}
