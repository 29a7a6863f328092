use core::fmt;

use tracing::debug;

use crate::{Result, StatisticsError};

/// # Exponential Moving Average
///
/// A first-order recurrence that weights recent values more heavily than old
/// ones. Unlike the windowed statistics it keeps no samples: the smoothing factor
/// is `k = 2 / (period + 1)` and each update computes `k * value + (1 - k) * ema`.
/// The first value seeds the average.
///
/// # Examples
///
/// ```
/// # use ta_window::ExponentialMovingAverage;
/// let mut ema = ExponentialMovingAverage::new(3)?;
/// assert_eq!(ema.next(2.0), 2.0);
/// assert_eq!(ema.next(5.0), 3.5);
/// assert_eq!(ema.next(1.0), 2.25);
/// # Ok::<(), ta_window::StatisticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    /// Statistics period
    period: usize,
    /// Smoothing factor
    k: f64,
    /// Current average, `None` until the first value arrives
    current: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Creates a new ExponentialMovingAverage with the specified period
    ///
    /// # Arguments
    ///
    /// * `period` - Number of periods used to derive the smoothing factor
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            debug!(period, "rejected smoothing period");
            return Err(StatisticsError::zero_period());
        }

        Ok(Self {
            period,
            k: 2.0 / (period as f64 + 1.0),
            current: None,
        })
    }

    /// Feeds the next value and returns the updated average
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        let ema = match self.current {
            Some(prev) => self.k * value + (1.0 - self.k) * prev,
            None => value,
        };
        self.current = Some(ema);
        ema
    }

    /// Returns the current average
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.current
    }

    /// Returns the period
    #[inline]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Forgets the current average so the next value seeds it again
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl fmt::Display for ExponentialMovingAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EMA({})", self.period)
    }
}
