use core::fmt;

use num_traits::Float;

use crate::{
    Result,
    utils::{Policy, Rolling, Window},
};

/// Welford accumulators extended with a removal step for the evicted sample
///
/// Warm-up is the textbook Welford increment. Once the window is full, the
/// new sample replaces the evicted one in a single combined update, which
/// keeps the cost at O(1) without re-summing the window.
#[derive(Debug, Clone, Default)]
pub(crate) struct Welford {
    /// Running mean of the window
    mean: f64,
    /// Running sum of squared deviations from the mean
    m2: f64,
}

impl Welford {
    /// Population variance for a window of `count` samples
    #[inline]
    fn variance(&self, count: usize) -> f64 {
        // rounding can push m2 slightly below zero, NaN passes through
        let m2 = if self.m2 < 0.0 { 0.0 } else { self.m2 };
        m2 / count as f64
    }

    /// Recomputes both accumulators from the window in two passes
    fn rebuild(&mut self, window: &Window<f64>) {
        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;
        let m2 = window.iter().map(|v| (v - mean) * (v - mean)).sum();
        *self = Self { mean, m2 };
    }
}

impl Policy for Welford {
    const SENTINEL: f64 = 0.0;

    fn update(&mut self, window: &Window<f64>, value: f64, evicted: Option<f64>) -> f64 {
        let n = window.len() as f64;
        match evicted {
            None => {
                let delta = value - self.mean;
                self.mean += delta / n;
                self.m2 += delta * (value - self.mean);
            }
            Some(old) => {
                let prev_mean = self.mean;
                let delta = value - old;
                self.mean += delta / n;
                self.m2 += delta * ((value - self.mean) + (old - prev_mean));
            }
        }
        if !(self.mean.is_finite() && self.m2.is_finite()) {
            self.rebuild(window);
        }
        Float::sqrt(self.variance(window.len()))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// # Standard Deviation over a Sliding Window
///
/// Population standard deviation (divisor `N`, not `N - 1`) of the last
/// `period` values, updated in constant time per sample. This is the
/// dispersion measure behind volatility bands and position sizing.
///
/// # Examples
///
/// ```
/// # use ta_window::StandardDeviation;
/// # use assert_approx_eq::assert_approx_eq;
/// let mut sd = StandardDeviation::new(4)?;
/// let expected = [0.0, 5.0, 8.165, 7.071, 7.071, 35.355];
///
/// for (input, want) in [10.0, 20.0, 30.0, 20.0, 10.0, 100.0].into_iter().zip(expected) {
///     assert_approx_eq!(sd.next(input), want, 0.001);
/// }
/// # Ok::<(), ta_window::StatisticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StandardDeviation(Rolling<Welford>);

impl StandardDeviation {
    /// Creates a new StandardDeviation over the last `period` values
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize) -> Result<Self> {
        Rolling::new(period, |_| Welford::default()).map(Self)
    }

    /// Pushes a new value into the rolling window
    ///
    /// # Arguments
    ///
    /// * `value` - The new value to be added to the rolling window
    ///
    /// # Returns
    ///
    /// The population standard deviation of the values currently in the window
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        self.0.next(value)
    }

    /// Returns the standard deviation reported by the last update
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.0.get()
    }

    /// Returns the population variance of the window
    ///
    /// # Returns
    ///
    /// * `Option<f64>` - The variance, or `None` before any update
    #[inline]
    pub fn variance(&self) -> Option<f64> {
        let count = self.0.count();
        (count > 0).then(|| self.0.policy().variance(count))
    }

    /// Returns the running mean tracked alongside the variance
    ///
    /// # Returns
    ///
    /// * `Option<f64>` - The mean, or `None` before any update
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        (self.0.count() > 0).then_some(self.0.policy().mean)
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

impl fmt::Display for StandardDeviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SD({})", self.period())
    }
}
