use core::fmt;

use tracing::trace;

use crate::{
    Kbn, Result,
    utils::{Policy, Rolling, Window},
};

/// Running window sum, maintained by adding each new sample and subtracting
/// the evicted one
///
/// Finite samples go into a Kahan-Babuska-Neumaier compensated sum so that long
/// streams do not drift away from the exact window total. Infinities and NaN
/// are counted instead, which lets the sum recover once they leave the window.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sum {
    /// Compensated total of the finite samples
    finite: Kbn<f64>,
    /// Plain total of the finite samples, read only when the compensated one overflows
    overflow: f64,
    /// Live `+inf` samples
    pos_inf: usize,
    /// Live `-inf` samples
    neg_inf: usize,
    /// Live NaN samples
    nan: usize,
}

impl Sum {
    /// Counter for a sample the compensated sum cannot absorb
    #[inline]
    fn counter(&mut self, value: f64) -> Option<&mut usize> {
        if value.is_nan() {
            Some(&mut self.nan)
        } else if value == f64::INFINITY {
            Some(&mut self.pos_inf)
        } else if value == f64::NEG_INFINITY {
            Some(&mut self.neg_inf)
        } else {
            None
        }
    }

    #[inline]
    fn add(&mut self, value: f64) {
        match self.counter(value) {
            Some(count) => *count += 1,
            None => self.finite += value,
        }
    }

    #[inline]
    fn remove(&mut self, value: f64) {
        match self.counter(value) {
            Some(count) => *count -= 1,
            None => self.finite -= value,
        }
    }

    /// Re-sums the finite samples of the window from scratch
    fn rebuild(&mut self, window: &Window<f64>) {
        let mut finite = Kbn::default();
        let mut overflow = 0.0;
        for &v in window.iter().filter(|v| v.is_finite()) {
            finite += v;
            overflow += v;
        }
        trace!(total = overflow, "finite sum overflowed, window re-summed");
        self.finite = finite;
        self.overflow = overflow;
    }

    /// Sum of the window under IEEE-754 addition
    pub(crate) fn total(&self) -> f64 {
        if self.nan > 0 || (self.pos_inf > 0 && self.neg_inf > 0) {
            f64::NAN
        } else if self.pos_inf > 0 {
            f64::INFINITY
        } else if self.neg_inf > 0 {
            f64::NEG_INFINITY
        } else {
            let total = self.finite.total();
            if total.is_nan() { self.overflow } else { total }
        }
    }
}

impl Policy for Sum {
    const SENTINEL: f64 = 0.0;

    #[inline]
    fn update(&mut self, window: &Window<f64>, value: f64, evicted: Option<f64>) -> f64 {
        self.add(value);
        if let Some(old) = evicted {
            self.remove(old);
        }
        if !self.finite.total().is_finite() {
            self.rebuild(window);
        }
        self.total() / window.len() as f64
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// # Arithmetic Mean over a Sliding Window
///
/// Tracks the average of the last `period` values in O(1) per update. During
/// warm-up the divisor is the number of samples seen so far, so the very first
/// update already reports a meaningful value.
///
/// # Examples
///
/// ```
/// # use ta_window::Mean;
/// let mut mean = Mean::new(4)?;
/// let outputs: Vec<f64> = [10.0, 20.0, 30.0, 20.0, 10.0, 100.0]
///     .into_iter()
///     .map(|v| mean.next(v))
///     .collect();
///
/// assert_eq!(outputs, [10.0, 15.0, 20.0, 20.0, 20.0, 40.0]);
/// assert_eq!(mean.to_string(), "Mean(4)");
/// # Ok::<(), ta_window::StatisticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Mean(Rolling<Sum>);

impl Mean {
    /// Creates a new Mean over the last `period` values
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize) -> Result<Self> {
        Rolling::new(period, |_| Sum::default()).map(Self)
    }

    /// Pushes a new value into the rolling window
    ///
    /// # Arguments
    ///
    /// * `value` - The new value to be added to the rolling window
    ///
    /// # Returns
    ///
    /// The mean of the values currently in the window
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        self.0.next(value)
    }

    /// Returns the mean reported by the last update, `None` before any update
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.0.get()
    }

    /// Returns the sum of the values currently in the window, `None` before any update
    #[inline]
    pub fn sum(&self) -> Option<f64> {
        (self.0.count() > 0).then(|| self.0.policy().total())
    }

    /// Returns the window period
    #[inline]
    pub fn period(&self) -> usize {
        self.0.period()
    }

    /// Returns the number of values currently in the window
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count()
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

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mean({})", self.period())
    }
}
