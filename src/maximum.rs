use core::fmt;

use crate::{
    Result,
    extremum::{Direction, Extremum, Max},
    utils::Rolling,
};

/// # Maximum Value Calculation for Rolling Windows
///
/// A specialized module for tracking maximum values in rolling windows of financial time-series data.
///
/// Remembers where the current maximum lives in the window and only re-scans the
/// window when that sample is evicted. Lookups are constant time and updates are
/// amortized constant time on typical price series. This is the building block for
/// indicators that need recent highs, such as Donchian channels and breakout levels.
///
/// # Examples
///
/// ```
/// # use ta_window::Maximum;
/// let mut max = Maximum::new(3)?;
/// let inputs = [4.0, 1.2, 5.0, 3.0, 4.0, 0.0, -1.0, -2.0, -1.5];
/// let outputs: Vec<f64> = inputs.into_iter().map(|v| max.next(v)).collect();
///
/// assert_eq!(outputs, [4.0, 4.0, 5.0, 5.0, 5.0, 4.0, 4.0, 0.0, -1.0]);
/// # Ok::<(), ta_window::StatisticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Maximum(Rolling<Extremum<Max>>);

impl Maximum {
    /// Creates a new Maximum instance with the specified period
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize) -> Result<Self> {
        Rolling::new(period, |_| Extremum::default()).map(Self)
    }

    /// Pushes a new value into the rolling window
    ///
    /// # Arguments
    ///
    /// * `value` - The new value to be added to the rolling window
    ///
    /// # Returns
    ///
    /// The maximum of the values currently in the window
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        self.0.next(value)
    }

    /// Returns the maximum value in the rolling window
    ///
    /// # Returns
    ///
    /// None before the first update, otherwise the maximum value
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.0.get()
    }

    /// Returns the window period
    #[inline]
    pub fn period(&self) -> usize {
        self.0.period()
    }

    /// Resets the rolling window
    pub fn reset(&mut self) {
        self.0.reset();
    }
}

impl fmt::Display for Maximum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Max::LABEL, self.period())
    }
}
