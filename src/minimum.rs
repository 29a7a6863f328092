use core::fmt;

use crate::{
    Result,
    extremum::{Direction, Extremum, Min},
    utils::Rolling,
};

/// # Minimum Value Calculation for Rolling Windows
///
/// A specialized module for tracking minimum values in rolling windows of financial time-series data.
///
/// Mirrors [`Maximum`](crate::Maximum): the slot of the current minimum is kept and the
/// window is only re-scanned when that slot is overwritten. Unfilled slots hold `+inf`
/// both after construction and after [`reset`](Minimum::reset).
#[derive(Debug, Clone)]
pub struct Minimum(Rolling<Extremum<Min>>);

impl Minimum {
    /// Creates a new Minimum instance with the specified period
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
    /// The minimum of the values currently in the window
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        self.0.next(value)
    }

    /// Returns the minimum value in the rolling window
    ///
    /// # Returns
    ///
    /// None before the first update, otherwise the minimum value
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

impl fmt::Display for Minimum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Min::LABEL, self.period())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{
        StatisticsError,
        utils::testing::{brute_min, samples, tail},
    };

    #[test]
    fn zero_period_fails() {
        assert_eq!(Minimum::new(0).unwrap_err(), StatisticsError::zero_period());
    }

    #[test]
    fn next_works() {
        let mut min = Minimum::new(3).unwrap();
        let inputs = [4.0, 1.2, 5.0, 3.0, 4.0, 0.0, -1.0, -2.0, -1.5, 7.0, 8.0, 9.0];
        let expected = [4.0, 1.2, 1.2, 1.2, 3.0, 0.0, -1.0, -2.0, -2.0, -2.0, -1.5, 7.0];
        for (i, e) in inputs.iter().zip(expected) {
            assert_eq!(min.next(*i), e);
        }
    }

    #[test]
    fn matches_brute_force_for_every_prefix() {
        for period in 1..=7 {
            let values = samples(300 + period as u64, 80);
            let mut min = Minimum::new(period).unwrap();
            for (k, &v) in values.iter().enumerate() {
                assert_eq!(min.next(v), brute_min(tail(&values, k, period)));
            }
        }
    }

    #[test]
    fn reset_keeps_positive_infinity_sentinel() {
        let mut min = Minimum::new(3).unwrap();
        for v in [4.0, 1.2, 5.0, 3.0] {
            min.next(v);
        }
        min.reset();
        assert_eq!(min.get(), None);

        // a partially filled window must never report a sentinel slot
        assert_eq!(min.next(10.0), 10.0);
        assert_eq!(min.next(20.0), 10.0);

        let mut fresh = Minimum::new(3).unwrap();
        fresh.next(10.0);
        assert_eq!(fresh.next(20.0), 10.0);
    }

    #[test]
    fn nan_only_window_reports_nan_until_a_number_arrives() {
        let mut min = Minimum::new(2).unwrap();
        assert!(min.next(f64::NAN).is_nan());
        assert_eq!(min.next(3.0), 3.0);
        assert_eq!(min.next(f64::NAN), 3.0);
        assert!(min.next(f64::NAN).is_nan());
        assert_eq!(min.next(7.0), 7.0);
        assert_eq!(min.next(f64::INFINITY), 7.0);
        assert_eq!(min.next(f64::NAN), f64::INFINITY);
    }

    #[test]
    fn display() {
        assert_eq!(Minimum::new(3).unwrap().to_string(), "Min(3)");
    }
}
