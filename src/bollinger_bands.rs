use core::fmt;

use tracing::debug;

use crate::{Mean, Result, StandardDeviation, StatisticsError};

/// Upper, middle and lower band produced by one [`BollingerBands`] update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    /// Mean plus `multiplier` standard deviations
    pub upper: f64,
    /// Mean of the window
    pub middle: f64,
    /// Mean minus `multiplier` standard deviations
    pub lower: f64,
}

impl From<Bands> for (f64, f64, f64) {
    fn from(bands: Bands) -> Self {
        (bands.upper, bands.middle, bands.lower)
    }
}

/// # Bollinger Bands
///
/// Volatility envelope around a moving mean: the middle band is the mean of the
/// last `period` values and the outer bands sit `multiplier` population standard
/// deviations above and below it. Band width expands with volatility and contracts
/// in quiet markets, which is what squeeze and breakout strategies key off.
///
/// The bands are composed from a [`Mean`] and a [`StandardDeviation`] over the same
/// period and add no state of their own.
///
/// # Examples
///
/// ```
/// # use ta_window::BollingerBands;
/// let mut bb = BollingerBands::new(4, BollingerBands::DEFAULT_MULTIPLIER)?;
/// for v in [10.0, 20.0, 30.0, 20.0, 10.0] {
///     bb.next(v);
/// }
/// let bands = bb.next(100.0);
///
/// assert_eq!(bands.middle, 40.0);
/// assert!((bands.upper - 110.7107).abs() < 1e-3);
/// assert!((bands.lower + 30.7107).abs() < 1e-3);
/// # Ok::<(), ta_window::StatisticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Band width in standard deviations
    multiplier: f64,
    /// Middle band
    mean: Mean,
    /// Dispersion used for the band width
    sd: StandardDeviation,
}

impl BollingerBands {
    /// Conventional band width of two standard deviations
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Creates new BollingerBands
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    /// * `multiplier` - Band width in standard deviations
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero or `multiplier`
    ///   is not a finite number greater than zero
    pub fn new(period: usize, multiplier: f64) -> Result<Self> {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            debug!(multiplier, "rejected band multiplier");
            return Err(StatisticsError::non_positive_multiplier());
        }

        Ok(Self {
            multiplier,
            mean: Mean::new(period)?,
            sd: StandardDeviation::new(period)?,
        })
    }

    /// Feeds the next value to both components and returns the new bands
    ///
    /// # Arguments
    ///
    /// * `value` - The new value to be added to the rolling window
    ///
    /// # Returns
    ///
    /// * `Bands` - Upper, middle and lower band for the current window
    pub fn next(&mut self, value: f64) -> Bands {
        let middle = self.mean.next(value);
        let width = self.multiplier * self.sd.next(value);
        Bands {
            upper: middle + width,
            middle,
            lower: middle - width,
        }
    }

    /// Returns the band width multiplier
    #[inline]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the window period
    #[inline]
    pub fn period(&self) -> usize {
        self.mean.period()
    }

    /// Resets both components
    pub fn reset(&mut self) {
        self.mean.reset();
        self.sd.reset();
    }
}

impl fmt::Display for BollingerBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BB({}, {})", self.period(), self.multiplier)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use alloc::string::ToString;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::utils::testing::samples;

    #[test]
    fn invalid_parameters_fail() {
        assert_eq!(
            BollingerBands::new(0, 2.0).unwrap_err(),
            StatisticsError::zero_period()
        );
        for multiplier in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                BollingerBands::new(20, multiplier).unwrap_err(),
                StatisticsError::non_positive_multiplier()
            );
        }
    }

    #[test]
    fn bands_match_components() {
        let values = samples(77, 50);
        let mut bb = BollingerBands::new(5, 1.5).unwrap();
        let mut mean = Mean::new(5).unwrap();
        let mut sd = StandardDeviation::new(5).unwrap();

        for v in values {
            let bands = bb.next(v);
            let m = mean.next(v);
            let s = sd.next(v);
            assert_approx_eq!(bands.middle, m, 1e-12);
            assert_approx_eq!(bands.upper, m + 1.5 * s, 1e-12);
            assert_approx_eq!(bands.lower, m - 1.5 * s, 1e-12);
        }
    }

    #[test]
    fn constant_input_collapses_bands() {
        let mut bb = BollingerBands::new(3, 2.0).unwrap();
        for _ in 0..5 {
            let (upper, middle, lower): (f64, f64, f64) = bb.next(7.0).into();
            assert_eq!((upper, middle, lower), (7.0, 7.0, 7.0));
        }
    }

    #[test]
    fn infinite_input_widens_to_nan_and_recovers() {
        let mut bb = BollingerBands::new(2, 2.0).unwrap();
        bb.next(1.0);
        let bands = bb.next(f64::INFINITY);
        assert_eq!(bands.middle, f64::INFINITY);
        assert!(bands.upper.is_nan() && bands.lower.is_nan());

        bb.next(3.0);
        let bands = bb.next(5.0);
        assert_eq!(bands, Bands { upper: 6.0, middle: 4.0, lower: 2.0 });
    }

    #[test]
    fn reset_works() {
        let mut bb = BollingerBands::new(4, 2.0).unwrap();
        for v in [10.0, 20.0, 30.0] {
            bb.next(v);
        }
        bb.reset();

        let mut fresh = BollingerBands::new(4, 2.0).unwrap();
        assert_eq!(bb.next(20.0), fresh.next(20.0));
    }

    #[test]
    fn display() {
        let bb = BollingerBands::new(20, BollingerBands::DEFAULT_MULTIPLIER).unwrap();
        assert_eq!(bb.to_string(), "BB(20, 2)");
        assert_eq!(bb.multiplier(), 2.0);
    }
}
