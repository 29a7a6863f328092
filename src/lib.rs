#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;

mod error;
pub use error::{Result, StatisticsError};

mod mean;
pub use mean::Mean;

mod moving_average;
pub use moving_average::MovingAverage;

mod standard_deviation;
pub use standard_deviation::StandardDeviation;

mod extremum;

mod maximum;
pub use maximum::Maximum;

mod minimum;
pub use minimum::Minimum;

mod median;
pub use median::Median;

mod exponential_moving_average;
pub use exponential_moving_average::ExponentialMovingAverage;

mod bollinger_bands;
pub use bollinger_bands::{Bands, BollingerBands};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::utils::testing::samples;

    /// Runs `build` twice with different histories and checks that once the
    /// last `period` inputs agree, so do the outputs.
    fn assert_forgets_history<S>(
        period: usize,
        build: impl Fn() -> S,
        next: impl Fn(&mut S, f64) -> f64,
    ) {
        let mut a = build();
        let mut b = build();
        for v in samples(1, 17) {
            next(&mut a, v);
        }
        for v in samples(2, 5) {
            next(&mut b, v);
        }

        for (i, v) in samples(3, period + 10).into_iter().enumerate() {
            let (x, y) = (next(&mut a, v), next(&mut b, v));
            if i + 1 >= period {
                assert_eq!(x.to_bits(), y.to_bits(), "step {i}: {x} != {y}");
            }
        }
    }

    #[test]
    fn windowed_statistics_forget_evicted_values() {
        let period = 4;
        assert_forgets_history(period, || Maximum::new(period).unwrap(), Maximum::next);
        assert_forgets_history(period, || Minimum::new(period).unwrap(), Minimum::next);
        assert_forgets_history(period, || Median::new(period).unwrap(), Median::next);
    }

    #[test]
    fn accumulating_statistics_forget_evicted_values() {
        // running sums only agree up to rounding once the histories differ
        let period = 4;
        let mut a = (Mean::new(period).unwrap(), StandardDeviation::new(period).unwrap());
        let mut b = (Mean::new(period).unwrap(), StandardDeviation::new(period).unwrap());
        for v in samples(4, 23) {
            a.0.next(v);
            a.1.next(v);
        }

        for (i, v) in samples(3, period + 10).into_iter().enumerate() {
            let (x, y) = (a.0.next(v), b.0.next(v));
            a.1.next(v);
            b.1.next(v);
            if i + 1 >= period {
                assert_approx_eq!(x, y, 1e-9);
                assert_approx_eq!(a.1.variance().unwrap(), b.1.variance().unwrap(), 1e-6);
            }
        }
    }

    #[test]
    fn every_constructor_rejects_zero_period() {
        let err = StatisticsError::zero_period();
        assert_eq!(Mean::new(0).unwrap_err(), err);
        assert_eq!(MovingAverage::new(0).unwrap_err(), err);
        assert_eq!(StandardDeviation::new(0).unwrap_err(), err);
        assert_eq!(Minimum::new(0).unwrap_err(), err);
        assert_eq!(Maximum::new(0).unwrap_err(), err);
        assert_eq!(Median::new(0).unwrap_err(), err);
        assert_eq!(ExponentialMovingAverage::new(0).unwrap_err(), err);
        assert_eq!(BollingerBands::new(0, 2.0).unwrap_err(), err);
    }
}
