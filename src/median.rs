use core::{fmt, hash::BuildHasher};

use ahash::RandomState;
use alloc::vec::Vec;
use ordered_float::OrderedFloat;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    Result,
    utils::{Policy, Rolling, Window, select},
};

/// Re-runs a randomized quickselect over the live window on every update
#[derive(Debug, Clone)]
pub(crate) struct Selection {
    /// Scratch copy of the window, reordered by each selection
    scratch: Vec<OrderedFloat<f64>>,
    /// Pivot source, seeded once for the lifetime of the statistic
    rng: SmallRng,
}

impl Selection {
    fn new(period: usize, seed: u64) -> Self {
        Self {
            scratch: Vec::with_capacity(period),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Policy for Selection {
    const SENTINEL: f64 = 0.0;

    fn update(&mut self, window: &Window<f64>, _value: f64, _evicted: Option<f64>) -> f64 {
        self.scratch.clear();
        self.scratch
            .extend(window.filled().iter().copied().map(OrderedFloat));
        select::median(&mut self.scratch, &mut self.rng)
    }

    fn reset(&mut self) {
        self.scratch.clear();
    }
}

/// # Median over a Sliding Window
///
/// Reports the middle value of the last `period` samples, averaging the two middle
/// values when the window holds an even count. The median is robust to the price
/// spikes that drag a mean around, which makes it a common baseline for outlier
/// filtering.
///
/// Each update selects the median with a randomized quickselect in expected O(n).
/// Samples are compared with a total order in which NaN sorts above every number,
/// so a NaN only surfaces when it lands on a middle rank.
///
/// # Examples
///
/// ```
/// # use ta_window::Median;
/// let mut median = Median::new(3)?;
/// let outputs: Vec<f64> = [10.0, 20.0, 30.0, 15.0, 40.0, 25.0]
///     .into_iter()
///     .map(|v| median.next(v))
///     .collect();
///
/// assert_eq!(outputs, [10.0, 15.0, 20.0, 20.0, 30.0, 25.0]);
/// # Ok::<(), ta_window::StatisticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Median(Rolling<Selection>);

impl Median {
    /// Creates a new Median with the specified period
    ///
    /// The pivot generator is seeded once from per-process runtime randomness.
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize) -> Result<Self> {
        let seed = BuildHasher::hash_one(&RandomState::new(), period);
        Self::with_seed(period, seed)
    }

    /// Creates a new Median whose pivot sequence is fully determined by `seed`
    ///
    /// The reported medians never depend on the seed, only the work done to find them.
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    /// * `seed` - Seed for the pivot generator
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn with_seed(period: usize, seed: u64) -> Result<Self> {
        Rolling::new(period, |period| Selection::new(period, seed)).map(Self)
    }

    /// Pushes a new value into the rolling window
    ///
    /// # Arguments
    ///
    /// * `value` - The new value to be added to the rolling window
    ///
    /// # Returns
    ///
    /// The median of the values currently in the window
    pub fn next(&mut self, value: f64) -> f64 {
        self.0.next(value)
    }

    /// Returns the median reported by the last update
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.0.get()
    }

    /// Returns an iterator over the values in the window, oldest first
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Returns the window period
    #[inline]
    pub fn period(&self) -> usize {
        self.0.period()
    }

    /// Resets the rolling window, keeping the pivot generator's state
    pub fn reset(&mut self) {
        self.0.reset();
    }
}

impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Median({})", self.period())
    }
}
