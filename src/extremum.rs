use core::marker::PhantomData;

use tracing::trace;

use crate::utils::{Policy, Window};

/// Direction of an extremum search
pub trait Direction {
    /// Value held by unfilled slots, never selected over a real sample
    const SENTINEL: f64;
    /// Short label used when displaying the statistic
    const LABEL: &'static str;

    /// Returns true if `candidate` is strictly more extreme than `incumbent`
    fn exceeds(candidate: f64, incumbent: f64) -> bool;
}

/// Direction for minimum
#[derive(Debug, Clone)]
pub struct Min;

/// Direction for maximum
#[derive(Debug, Clone)]
pub struct Max;

impl Direction for Min {
    const SENTINEL: f64 = f64::INFINITY;
    const LABEL: &'static str = "Min";

    #[inline]
    fn exceeds(candidate: f64, incumbent: f64) -> bool {
        candidate < incumbent
    }
}

impl Direction for Max {
    const SENTINEL: f64 = f64::NEG_INFINITY;
    const LABEL: &'static str = "Max";

    #[inline]
    fn exceeds(candidate: f64, incumbent: f64) -> bool {
        candidate > incumbent
    }
}

/// Tracks the slot of the current extremum and re-scans the window only when
/// that slot is overwritten.
///
/// Extremes tend to persist across many updates in price series, so the
/// O(n) re-scan is rare and the amortized cost stays close to O(1).
#[derive(Debug, Clone)]
pub(crate) struct Extremum<D> {
    /// Slot holding the current extremum
    index: usize,
    _direction: PhantomData<D>,
}

impl<D> Default for Extremum<D> {
    fn default() -> Self {
        Self {
            index: 0,
            _direction: PhantomData,
        }
    }
}

/// Returns the slot of the first most extreme non-NaN value, `0` if every value is NaN
fn rescan<D: Direction>(values: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if !D::exceeds(v, b) => {}
            _ => best = Some((i, v)),
        }
    }
    best.map_or(0, |(i, _)| i)
}

impl<D: Direction> Policy for Extremum<D> {
    const SENTINEL: f64 = D::SENTINEL;

    fn update(&mut self, window: &Window<f64>, value: f64, _evicted: Option<f64>) -> f64 {
        let slot = window.last_index();
        let current = window.get(self.index);

        // a NaN extremum means every live value is NaN, so any number replaces it
        if D::exceeds(value, current) || (current.is_nan() && !value.is_nan()) {
            self.index = slot;
        } else if slot == self.index {
            self.index = rescan::<D>(window.filled());
            trace!(
                direction = D::LABEL,
                evicted_slot = slot,
                new_slot = self.index,
                "extremum evicted, window rescanned"
            );
        }

        window.get(self.index)
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
