use tracing::debug;

use crate::{Result, StatisticsError};

use super::Window;

/// Per-sample aggregate update rule plugged into [`Rolling`]
///
/// A policy sees the window after the new value has been written, together
/// with the sample that value evicted (if any), and returns the statistic for
/// the current window.
pub trait Policy {
    /// Value held by window slots that were never written
    const SENTINEL: f64;

    /// Folds `value` into the aggregate, removing `evicted` when present
    fn update(&mut self, window: &Window<f64>, value: f64, evicted: Option<f64>) -> f64;

    /// Restores the aggregate to its freshly constructed state
    fn reset(&mut self);
}

/// A sliding window paired with an incremental aggregate.
///
/// Owns the cursor, fill count and eviction bookkeeping shared by every
/// windowed statistic, so policies only deal with arithmetic.
#[derive(Debug, Clone)]
pub struct Rolling<P> {
    window: Window<f64>,
    policy: P,
    /// Output of the most recent update
    value: Option<f64>,
}

impl<P: Policy> Rolling<P> {
    /// Validates `period` and builds the policy for it
    ///
    /// # Errors
    ///
    /// * `StatisticsError::InvalidParameter` - if `period` is zero
    pub fn new(period: usize, policy: impl FnOnce(usize) -> P) -> Result<Self> {
        if period == 0 {
            debug!(period, "rejected window size");
            return Err(StatisticsError::zero_period());
        }

        Ok(Self {
            window: Window::new(period, P::SENTINEL),
            policy: policy(period),
            value: None,
        })
    }

    /// Pushes `value` and returns the updated statistic
    #[inline]
    pub fn next(&mut self, value: f64) -> f64 {
        let evicted = self.window.next(value);
        let out = self.policy.update(&self.window, value, evicted);
        self.value = Some(out);
        out
    }

    /// Resets the window and the aggregate
    pub fn reset(&mut self) {
        self.window.reset();
        self.policy.reset();
        self.value = None;
    }

    /// Returns the output of the last update, `None` before any update
    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.value
    }

    /// Returns the window period
    #[inline]
    pub fn period(&self) -> usize {
        self.window.period()
    }

    /// Returns the number of live samples
    #[inline]
    pub const fn count(&self) -> usize {
        self.window.len()
    }

    /// Returns true once the window holds `period` samples
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.window.is_full()
    }

    /// Returns the aggregate policy
    #[inline]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns an iterator over the live samples, oldest first
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.window.iter()
    }
}
