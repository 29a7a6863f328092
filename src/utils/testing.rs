//! Reference implementations and comparison helpers shared by the unit tests.

use alloc::vec::Vec;

use num_traits::Float;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Relative tolerance used by [`rel_eq`]
pub const TOLERANCE: f64 = 0.001;

/// Compares two floats by relative difference.
///
/// The difference is scaled by the mean magnitude of both operands. A ratio
/// that is NaN, as produced by comparing zero with zero, counts as equal.
pub fn rel_eq(expected: f64, actual: f64) -> bool {
    let diff = Float::abs(expected - actual);
    let mean = Float::abs(expected + actual) / 2.0;
    let ratio = diff / mean;
    ratio.is_nan() || ratio < TOLERANCE
}

/// Asserts that each update produces the matching expected value
pub fn assert_sequence(mut next: impl FnMut(f64) -> f64, cases: &[(f64, f64)]) {
    for (step, &(input, want)) in cases.iter().enumerate() {
        let got = next(input);
        assert!(
            rel_eq(want, got),
            "step {step}: input {input}, expected {want}, got {got}"
        );
    }
}

/// Deterministic pseudo-random samples in `[-50, 50)` with frequent ties
pub fn samples(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len)
        .map(|_| f64::from(rng.gen_range(-100_i32..100)) / 2.0)
        .collect()
}

/// The last `period` values of `values[..=k]`
pub fn tail(values: &[f64], k: usize, period: usize) -> &[f64] {
    let end = k + 1;
    &values[end.saturating_sub(period)..end]
}

pub fn brute_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn brute_stddev(values: &[f64]) -> f64 {
    let mean = brute_mean(values);
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    Float::sqrt(var)
}

pub fn brute_median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn brute_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn brute_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn rel_eq_tolerance() {
    assert!(rel_eq(8.165, 8.16496580927726));
    assert!(rel_eq(0.0, 0.0));
    assert!(!rel_eq(1.0, 1.01));
    assert!(!rel_eq(0.0, 1e-12));
}
