//! Shared test utilities: reference implementations and comparison helpers
//!
//! The reference implementations are plain iterator folds over the element
//! type's scalar operations; every width backend must reproduce them.

#![allow(dead_code)]

use strand_reduce::Element;

/// Reference sum: a left fold with the element's (wrapping) add.
pub fn ref_sum<T: Element>(data: &[T]) -> T {
    data.iter().fold(T::ZERO, |acc, &value| acc.add(value))
}

/// Reference mean: reference sum divided by the element count.
pub fn ref_mean<T: Element>(data: &[T]) -> T {
    if data.is_empty() {
        return T::ZERO;
    }
    ref_sum(data).div_count(data.len())
}

/// Reference minimum, `None` for empty input.
pub fn ref_min<T: Element>(data: &[T]) -> Option<T> {
    data.iter().copied().reduce(Element::min)
}

/// Reference maximum, `None` for empty input.
pub fn ref_max<T: Element>(data: &[T]) -> Option<T> {
    data.iter().copied().reduce(Element::max)
}

/// Reference clamp: `max(min(value, hi), lo)` per element.
pub fn ref_clamp<T: Element>(data: &[T], lo: T, hi: T) -> Vec<T> {
    data.iter()
        .map(|&value| Element::max(Element::min(value, hi), lo))
        .collect()
}

/// Assert two f32 sums agree within an accumulation-scaled tolerance.
///
/// Vector summation reorders additions, so cross-width float sums agree only
/// within the usual `n * eps * sum(|x|)` error bound, not bit-exactly.
pub fn assert_sums_close_f32(actual: f32, expected: f32, magnitude: f32) {
    let tolerance = 1e-3_f32.max(magnitude * 1e-4);
    assert!(
        (actual - expected).abs() <= tolerance,
        "sums differ: {actual} vs {expected} (tolerance {tolerance})"
    );
}

/// f64 variant of [`assert_sums_close_f32`].
pub fn assert_sums_close_f64(actual: f64, expected: f64, magnitude: f64) {
    let tolerance = 1e-9_f64.max(magnitude * 1e-12);
    assert!(
        (actual - expected).abs() <= tolerance,
        "sums differ: {actual} vs {expected} (tolerance {tolerance})"
    );
}
