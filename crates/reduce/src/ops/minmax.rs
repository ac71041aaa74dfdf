//! Minimum and maximum reductions

use crate::element::Element;
use crate::traits::SimdVector;

/// Smallest element, or `None` for empty input.
///
/// The running best vector is seeded from the first full chunk rather than
/// an identity element, so inputs shorter than one lane width fall through
/// entirely to the scalar tail. That is a normal path, not an exceptional
/// one.
///
/// # Example
///
/// ```rust
/// use strand_reduce::ops::try_min;
/// use strand_reduce::V128;
///
/// assert_eq!(try_min::<V128<u8>>(&[255, 100, 50]), Some(50));
/// assert_eq!(try_min::<V128<u8>>(&[]), None);
/// ```
pub fn try_min<V: SimdVector>(data: &[V::Scalar]) -> Option<V::Scalar> {
    let lanes = V::LANES;
    let chunks = data.len() / lanes;

    let mut best: Option<V> = None;
    for i in 0..chunks {
        let start = i * lanes;
        let chunk = V::from_slice(&data[start..start + lanes]);
        best = Some(match best {
            Some(acc) => acc.min(chunk),
            None => chunk,
        });
    }

    let mut result = best.map(V::horizontal_min);
    for &value in &data[chunks * lanes..] {
        result = Some(match result {
            Some(current) => current.min(value),
            None => value,
        });
    }
    result
}

/// Largest element, or `None` for empty input.
///
/// Mirror image of [`try_min`].
pub fn try_max<V: SimdVector>(data: &[V::Scalar]) -> Option<V::Scalar> {
    let lanes = V::LANES;
    let chunks = data.len() / lanes;

    let mut best: Option<V> = None;
    for i in 0..chunks {
        let start = i * lanes;
        let chunk = V::from_slice(&data[start..start + lanes]);
        best = Some(match best {
            Some(acc) => acc.max(chunk),
            None => chunk,
        });
    }

    let mut result = best.map(V::horizontal_max);
    for &value in &data[chunks * lanes..] {
        result = Some(match result {
            Some(current) => current.max(value),
            None => value,
        });
    }
    result
}

/// Smallest element.
///
/// Empty input returns the type's zero, a compatibility quirk: zero
/// is not a meaningful minimum of an empty set. Use [`try_min`] for an
/// explicit `Option`.
///
/// # Example
///
/// ```rust
/// use strand_reduce::ops::min;
/// use strand_reduce::V128;
///
/// assert_eq!(min::<V128<u8>>(&[255, 100, 50]), 50);
/// assert_eq!(min::<V128<u8>>(&[]), 0);
/// ```
pub fn min<V: SimdVector>(data: &[V::Scalar]) -> V::Scalar {
    try_min::<V>(data).unwrap_or(V::Scalar::ZERO)
}

/// Largest element.
///
/// Empty input returns the type's zero, with the same caveat as [`min`].
/// Use [`try_max`] for an explicit `Option`.
pub fn max<V: SimdVector>(data: &[V::Scalar]) -> V::Scalar {
    try_max::<V>(data).unwrap_or(V::Scalar::ZERO)
}
