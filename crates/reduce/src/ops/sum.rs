//! Sum and mean reductions

use crate::element::Element;
use crate::traits::SimdVector;

/// Sum of all elements.
///
/// A zero-splatted vector accumulator is added chunk-by-chunk, horizontally
/// reduced, and the remainder is accumulated with scalar adds.
///
/// Integer sums wrap silently on overflow; float sums overflow to infinity.
/// Both are accepted semantics; a caller needing overflow safety must widen
/// the element type itself. Empty input returns the type's zero.
///
/// # Example
///
/// ```rust
/// use strand_reduce::ops::sum;
/// use strand_reduce::V128;
///
/// assert_eq!(sum::<V128<i8>>(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum::<V128<i8>>(&[]), 0);
/// ```
pub fn sum<V: SimdVector>(data: &[V::Scalar]) -> V::Scalar {
    let lanes = V::LANES;
    let chunks = data.len() / lanes;

    let mut acc = V::splat(V::Scalar::ZERO);
    for i in 0..chunks {
        let start = i * lanes;
        acc = acc.add(V::from_slice(&data[start..start + lanes]));
    }

    let mut total = acc.horizontal_sum();
    for &value in &data[chunks * lanes..] {
        total = total.add(value);
    }
    total
}

/// Mean of all elements.
///
/// Computed as `sum / len` using the element type's own division: truncating
/// toward zero for integers, true division for floats. Empty input returns
/// the type's zero.
///
/// # Example
///
/// ```rust
/// use strand_reduce::ops::mean;
/// use strand_reduce::V128;
///
/// assert_eq!(mean::<V128<i8>>(&[1, 2, 3, 4]), 2);
/// assert_eq!(mean::<V128<f32>>(&[1.0, 2.0]), 1.5);
/// ```
pub fn mean<V: SimdVector>(data: &[V::Scalar]) -> V::Scalar {
    if data.is_empty() {
        return V::Scalar::ZERO;
    }
    sum::<V>(data).div_count(data.len())
}
