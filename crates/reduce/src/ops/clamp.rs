//! Element-wise clamp

use alloc::vec;
use alloc::vec::Vec;

use crate::element::Element;
use crate::traits::SimdVector;

/// Clamp every element to `[lo, hi]`, returning a freshly allocated output.
///
/// Each chunk computes `max(min(chunk, hi), lo)` lane-wise and stores into
/// the corresponding slice of the output; the tail applies the same formula
/// with scalar operations. The input is never written: a new buffer is
/// always allocated, even when the input is already fully within bounds.
/// Output length always equals input length; callers pass `lo <= hi`.
///
/// # Example
///
/// ```rust
/// use strand_reduce::ops::clamp;
/// use strand_reduce::V128;
///
/// assert_eq!(clamp::<V128<i8>>(&[-10, -20, -30], -5, 10), vec![-5, -5, -5]);
/// ```
pub fn clamp<V: SimdVector>(data: &[V::Scalar], lo: V::Scalar, hi: V::Scalar) -> Vec<V::Scalar> {
    let mut out = vec![V::Scalar::ZERO; data.len()];

    let lanes = V::LANES;
    let chunks = data.len() / lanes;
    let lo_vec = V::splat(lo);
    let hi_vec = V::splat(hi);

    for i in 0..chunks {
        let start = i * lanes;
        let clamped = V::from_slice(&data[start..start + lanes])
            .min(hi_vec)
            .max(lo_vec);
        clamped.to_slice(&mut out[start..start + lanes]);
    }

    let tail = chunks * lanes;
    for (slot, &value) in out[tail..].iter_mut().zip(&data[tail..]) {
        *slot = value.min(hi).max(lo);
    }
    out
}
