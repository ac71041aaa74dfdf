//! Reduction kernels
//!
//! One generic function per operation, parameterized over the vector width.
//! Every kernel follows the same skeleton: process full lane-width chunks
//! with vector operations, then finish the `len % LANES` remainder with the
//! element type's scalar operations. Chunking never drops or duplicates
//! elements: `chunks * LANES + remainder == len` for every call.
//!
//! None of these functions fail. Empty input produces the documented
//! zero/`false`/empty result rather than an error.

mod clamp;
mod contains;
mod minmax;
mod sum;

pub use clamp::clamp;
pub use contains::contains;
pub use minmax::{max, min, try_max, try_min};
pub use sum::{mean, sum};
