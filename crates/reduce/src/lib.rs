#![no_std]
#![feature(portable_simd)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

extern crate alloc;

// Core trait definitions
pub mod traits;

// Element types and their per-tier vector bindings
pub mod element;

// Backend implementations
pub mod backends;

// Reduction kernels
pub mod ops;

// Public re-exports for convenience
pub use backends::portable::{V128, V256, V512};
pub use backends::scalar::{ScalarMask, ScalarVector};
pub use element::Element;
pub use traits::{SimdMask, SimdVector};
