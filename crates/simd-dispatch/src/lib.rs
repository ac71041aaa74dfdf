#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! strand-simd-dispatch: runtime SIMD tier detection and dispatch
//!
//! This crate answers "what is the widest vector tier this CPU supports?"
//! once per process and routes each reduction to the matching width
//! instantiation of the `strand-reduce` kernels, with the 1-lane scalar
//! backend as the universal fallback.
//!
//! # Architecture
//!
//! - `dispatcher`: CPU feature detection and `SimdTier` selection
//! - `context`: `ReduceContext` dispatch type and slice-level convenience
//!   functions (the primary public interface)
//!
//! Because the width backends are portable SIMD, every tier is compiled on
//! every target and lowered to whatever vector instructions exist. Tier
//! selection is therefore purely a performance decision: a wider tier than
//! the CPU's registers is still correct, just slower. That is also what
//! makes the `force-*` features safe on any machine.
//!
//! # Feature Flags
//!
//! - `force-scalar`: pin dispatch to the scalar tier for deterministic runs
//! - `force-v128`: pin dispatch to the 128-bit tier
//! - `force-v256`: pin dispatch to the 256-bit tier
//! - `force-v512`: pin dispatch to the 512-bit tier
//!
//! # Example
//!
//! ```rust
//! use strand_simd_dispatch::{sum, ReduceContext};
//!
//! // Initialize once during startup; detection is cached process-wide.
//! let ctx = ReduceContext::new();
//! assert_eq!(ctx.sum(&[1i32, 2, 3, 4, 5]), 15);
//!
//! // Or use the free functions, which pick the cached widest tier:
//! assert_eq!(sum(&[1u8, 2, 3]), 6);
//! ```

extern crate alloc;

// Re-export everything from strand-reduce for convenience
pub use strand_reduce::*;

pub mod context;
pub mod dispatcher;

// Re-export the primary public API
pub use context::{clamp, contains, max, mean, min, sum, try_max, try_min, ReduceContext};
pub use dispatcher::{CpuFeatures, SimdTier};
