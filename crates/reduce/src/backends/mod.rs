//! SIMD backend implementations
//!
//! The scalar backend is the 1-lane fallback and reference implementation;
//! the portable backend provides the 128/256/512-bit width tiers. Every tier
//! compiles on every target (the compiler lowers wider-than-native vectors
//! to whatever instructions exist), so width selection is a performance
//! decision made by the caller (or by `strand-simd-dispatch` at runtime).

// Scalar backend (always available as fallback)
pub mod scalar;

// Portable-SIMD width tiers
pub mod portable;
