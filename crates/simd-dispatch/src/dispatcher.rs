//! Runtime tier dispatcher
//!
//! Runtime CPU feature detection and `SimdTier` selection. On x86_64 the
//! AVX2/AVX-512 extensions are detected with CPUID queries; SSE2 is baseline
//! so the 128-bit tier needs no query. On aarch64 NEON is architecturally
//! guaranteed, so the 128-bit tier is selected without detection. Unknown
//! architectures degrade to the scalar tier.

use core::sync::atomic::{AtomicU8, Ordering};

/// CPU feature detection results
///
/// Represents the SIMD capabilities detected on the current CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// AVX2 support available (x86_64)
    pub has_avx2: bool,

    /// AVX-512 Foundation (x86_64)
    pub has_avx512_f: bool,

    /// AVX-512 Byte & Word operations (x86_64)
    pub has_avx512_bw: bool,

    /// AVX-512 Doubleword & Quadword operations (x86_64)
    pub has_avx512_dq: bool,

    /// AVX-512 Vector Length extensions (x86_64)
    pub has_avx512_vl: bool,
}

impl CpuFeatures {
    /// Detect CPU features at runtime
    ///
    /// # Platform Behavior
    /// - **x86_64**: Runtime CPUID detection using the `cpufeatures` crate
    /// - **other architectures**: all fields false (no query available or
    ///   needed; the 128-bit baseline is decided per-architecture in
    ///   [`SimdTier::select`])
    ///
    /// First call runs the CPUID instructions; `cpufeatures` caches each
    /// result in an atomic, so subsequent calls are near-zero cost.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            cpufeatures::new!(cpuid_avx2, "avx2");
            cpufeatures::new!(cpuid_avx512f, "avx512f");
            cpufeatures::new!(cpuid_avx512bw, "avx512bw");
            cpufeatures::new!(cpuid_avx512dq, "avx512dq");
            cpufeatures::new!(cpuid_avx512vl, "avx512vl");

            Self {
                has_avx2: cpuid_avx2::get(),
                has_avx512_f: cpuid_avx512f::get(),
                has_avx512_bw: cpuid_avx512bw::get(),
                has_avx512_dq: cpuid_avx512dq::get(),
                has_avx512_vl: cpuid_avx512vl::get(),
            }
        }

        #[cfg(not(target_arch = "x86_64"))]
        {
            Self {
                has_avx2: false,
                has_avx512_f: false,
                has_avx512_bw: false,
                has_avx512_dq: false,
                has_avx512_vl: false,
            }
        }
    }

    /// Check if full AVX-512 support is available
    ///
    /// Full AVX-512 requires Foundation plus the common extensions:
    /// F, BW, DQ, and VL.
    pub fn has_avx512_full(&self) -> bool {
        self.has_avx512_f && self.has_avx512_bw && self.has_avx512_dq && self.has_avx512_vl
    }
}

/// The widest vector tier the running CPU supports
///
/// Ordered by strength: `Scalar < V128 < V256 < V512`. Established once per
/// process by [`SimdTier::detected`] and never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum SimdTier {
    /// Pure scalar fallback (no vector extension detected)
    Scalar = 0,

    /// 128-bit vectors (SSE2 on x86_64, NEON on aarch64)
    V128 = 1,

    /// 256-bit vectors (AVX2)
    V256 = 2,

    /// 512-bit vectors (AVX-512 F+BW+DQ+VL)
    V512 = 3,
}

const TIER_UNINIT: u8 = u8::MAX;

static DETECTED_TIER: AtomicU8 = AtomicU8::new(TIER_UNINIT);

impl SimdTier {
    /// Select the widest tier supported by the given features
    ///
    /// # Selection Priority
    /// 1. V512 (CPU supports full AVX-512)
    /// 2. V256 (CPU supports AVX2)
    /// 3. V128 (SSE2 baseline on x86_64, NEON baseline on aarch64)
    /// 4. Scalar (unknown architecture)
    ///
    /// # Forced Tier Selection
    /// When one of the `force-scalar` / `force-v128` / `force-v256` /
    /// `force-v512` features is enabled, detection is ignored and the forced
    /// tier is returned. Any forced tier is safe on any machine because
    /// wider-than-native vectors are lowered by the compiler.
    #[allow(unreachable_code, unused_variables)]
    pub fn select(features: CpuFeatures) -> Self {
        #[cfg(feature = "force-scalar")]
        {
            return SimdTier::Scalar;
        }

        #[cfg(feature = "force-v128")]
        {
            return SimdTier::V128;
        }

        #[cfg(feature = "force-v256")]
        {
            return SimdTier::V256;
        }

        #[cfg(feature = "force-v512")]
        {
            return SimdTier::V512;
        }

        #[cfg(target_arch = "x86_64")]
        {
            if features.has_avx512_full() {
                return SimdTier::V512;
            }
            if features.has_avx2 {
                return SimdTier::V256;
            }
            // SSE2 is baseline on x86_64
            SimdTier::V128
        }

        #[cfg(target_arch = "aarch64")]
        {
            // NEON is architecturally guaranteed on aarch64
            SimdTier::V128
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdTier::Scalar
        }
    }

    /// Detect the widest supported tier (uncached)
    ///
    /// Most callers want [`SimdTier::detected`], which caches the answer
    /// process-wide.
    pub fn detect() -> Self {
        Self::select(CpuFeatures::detect())
    }

    /// The widest supported tier, detected once and cached for the process
    ///
    /// The cached value is a write-once atomic. Detection is deterministic
    /// for a running process (the CPU does not change), so a racing double
    /// initialization writes the same value, and a torn read is impossible
    /// through a single-byte atomic. After initialization this is one
    /// relaxed load.
    pub fn detected() -> Self {
        match DETECTED_TIER.load(Ordering::Relaxed) {
            TIER_UNINIT => {
                let tier = Self::detect();
                DETECTED_TIER.store(tier as u8, Ordering::Relaxed);
                tier
            }
            raw => Self::from_raw(raw),
        }
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => SimdTier::Scalar,
            1 => SimdTier::V128,
            2 => SimdTier::V256,
            3 => SimdTier::V512,
            _ => unreachable!("invalid cached tier"),
        }
    }

    /// Tier name for host logging
    pub fn name(&self) -> &'static str {
        match self {
            SimdTier::Scalar => "scalar",
            SimdTier::V128 => "v128",
            SimdTier::V256 => "v256",
            SimdTier::V512 => "v512",
        }
    }
}
