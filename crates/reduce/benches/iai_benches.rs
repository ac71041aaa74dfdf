//! Instruction-count benchmarks for strand-reduce
//!
//! Complements the criterion wall-clock benches with deterministic
//! instruction counts. Run with: cargo bench --bench iai_benches

use iai::black_box;
use strand_reduce::ops;
use strand_reduce::{ScalarVector, V256};

fn data() -> Vec<f32> {
    (0..1024).map(|i| (i as f32) * 0.5 - 256.0).collect()
}

fn iai_sum_scalar() -> f32 {
    ops::sum::<ScalarVector<f32>>(black_box(&data()))
}

fn iai_sum_v256() -> f32 {
    ops::sum::<V256<f32>>(black_box(&data()))
}

fn iai_min_v256() -> f32 {
    ops::min::<V256<f32>>(black_box(&data()))
}

fn iai_clamp_v256() -> Vec<f32> {
    ops::clamp::<V256<f32>>(black_box(&data()), -100.0, 100.0)
}

fn iai_contains_v256() -> bool {
    ops::contains::<V256<f32>>(black_box(&data()), -1.0)
}

iai::main!(
    iai_sum_scalar,
    iai_sum_v256,
    iai_min_v256,
    iai_clamp_v256,
    iai_contains_v256
);
