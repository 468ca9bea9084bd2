//! Benchmark utilities for the dot product kernel.

use super::code::available_variants;
use crate::utils::{measure_variants, TimingConfig, Variant, VariantResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;

/// Build a pair of seeded random input vectors of `size` elements in [-1, 1).
pub fn random_inputs(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
    let w = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
    (x, w)
}

/// Time every available variant on the same inputs.
///
/// The reference variant comes first so it serves as the table baseline.
pub fn run_all_benchmarks(x: &[f64], w: &[f64], config: &TimingConfig) -> Vec<VariantResult> {
    let variants: Vec<Variant> = available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let start = Instant::now();
                    let result = func(black_box(x), black_box(w));
                    (start.elapsed(), black_box(result))
                }),
            }
        })
        .collect();

    measure_variants(variants, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_inputs_are_seeded() {
        let (x1, w1) = random_inputs(16, 9);
        let (x2, w2) = random_inputs(16, 9);
        assert_eq!(x1, x2);
        assert_eq!(w1, w2);
        assert!(x1.iter().chain(w1.iter()).all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn test_run_all_benchmarks_reports_every_variant() {
        let (x, w) = random_inputs(64, 3);
        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
            seed: 3,
        };
        let results = run_all_benchmarks(&x, &w, &config);
        assert_eq!(results.len(), available_variants().len());
        assert_eq!(results[0].name, "original");
        assert!(results.iter().all(|r| r.result_sample.is_some()));
    }
}
