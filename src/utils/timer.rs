//! Wall-clock timing for kernel variants.
//!
//! Variants are warmed up, then sampled in a shuffled order so that no
//! variant systematically benefits from running first or last.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup calls before measurement (default: 10)
    pub warmup_iterations: usize,
    /// Seed for the sample schedule shuffle
    pub seed: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            seed: 0x5eed,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs one sample and returns (elapsed, result value).
    /// Timing happens inside the closure to keep dispatch overhead out of it.
    pub run: Box<dyn FnMut() -> (Duration, f64) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples taken
    pub runs: usize,
    /// Last result value, kept to compare variants against the baseline
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(config.seed));

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for variant_idx in tasks {
        let (elapsed, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = Some(result);
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            compute_variant_result(variant.name, variant.description, &times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: &[Duration],
    result_sample: Option<f64>,
) -> VariantResult {
    let (avg, min, max, std_dev) = compute_stats(times);
    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: avg,
        median_time: calculate_median(times),
        min_time: min,
        max_time: max,
        std_dev,
        runs: times.len(),
        result_sample,
    }
}

/// Average, min, max and sample standard deviation.
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration, Duration) {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return (Duration::ZERO, Duration::ZERO, Duration::ZERO, Duration::ZERO);
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;

    let std_dev = if times.len() < 2 {
        Duration::ZERO
    } else {
        let mean_ns = avg.as_nanos() as f64;
        let variance = times
            .iter()
            .map(|t| {
                let diff = t.as_nanos() as f64 - mean_ns;
                diff * diff
            })
            .sum::<f64>()
            / (times.len() - 1) as f64;
        Duration::from_nanos(variance.sqrt() as u64)
    };

    (avg, min, max, std_dev)
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_measure_variants_empty() {
        let results = measure_variants(vec![], &TimingConfig::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_measure_variants_multiple() {
        let variants = vec![
            Variant {
                name: "fast",
                description: "Fast variant",
                run: Box::new(|| {
                    let start = Instant::now();
                    let v = black_box(1.0);
                    (start.elapsed(), v)
                }),
            },
            Variant {
                name: "slow",
                description: "Slow variant",
                run: Box::new(|| {
                    let start = Instant::now();
                    let v = black_box(vec![0u8; 1000]).len() as f64;
                    (start.elapsed(), v)
                }),
            },
        ];

        let config = TimingConfig {
            runs_per_variant: 5,
            warmup_iterations: 2,
            seed: 1,
        };

        let results = measure_variants(variants, &config);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "fast");
        assert_eq!(results[0].runs, 5);
        assert_eq!(results[0].result_sample, Some(1.0));
        assert_eq!(results[1].result_sample, Some(1000.0));
    }

    #[test]
    fn test_stats_on_known_values() {
        let times = [
            Duration::from_nanos(10),
            Duration::from_nanos(20),
            Duration::from_nanos(30),
        ];
        let (avg, min, max, std_dev) = compute_stats(&times);
        assert_eq!(avg, Duration::from_nanos(20));
        assert_eq!(min, Duration::from_nanos(10));
        assert_eq!(max, Duration::from_nanos(30));
        assert_eq!(std_dev, Duration::from_nanos(10));
        assert_eq!(calculate_median(&times), Duration::from_nanos(20));
    }
}
