//! Property-based tests for the sample generator.
//!
//! Each property is checked over random seeds and value counts.

use mc_core::rng::UniformSource;
use mc_core::sampling::{GeneratorConfig, SampleGenerator, MAX_RESAMPLE_ATTEMPTS};
use proptest::prelude::*;

fn config(seed: u64, num_values: usize, xi: f64) -> GeneratorConfig {
    GeneratorConfig::builder()
        .seed(seed)
        .num_values(num_values)
        .xi(xi)
        .build()
        .unwrap()
}

/// Emits a zero after every `period` good draws.
struct ZeroInjectingSource {
    inner: mc_core::rng::SampleRng,
    period: usize,
    count: usize,
}

impl UniformSource for ZeroInjectingSource {
    fn next_uniform(&mut self) -> f64 {
        self.count += 1;
        if self.count % (self.period + 1) == 0 {
            0.0
        } else {
            self.inner.gen_uniform()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_uniform_entries_equal_num_values(seed in any::<u64>(), n in 1usize..3_000) {
        let hists = SampleGenerator::new(config(seed, n, 1.0)).run().unwrap();
        prop_assert_eq!(hists.uniform.entries(), n as u64);
        prop_assert_eq!(hists.exponential.entries(), n as u64);
    }

    #[test]
    fn prop_exponential_values_non_negative(
        seed in any::<u64>(),
        n in 1usize..2_000,
        xi in 0.01f64..20.0,
    ) {
        let stream = SampleGenerator::new(config(seed, n, xi)).stream();
        for sample in stream {
            let sample = sample.unwrap();
            prop_assert!(sample.exponential >= 0.0);
            prop_assert!(sample.exponential.is_finite());
        }
    }

    #[test]
    fn prop_no_exponential_underflow(seed in any::<u64>(), xi in 0.01f64..20.0) {
        let hists = SampleGenerator::new(config(seed, 500, xi)).run().unwrap();
        prop_assert_eq!(hists.exponential.underflow(), 0);
        prop_assert_eq!(hists.uniform.underflow(), 0);
    }

    #[test]
    fn prop_same_seed_same_histograms(seed in any::<u64>(), n in 1usize..2_000) {
        let a = SampleGenerator::new(config(seed, n, 1.0)).run().unwrap();
        let b = SampleGenerator::new(config(seed, n, 1.0)).run().unwrap();
        prop_assert_eq!(a.uniform.bin_contents(), b.uniform.bin_contents());
        prop_assert_eq!(a.exponential.bin_contents(), b.exponential.bin_contents());
    }

    #[test]
    fn prop_zero_draws_are_resampled(
        seed in any::<u64>(),
        n in 1usize..1_000,
        period in 1usize..10,
    ) {
        let source = ZeroInjectingSource {
            inner: mc_core::rng::SampleRng::from_seed(seed),
            period,
            count: 0,
        };
        let hists = SampleGenerator::with_source(config(seed, n, 1.0), source)
            .run()
            .unwrap();
        prop_assert_eq!(hists.exponential.entries(), n as u64);
    }
}

#[test]
fn test_resample_limit_is_positive() {
    assert!(MAX_RESAMPLE_ATTEMPTS > 1);
}
