//! Tests for the seeded uniform source.

use super::*;

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SampleRng::from_seed(12345);
    let mut b = SampleRng::from_seed(12345);

    for _ in 0..1_000 {
        assert_eq!(a.gen_uniform().to_bits(), b.gen_uniform().to_bits());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SampleRng::from_seed(1);
    let mut b = SampleRng::from_seed(2);

    let same = (0..100)
        .filter(|_| a.gen_uniform() == b.gen_uniform())
        .count();
    assert!(same < 100);
}

#[test]
fn test_uniform_excludes_zero() {
    let mut rng = SampleRng::from_seed(99);
    for _ in 0..100_000 {
        let r = rng.gen_uniform();
        assert!(r > 0.0 && r <= 1.0, "draw {} outside (0, 1]", r);
    }
}

#[test]
fn test_fill_uniform_matches_single_draws() {
    let mut batch = SampleRng::from_seed(5);
    let mut single = SampleRng::from_seed(5);

    let mut buffer = vec![0.0; 64];
    batch.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, single.gen_uniform());
    }
}

#[test]
fn test_fill_uniform_empty_buffer() {
    let mut rng = SampleRng::from_seed(5);
    let mut buffer: Vec<f64> = Vec::new();
    rng.fill_uniform(&mut buffer);
    assert!(buffer.is_empty());
}

#[test]
fn test_uniform_mean_near_half() {
    let mut rng = SampleRng::from_seed(2024);
    let n = 50_000;
    let mean = (0..n).map(|_| rng.gen_uniform()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "mean {}", mean);
}

#[test]
fn test_default_uses_default_seed() {
    assert_eq!(SampleRng::default().seed(), DEFAULT_SEED);
}

#[test]
fn test_source_through_mut_reference() {
    let mut rng = SampleRng::from_seed(3);
    let mut reference = SampleRng::from_seed(3);
    let expected = reference.gen_uniform();

    fn draw<S: UniformSource>(mut source: S) -> f64 {
        source.next_uniform()
    }

    assert_eq!(draw(&mut rng), expected);
}
