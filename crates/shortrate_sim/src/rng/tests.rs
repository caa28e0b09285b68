//! Unit tests for the RNG module.
//!
//! - Seed reproducibility
//! - Draw accounting
//! - Normal moments
//! - Statistical properties via property-based testing

use super::*;
use proptest::prelude::*;

#[test]
fn test_seed_is_recorded() {
    let rng = SimRng::from_seed(42);
    assert_eq!(rng.seed(), 42);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = SimRng::from_seed(12345);
    let mut rng2 = SimRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = SimRng::from_seed(1);
    let mut rng2 = SimRng::from_seed(2);

    let a: Vec<f64> = (0..10).map(|_| rng1.gen_normal()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.gen_normal()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_fill_matches_sequential_draws() {
    let mut batch = SimRng::from_seed(7);
    let mut single = SimRng::from_seed(7);

    let mut buffer = vec![0.0; 257];
    batch.fill_normal(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, single.gen_normal());
    }
    assert_eq!(batch.draws(), single.draws());
}

#[test]
fn test_stream_continues_across_fills() {
    let mut split = SimRng::from_seed(99);
    let mut whole = SimRng::from_seed(99);

    let mut first = vec![0.0; 10];
    let mut second = vec![0.0; 10];
    split.fill_normal(&mut first);
    split.fill_normal(&mut second);

    let mut all = vec![0.0; 20];
    whole.fill_normal(&mut all);

    assert_eq!(&all[..10], first.as_slice());
    assert_eq!(&all[10..], second.as_slice());
    assert_eq!(split.draws(), 20);
}

#[test]
fn test_empty_buffer_draws_nothing() {
    let mut rng = SimRng::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    rng.fill_normal(&mut empty);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_normal_moments() {
    let mut rng = SimRng::from_seed(42);
    let n = 200_000;
    let mut buffer = vec![0.0; n];
    rng.fill_normal(&mut buffer);

    let mean = buffer.iter().sum::<f64>() / n as f64;
    let var = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    // Standard error of the mean is ~0.0022
    assert!(mean.abs() < 0.01, "mean {} too far from 0", mean);
    assert!((var - 1.0).abs() < 0.02, "variance {} too far from 1", var);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Draw accounting equals the total buffer length for any seed.
    #[test]
    fn prop_draw_count(seed in any::<u64>(), sizes in prop::collection::vec(0usize..500, 0..8)) {
        let mut rng = SimRng::from_seed(seed);
        for &size in &sizes {
            let mut buffer = vec![0.0; size];
            rng.fill_normal(&mut buffer);
        }
        prop_assert_eq!(rng.draws(), sizes.iter().sum::<usize>() as u64);
    }

    /// Every variate is finite.
    #[test]
    fn prop_normals_finite(seed in any::<u64>()) {
        let mut rng = SimRng::from_seed(seed);
        let mut buffer = vec![0.0; 1_000];
        rng.fill_normal(&mut buffer);
        prop_assert!(buffer.iter().all(|v| v.is_finite()));
    }
}
