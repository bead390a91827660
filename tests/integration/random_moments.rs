//! Empirical moments of the random generators over large sample counts.

use fulgor_numerics::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::init_tracing;

const SAMPLES: usize = 50_000;

/// Per-component sample mean and (population) variance.
fn moments<T: Scalar, const N: usize>(
    mut draw: impl FnMut() -> Vector<T, N>,
) -> (Vector<f64, N>, Vector<f64, N>) {
    let mut sum = Vector::<f64, N>::zero();
    let mut sum_sq = Vector::<f64, N>::zero();
    for _ in 0..SAMPLES {
        let v = draw().map(|c| c.to_f64());
        sum += v;
        sum_sq += v * v;
    }
    let n = SAMPLES as f64;
    let mean = sum / n;
    let variance = sum_sq / n - mean * mean;
    (mean, variance)
}

fn assert_close<const N: usize>(actual: Vector<f64, N>, expected: f64, tolerance: f64, what: &str) {
    for (i, &c) in actual.iter().enumerate() {
        assert!(
            (c - expected).abs() <= tolerance,
            "{} of component {} was {}, expected {} +/- {}",
            what,
            i,
            c,
            expected,
            tolerance
        );
    }
}

#[test]
fn test_uniform_float_moments() {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    let (mean, variance) = moments(|| Vector3::<f64>::random_uniform(&mut rng, 2.0, 3.0).unwrap());
    assert_close(mean, 2.5, 0.01, "mean");
    assert_close(variance, 1.0 / 12.0, 0.005, "variance");

    let (mean, variance) = moments(|| Vector2::<f32>::random(&mut rng, -1.0, 1.0).unwrap());
    assert_close(mean, 0.0, 0.02, "mean");
    assert_close(variance, 4.0 / 12.0, 0.01, "variance");
}

#[test]
fn test_half_open_integer_moments() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    // Discrete uniform over 0..=9.
    let (mean, variance) = moments(|| Vector4::<i32>::random(&mut rng, 0, 10).unwrap());
    assert_close(mean, 4.5, 0.1, "mean");
    assert_close(variance, 99.0 / 12.0, 0.3, "variance");
}

#[test]
fn test_closed_integer_moments() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    // Discrete uniform over 0..=10.
    let (mean, variance) = moments(|| Vector3::<u32>::random_uniform(&mut rng, 0, 10).unwrap());
    assert_close(mean, 5.0, 0.1, "mean");
    assert_close(variance, 120.0 / 12.0, 0.35, "variance");
}

#[test]
fn test_normal_and_gaussian_moments_match() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let (normal_mean, normal_variance) =
        moments(|| Vector3::<f64>::random_normal(&mut rng, 3.0, 4.0).unwrap());
    let (gauss_mean, gauss_variance) =
        moments(|| Vector3::<f64>::random_gaussian(&mut rng, 3.0, 4.0).unwrap());

    assert_close(normal_mean, 3.0, 0.05, "normal mean");
    assert_close(normal_variance, 4.0, 0.15, "normal variance");
    assert_close(gauss_mean, 3.0, 0.05, "gaussian mean");
    assert_close(gauss_variance, 4.0, 0.15, "gaussian variance");

    assert_close(normal_mean - gauss_mean, 0.0, 0.1, "mean difference");
    assert_close(normal_variance - gauss_variance, 0.0, 0.3, "variance difference");
}

#[test]
fn test_integer_normal_moments() {
    let mut rng = ChaCha8Rng::seed_from_u64(22);

    // Rounding to integers adds roughly 1/12 to the variance.
    let (mean, variance) = moments(|| Vector2::<i64>::random_normal(&mut rng, 10.0, 9.0).unwrap());
    assert_close(mean, 10.0, 0.1, "mean");
    assert_close(variance, 9.0 + 1.0 / 12.0, 0.4, "variance");
}

#[test]
fn test_poisson_moments() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    let (mean, variance) = moments(|| Vector4::<i64>::random_poisson(&mut rng, 4.0).unwrap());
    assert_close(mean, 4.0, 0.05, "mean");
    assert_close(variance, 4.0, 0.2, "variance");

    let (mean, variance) = moments(|| Vector2::<u32>::random_poisson(&mut rng, 0.5).unwrap());
    assert_close(mean, 0.5, 0.02, "mean");
    assert_close(variance, 0.5, 0.03, "variance");
}

#[test]
fn test_same_seed_same_vectors() {
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..1_000 {
        assert_eq!(
            Vector4::<i32>::random_uniform(&mut a, -50, 50).unwrap(),
            Vector4::<i32>::random_uniform(&mut b, -50, 50).unwrap()
        );
        assert_eq!(
            Vector3::<u32>::random_poisson(&mut a, 2.0).unwrap(),
            Vector3::<u32>::random_poisson(&mut b, 2.0).unwrap()
        );
    }
}
