//! Statistical random vector generators.
//!
//! Every generator borrows a caller-owned [`rand::Rng`] and draws one
//! independent sample per component, so a seeded rng replays the same
//! vectors. Parameter problems surface as
//! [`VectorError::InvalidDistribution`] instead of the panics `rand` would
//! raise.
//!
//! Range conventions:
//! - [`Vector::random`] samples `[min, max)` for every scalar type.
//! - [`Vector::random_uniform`] samples `[min, max]` for integer types and
//!   `[min, max)` for floating point types.

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};
use tracing::debug;

use crate::numerics::error::{Result, VectorError};
use crate::numerics::types::traits::Scalar;
use crate::numerics::types::vector::Vector;

/// Scalars that can be drawn from the standard distributions.
pub trait RandomScalar: Scalar {
    fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Result<Self>;

    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Result<Self>;

    /// Convert a real-valued draw into this type (integers round and saturate).
    fn from_sample(value: f64) -> Self;
}

/// Integer scalars, the only ones a Poisson draw makes sense for.
pub trait PoissonScalar: RandomScalar {}

fn invalid(reason: String) -> VectorError {
    debug!(%reason, "rejecting distribution parameters");
    VectorError::InvalidDistribution(reason)
}

macro_rules! impl_random_integer {
    ($($t:ty),*) => {$(
        impl RandomScalar for $t {
            fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Result<Self> {
                if min >= max {
                    return Err(invalid(format!("empty range [{}, {})", min, max)));
                }
                Ok(Uniform::new(min, max).sample(rng))
            }

            fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Result<Self> {
                if min > max {
                    return Err(invalid(format!("empty range [{}, {}]", min, max)));
                }
                Ok(Uniform::new_inclusive(min, max).sample(rng))
            }

            fn from_sample(value: f64) -> Self {
                // `as` saturates at the type bounds.
                value.round() as $t
            }
        }

        impl PoissonScalar for $t {}
    )*};
}

macro_rules! impl_random_float {
    ($($t:ty),*) => {$(
        impl RandomScalar for $t {
            fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Result<Self> {
                if !(min < max) || !(max - min).is_finite() {
                    return Err(invalid(format!("empty or unbounded range [{}, {})", min, max)));
                }
                Ok(Uniform::new(min, max).sample(rng))
            }

            fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Result<Self> {
                Self::sample_range(rng, min, max)
            }

            fn from_sample(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_random_integer!(i32, u32, i64);
impl_random_float!(f32, f64);

impl<T: RandomScalar, const N: usize> Vector<T, N> {
    /// Components drawn from `[min, max)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Result<Self> {
        let mut components = [T::zero(); N];
        for slot in components.iter_mut() {
            *slot = T::sample_range(rng, min, max)?;
        }
        Ok(Self::from_array(components))
    }

    /// Components drawn uniformly; the upper bound is included for integers.
    pub fn random_uniform<R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Result<Self> {
        let mut components = [T::zero(); N];
        for slot in components.iter_mut() {
            *slot = T::sample_uniform(rng, min, max)?;
        }
        Ok(Self::from_array(components))
    }

    /// Components drawn from a normal distribution with the given mean and variance.
    pub fn random_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, variance: f64) -> Result<Self> {
        if !mean.is_finite() || !variance.is_finite() || variance < 0.0 {
            return Err(invalid(format!("normal(mean = {}, variance = {})", mean, variance)));
        }
        let normal = Normal::new(mean, variance.sqrt())
            .map_err(|e| invalid(format!("normal(mean = {}, variance = {}): {}", mean, variance, e)))?;
        Ok(Self::from_array(core::array::from_fn(|_| T::from_sample(normal.sample(&mut *rng)))))
    }

    /// Alias of [`Vector::random_normal`].
    pub fn random_gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, variance: f64) -> Result<Self> {
        Self::random_normal(rng, mean, variance)
    }
}

impl<T: PoissonScalar, const N: usize> Vector<T, N> {
    /// Components drawn from a Poisson distribution with rate `lambda`.
    pub fn random_poisson<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> Result<Self> {
        if !lambda.is_finite() {
            return Err(invalid(format!("poisson(lambda = {})", lambda)));
        }
        let poisson = Poisson::new(lambda)
            .map_err(|e| invalid(format!("poisson(lambda = {}): {}", lambda, e)))?;
        Ok(Self::from_array(core::array::from_fn(|_| {
            let draw: f64 = poisson.sample(&mut *rng);
            T::from_sample(draw)
        })))
    }
}
