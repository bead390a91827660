// src/numerics/types/geometry.rs
// Norms, products and componentwise reductions.

use super::traits::{FloatScalar, Scalar, SignedScalar};
use super::vector::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Dot product, accumulated in `T` (wrapping for integers).
    pub fn dot(&self, other: &Self) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.wrapping_add(a.wrapping_mul(b)))
    }

    /// Sum of squared components, accumulated in `f64`.
    pub fn norm_squared(&self) -> f64 {
        self.iter().map(|&c| c.to_f64() * c.to_f64()).sum()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Sum of absolute components (taxicab length).
    pub fn norm_l1(&self) -> f64 {
        self.iter().map(|&c| c.to_f64().abs()).sum()
    }

    /// Largest absolute component (Chebyshev length).
    pub fn norm_max(&self) -> T {
        self.iter().fold(T::zero(), |best, &c| {
            let magnitude = c.abs();
            if magnitude > best { magnitude } else { best }
        })
    }

    pub fn abs(self) -> Self {
        self.map(Scalar::abs)
    }

    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &c| acc.wrapping_add(c))
    }

    pub fn min_component(&self) -> T {
        self.iter()
            .copied()
            .reduce(|best, c| if c < best { c } else { best })
            .unwrap_or_else(T::zero)
    }

    pub fn max_component(&self) -> T {
        self.iter()
            .copied()
            .reduce(|best, c| if c > best { c } else { best })
            .unwrap_or_else(T::zero)
    }

    /// Componentwise minimum of two vectors.
    pub fn component_min(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if b < a { b } else { a })
    }

    /// Componentwise maximum of two vectors.
    pub fn component_max(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if b > a { b } else { a })
    }
}

impl<T: SignedScalar> Vector<T, 3> {
    /// Right-handed cross product.
    ///
    /// Only signed scalars get one: the differences in the formula leave the
    /// unsigned range for most inputs, so `Vector3<u32>` has no `cross`.
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        let term = |i: usize, j: usize| a[i].wrapping_mul(b[j]).wrapping_sub(a[j].wrapping_mul(b[i]));
        Self::new(term(1, 2), term(2, 0), term(0, 1))
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalized(self) -> Option<Self> {
        let length = self.norm();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(self / T::from_f64(length))
    }

    /// Linear interpolation, `t = 0` gives `self` and `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }
}
