// src/numerics/types/ops.rs
// Elementwise operator overloads for Vector<T, N>.

use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use super::traits::{Scalar, SignedScalar};
use super::vector::Vector;

// `$combine` is the per-component operation; integer overflow wraps.
macro_rules! impl_binary_ops {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident => $combine:path);* $(;)?) => {$(
        impl<T: Scalar, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                self.zip_map(other, $combine)
            }
        }

        impl<'a, T: Scalar, const N: usize> $op<&'a Vector<T, N>> for &'a Vector<T, N> {
            type Output = Vector<T, N>;

            fn $method(self, other: &'a Vector<T, N>) -> Vector<T, N> {
                (*self).zip_map(*other, $combine)
            }
        }

        impl<T: Scalar, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            fn $method(self, scalar: T) -> Self {
                self.map(|a| $combine(a, scalar))
            }
        }

        impl<T: Scalar, const N: usize> $assign for Vector<T, N> {
            fn $assign_method(&mut self, other: Self) {
                *self = $op::$method(*self, other);
            }
        }

        impl<T: Scalar, const N: usize> $assign<T> for Vector<T, N> {
            fn $assign_method(&mut self, scalar: T) {
                *self = $op::$method(*self, scalar);
            }
        }
    )*};
}

impl_binary_ops! {
    Add::add, AddAssign::add_assign => Scalar::wrapping_add;
    Sub::sub, SubAssign::sub_assign => Scalar::wrapping_sub;
    Mul::mul, MulAssign::mul_assign => Scalar::wrapping_mul;
    Div::div, DivAssign::div_assign => Div::div;
}

// `scalar op vector` needs one impl per concrete scalar type.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize> Add<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn add(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.map(|c| Scalar::wrapping_add(self, c))
            }
        }

        impl<const N: usize> Sub<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn sub(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.map(|c| Scalar::wrapping_sub(self, c))
            }
        }

        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.map(|c| Scalar::wrapping_mul(self, c))
            }
        }

        impl<const N: usize> Div<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn div(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.map(|c| self / c)
            }
        }
    )*};
}

impl_scalar_lhs_ops!(i32, u32, i64, f32, f64);

impl<T: SignedScalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(SignedScalar::wrapping_neg)
    }
}

impl<T: SignedScalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Vector<T, N> {
        -*self
    }
}

// Logical operators for bool vectors

impl<const N: usize> BitAnd for Vector<bool, N> {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a & b)
    }
}

impl<const N: usize> BitOr for Vector<bool, N> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a | b)
    }
}

impl<const N: usize> BitXor for Vector<bool, N> {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a ^ b)
    }
}

impl<const N: usize> Not for Vector<bool, N> {
    type Output = Self;

    fn not(self) -> Self {
        self.map(|a| !a)
    }
}

impl<const N: usize> Vector<bool, N> {
    /// True when every component is set.
    pub fn all(&self) -> bool {
        self.iter().all(|&c| c)
    }

    pub fn any(&self) -> bool {
        self.iter().any(|&c| c)
    }

    pub fn count_true(&self) -> usize {
        self.iter().filter(|&&c| c).count()
    }
}
