// src/numerics/types/vector.rs
// Generic fixed-arity vector over any Component type.

use core::ops::{Index, IndexMut};

use super::traits::Component;
use crate::numerics::error::{Result, VectorError};

/// Fixed-length vector of `N` components of type `T`.
///
/// Arity is part of the type, so every instantiation always has exactly `N`
/// components. The named accessors (`x`, `y`, `z`, `w`) exist on the arities
/// that have them; index access works for every `N`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

pub type Vector2i = Vector2<i32>;
pub type Vector3i = Vector3<i32>;
pub type Vector4i = Vector4<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector3u = Vector3<u32>;
pub type Vector4u = Vector4<u32>;
pub type Vector2l = Vector2<i64>;
pub type Vector3l = Vector3<i64>;
pub type Vector4l = Vector4<i64>;
pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;
pub type Vector2b = Vector2<bool>;
pub type Vector3b = Vector3<bool>;
pub type Vector4b = Vector4<bool>;

impl<T, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const ARITY: usize = N;

    /// Construct from an array of components.
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.components
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    pub fn into_array(self) -> [T; N] {
        self.components
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    /// Apply `f` to every component.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector { components: self.components.map(f) }
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Combine two vectors component by component.
    pub fn zip_map<U: Copy, R>(self, other: Vector<U, N>, mut f: impl FnMut(T, U) -> R) -> Vector<R, N> {
        Vector {
            components: core::array::from_fn(|i| f(self.components[i], other.components[i])),
        }
    }
}

impl<T: Component, const N: usize> Vector<T, N> {
    /// Broadcast one value into every component.
    pub fn splat(value: T) -> Self {
        Self { components: [value; N] }
    }

    /// Vector with every component set to zero (`false` for bool).
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Read component `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index, arity: N })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.components
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, arity: N })
    }

    /// Overwrite component `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Copy into a vector of arity `M`.
    ///
    /// The first `min(N, M)` components are kept; extra slots are zero.
    pub fn resize<const M: usize>(&self) -> Vector<T, M> {
        Vector {
            components: core::array::from_fn(|i| if i < N { self.components[i] } else { T::zero() }),
        }
    }

    /// Unary plus.
    pub fn identity(self) -> Self {
        self
    }
}

impl<T: Component, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

// Conversions between Vector<T, N> and arrays [T; N]

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for Vector<T, N> {
    fn from(array: &[T; N]) -> Self {
        Self::from_array(*array)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.components
    }
}

impl<T: Copy, const N: usize> From<&Vector<T, N>> for [T; N] {
    fn from(v: &Vector<T, N>) -> Self {
        v.components
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self> {
        let components: [T; N] = slice
            .try_into()
            .map_err(|_| VectorError::LengthMismatch { expected: N, actual: slice.len() })?;
        Ok(Self { components })
    }
}

macro_rules! component_type {
    ($name:ident) => { T };
}

macro_rules! impl_named_components {
    ($n:literal; $($name:ident, $setter:ident => $idx:literal),+) => {
        impl<T: Component> Vector<T, $n> {
            /// Construct from explicit components.
            pub fn new($($name: T),+) -> Self {
                Self { components: [$($name),+] }
            }

            $(
                #[inline]
                pub fn $name(&self) -> T {
                    self.components[$idx]
                }

                #[inline]
                pub fn $setter(&mut self, value: T) {
                    self.components[$idx] = value;
                }
            )+
        }

        // Conversions between Vector<T, N> and tuples

        impl<T: Component> From<($(component_type!($name)),+)> for Vector<T, $n> {
            fn from(tuple: ($(component_type!($name)),+)) -> Self {
                let ($($name),+) = tuple;
                Self::new($($name),+)
            }
        }

        impl<T: Component> From<Vector<T, $n>> for ($(component_type!($name)),+) {
            fn from(v: Vector<T, $n>) -> Self {
                ($(v.components[$idx]),+)
            }
        }
    };
}

impl_named_components!(2; x, set_x => 0, y, set_y => 1);
impl_named_components!(3; x, set_x => 0, y, set_y => 1, z, set_z => 2);
impl_named_components!(4; x, set_x => 0, y, set_y => 1, z, set_z => 2, w, set_w => 3);

macro_rules! impl_arity_conversion {
    ($($from:literal => $to:literal),*) => {$(
        impl<T: Component> From<Vector<T, $from>> for Vector<T, $to> {
            fn from(v: Vector<T, $from>) -> Self {
                v.resize::<$to>()
            }
        }
    )*};
}

impl_arity_conversion!(2 => 3, 2 => 4, 3 => 2, 3 => 4, 4 => 2, 4 => 3);
