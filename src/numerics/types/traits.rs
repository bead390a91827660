// src/numerics/types/traits.rs
// Component trait hierarchy shared by every vector instantiation.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::numerics::format::{
    localize, normalize_number, significant, FormatProvider, NumberFormat, NumberStyle,
};

/// Anything that can be stored in a vector slot.
///
/// Covers the numeric scalars as well as `bool`. Text conversion lives here
/// because each element type has its own notion of a well-formed literal.
pub trait Component: Copy + PartialEq + Debug + 'static {
    /// Value used to fill components that have no source (zero / `false`).
    fn zero() -> Self;

    /// Style applied when a parse call does not name one.
    fn default_style() -> NumberStyle;

    fn format_component(&self, format: NumberFormat, culture: &dyn FormatProvider) -> String;

    fn parse_component(text: &str, style: NumberStyle, culture: &dyn FormatProvider) -> Option<Self>;
}

/// Numeric component with the four arithmetic operators.
///
/// Vector arithmetic goes through the `wrapping_*` hooks, so integer
/// components wrap on overflow in every build profile. Floats use the plain
/// IEEE-754 operators.
pub trait Scalar:
Component + PartialOrd
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
{
    fn one() -> Self;

    /// Absolute value. Signed integers saturate, so `MIN.abs()` is `MAX`.
    fn abs(self) -> Self;

    fn to_f64(self) -> f64;

    fn wrapping_add(self, other: Self) -> Self;

    fn wrapping_sub(self, other: Self) -> Self;

    fn wrapping_mul(self, other: Self) -> Self;
}

/// Scalars with a meaningful negation.
pub trait SignedScalar: Scalar + Neg<Output = Self> {
    /// Negation; `MIN` maps to itself for signed integers.
    fn wrapping_neg(self) -> Self;
}

/// IEEE-754 scalars.
pub trait FloatScalar: SignedScalar {
    fn sqrt(self) -> Self;

    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integer_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn zero() -> Self { 0 }

            fn default_style() -> NumberStyle { NumberStyle::Integer }

            fn format_component(&self, format: NumberFormat, culture: &dyn FormatProvider) -> String {
                let raw = match format {
                    NumberFormat::General => self.to_string(),
                    NumberFormat::Fixed(0) => self.to_string(),
                    NumberFormat::Fixed(precision) => format!("{}.{}", self, "0".repeat(precision)),
                    NumberFormat::Exponential(precision) => format!("{:.*e}", precision, *self as f64),
                    NumberFormat::Significant(digits) => {
                        let plain = self.to_string();
                        if plain.trim_start_matches('-').len() <= digits {
                            plain
                        } else {
                            significant(*self as f64, digits)
                        }
                    }
                };
                localize(&raw, culture)
            }

            fn parse_component(text: &str, style: NumberStyle, culture: &dyn FormatProvider) -> Option<Self> {
                let normalized = normalize_number(text, style, culture)?;
                normalized.parse::<$t>().ok()
            }
        }
    )*};
}

macro_rules! impl_float_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn zero() -> Self { 0.0 }

            fn default_style() -> NumberStyle { NumberStyle::Float }

            fn format_component(&self, format: NumberFormat, culture: &dyn FormatProvider) -> String {
                let raw = match format {
                    NumberFormat::General => self.to_string(),
                    NumberFormat::Fixed(precision) => format!("{:.*}", precision, self),
                    NumberFormat::Exponential(precision) => format!("{:.*e}", precision, self),
                    NumberFormat::Significant(digits) => significant(*self as f64, digits),
                };
                localize(&raw, culture)
            }

            fn parse_component(text: &str, style: NumberStyle, culture: &dyn FormatProvider) -> Option<Self> {
                let normalized = normalize_number(text, style, culture)?;
                normalized.parse::<$t>().ok()
            }
        }

        impl Scalar for $t {
            fn one() -> Self { 1.0 }
            fn abs(self) -> Self { <$t>::abs(self) }
            fn to_f64(self) -> f64 { self as f64 }
            fn wrapping_add(self, other: Self) -> Self { self + other }
            fn wrapping_sub(self, other: Self) -> Self { self - other }
            fn wrapping_mul(self, other: Self) -> Self { self * other }
        }

        impl SignedScalar for $t {
            fn wrapping_neg(self) -> Self { -self }
        }

        impl FloatScalar for $t {
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn from_f64(value: f64) -> Self { value as $t }
        }
    )*};
}

impl_integer_component!(i32, u32, i64);
impl_float_component!(f32, f64);

macro_rules! impl_signed_integer_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn one() -> Self { 1 }
            fn abs(self) -> Self { self.saturating_abs() }
            fn to_f64(self) -> f64 { self as f64 }
            fn wrapping_add(self, other: Self) -> Self { <$t>::wrapping_add(self, other) }
            fn wrapping_sub(self, other: Self) -> Self { <$t>::wrapping_sub(self, other) }
            fn wrapping_mul(self, other: Self) -> Self { <$t>::wrapping_mul(self, other) }
        }

        impl SignedScalar for $t {
            fn wrapping_neg(self) -> Self { <$t>::wrapping_neg(self) }
        }
    )*};
}

impl_signed_integer_scalar!(i32, i64);

impl Scalar for u32 {
    fn one() -> Self { 1 }
    fn abs(self) -> Self { self }
    fn to_f64(self) -> f64 { self as f64 }
    fn wrapping_add(self, other: Self) -> Self { u32::wrapping_add(self, other) }
    fn wrapping_sub(self, other: Self) -> Self { u32::wrapping_sub(self, other) }
    fn wrapping_mul(self, other: Self) -> Self { u32::wrapping_mul(self, other) }
}

impl Component for bool {
    fn zero() -> Self { false }

    fn default_style() -> NumberStyle { NumberStyle::Integer }

    // Number format and culture do not apply to truth values.
    fn format_component(&self, _format: NumberFormat, _culture: &dyn FormatProvider) -> String {
        self.to_string()
    }

    fn parse_component(text: &str, _style: NumberStyle, _culture: &dyn FormatProvider) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
