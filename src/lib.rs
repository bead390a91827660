//! Fixed-arity numeric vectors.
//!
//! One generic [`Vector<T, N>`] covers every scalar type and arity; the
//! `Vector2`/`Vector3`/`Vector4` aliases name the common instantiations.

pub mod numerics;
pub mod prelude;

pub use numerics::error::{FormatError, Result, VectorError};
pub use numerics::format::{Culture, FormatOptions, FormatProvider, NumberFormat, NumberStyle, ParseOptions};
pub use numerics::random::{PoissonScalar, RandomScalar};
pub use numerics::types::traits::{Component, FloatScalar, Scalar, SignedScalar};
pub use numerics::types::vector::{Vector, Vector2, Vector3, Vector4};
