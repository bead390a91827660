//! Prelude for fulgor_numerics
//!
//! Re-exports the vector type, its aliases, and the option types used by text interop.

pub use crate::numerics::error::{FormatError, Result, VectorError};
pub use crate::numerics::format::{
    invariant_culture, Culture, FormatOptions, FormatProvider, NumberFormat, NumberStyle, ParseOptions,
};
pub use crate::numerics::random::{PoissonScalar, RandomScalar};
pub use crate::numerics::types::traits::{Component, FloatScalar, Scalar, SignedScalar};
pub use crate::numerics::types::vector::*;
