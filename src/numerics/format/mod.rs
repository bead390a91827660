//! Text interop for vectors.
//!
//! Public submodules:
//! - culture (FormatProvider, Culture)
//! - number (NumberFormat, NumberStyle)
//! - options (FormatOptions, ParseOptions)
//! - text (to_string / parse / try_parse on Vector)

pub mod culture;
pub mod number;
pub mod options;
pub mod text;

pub use culture::{Culture, FormatProvider};
pub use number::{NumberFormat, NumberStyle};
pub(crate) use number::{localize, normalize_number, significant};
pub use options::{FormatOptions, ParseOptions, DEFAULT_SEPARATOR};
pub use text::invariant_culture;
