// src/numerics/format/options.rs
// Format and parse option bundles.

use std::sync::Arc;

use super::culture::{Culture, FormatProvider};
use super::number::{NumberFormat, NumberStyle};

/// Separator used between components when none is given.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Configuration for turning a vector into text.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Text placed between consecutive components.
    pub separator: String,

    /// Notation applied to each component.
    pub number_format: NumberFormat,

    /// Locale pieces (decimal point, sign) used by each component.
    pub culture: Arc<dyn FormatProvider>,
}

impl Default for FormatOptions {
    /// `", "` separator, general notation, invariant culture.
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            number_format: NumberFormat::General,
            culture: Arc::new(Culture::invariant()),
        }
    }
}

impl FormatOptions {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    pub fn with_culture(mut self, culture: Arc<dyn FormatProvider>) -> Self {
        self.culture = culture;
        self
    }
}

/// Configuration for reading a vector from text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Text expected between consecutive components.
    pub separator: String,

    /// Accepted literal shape. `None` uses the component type's own default.
    pub style: Option<NumberStyle>,

    pub culture: Arc<dyn FormatProvider>,
}

impl Default for ParseOptions {
    /// `", "` separator, per-type style, invariant culture.
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            style: None,
            culture: Arc::new(Culture::invariant()),
        }
    }
}

impl ParseOptions {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: NumberStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_culture(mut self, culture: Arc<dyn FormatProvider>) -> Self {
        self.culture = culture;
        self
    }
}
