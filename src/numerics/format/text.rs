// src/numerics/format/text.rs
// String formatting and parsing for Vector<T, N>.

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

use tracing::{debug, trace};

use super::culture::{Culture, FormatProvider};
use super::number::{NumberFormat, NumberStyle};
use super::options::{FormatOptions, ParseOptions, DEFAULT_SEPARATOR};
use crate::numerics::error::{FormatError, Result, VectorError};
use crate::numerics::types::traits::Component;
use crate::numerics::types::vector::Vector;

impl<T: Component, const N: usize> Vector<T, N> {
    /// Render every component and join them with `options.separator`.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        self.join(&options.separator, options.number_format, options.culture.as_ref())
    }

    pub fn to_string_sep(&self, separator: &str) -> String {
        self.join(separator, NumberFormat::General, &Culture::invariant())
    }

    pub fn to_string_fmt(&self, separator: &str, number_format: NumberFormat) -> String {
        self.join(separator, number_format, &Culture::invariant())
    }

    pub fn to_string_culture(
        &self,
        separator: &str,
        number_format: NumberFormat,
        culture: &dyn FormatProvider,
    ) -> String {
        self.join(separator, number_format, culture)
    }

    fn join(&self, separator: &str, number_format: NumberFormat, culture: &dyn FormatProvider) -> String {
        self.iter()
            .map(|c| c.format_component(number_format, culture))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Parse `text` according to `options`.
    ///
    /// `None` stands for an absent input and yields [`VectorError::NullInput`];
    /// every other failure is a [`VectorError::Format`].
    pub fn parse_with<'a>(text: impl Into<Option<&'a str>>, options: &ParseOptions) -> Result<Self> {
        let text = text.into().ok_or(VectorError::NullInput)?;
        Self::split_and_parse(
            text,
            &options.separator,
            options.style.unwrap_or_else(T::default_style),
            options.culture.as_ref(),
        )
    }

    /// Parse `", "`-separated text in the invariant culture.
    ///
    /// Takes `&str` or `Option<&str>`. An owned `String` goes through
    /// `.as_str()` or, more simply, through [`str::parse`] via [`FromStr`].
    pub fn parse<'a>(text: impl Into<Option<&'a str>>) -> Result<Self> {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_sep<'a>(text: impl Into<Option<&'a str>>, separator: &str) -> Result<Self> {
        Self::parse_with(text, &ParseOptions::new(separator))
    }

    pub fn parse_style<'a>(
        text: impl Into<Option<&'a str>>,
        separator: &str,
        style: NumberStyle,
    ) -> Result<Self> {
        Self::parse_with(text, &ParseOptions::new(separator).with_style(style))
    }

    pub fn parse_culture<'a>(
        text: impl Into<Option<&'a str>>,
        separator: &str,
        style: NumberStyle,
        culture: &dyn FormatProvider,
    ) -> Result<Self> {
        let text = text.into().ok_or(VectorError::NullInput)?;
        Self::split_and_parse(text, separator, style, culture)
    }

    /// Like [`Vector::parse_with`] but reports failure as `None`.
    pub fn try_parse_with<'a>(text: impl Into<Option<&'a str>>, options: &ParseOptions) -> Option<Self> {
        Self::quiet(Self::parse_with(text, options))
    }

    pub fn try_parse<'a>(text: impl Into<Option<&'a str>>) -> Option<Self> {
        Self::quiet(Self::parse(text))
    }

    pub fn try_parse_sep<'a>(text: impl Into<Option<&'a str>>, separator: &str) -> Option<Self> {
        Self::quiet(Self::parse_sep(text, separator))
    }

    pub fn try_parse_style<'a>(
        text: impl Into<Option<&'a str>>,
        separator: &str,
        style: NumberStyle,
    ) -> Option<Self> {
        Self::quiet(Self::parse_style(text, separator, style))
    }

    pub fn try_parse_culture<'a>(
        text: impl Into<Option<&'a str>>,
        separator: &str,
        style: NumberStyle,
        culture: &dyn FormatProvider,
    ) -> Option<Self> {
        Self::quiet(Self::parse_culture(text, separator, style, culture))
    }

    fn quiet(result: Result<Self>) -> Option<Self> {
        match result {
            Ok(v) => Some(v),
            Err(err) => {
                trace!(error = %err, "try_parse rejected input");
                None
            }
        }
    }

    fn split_and_parse(
        text: &str,
        separator: &str,
        style: NumberStyle,
        culture: &dyn FormatProvider,
    ) -> Result<Self> {
        if text.trim().is_empty() {
            debug!(arity = N, "rejecting empty vector text");
            return Err(FormatError::Empty.into());
        }

        let fields: Vec<&str> = if separator.is_empty() {
            vec![text]
        } else {
            text.split(separator).collect()
        };
        if fields.len() != N {
            debug!(expected = N, actual = fields.len(), separator, "wrong number of vector fields");
            return Err(FormatError::FieldCount { expected: N, actual: fields.len() }.into());
        }

        let mut components = [T::zero(); N];
        for (index, (slot, field)) in components.iter_mut().zip(fields).enumerate() {
            *slot = T::parse_component(field, style, culture).ok_or_else(|| {
                debug!(index, field, ?style, "vector component failed to parse");
                FormatError::InvalidComponent { index, text: field.to_string() }
            })?;
        }
        Ok(Self::from_array(components))
    }
}

impl<T: Component, const N: usize> fmt::Display for Vector<T, N> {
    /// Components joined by `", "` in general notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR, NumberFormat::General, &Culture::invariant()))
    }
}

impl<T: Component, const N: usize> FromStr for Vector<T, N> {
    type Err = VectorError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

/// Shared invariant culture for callers building options by hand.
pub fn invariant_culture() -> Arc<dyn FormatProvider> {
    Arc::new(Culture::invariant())
}
