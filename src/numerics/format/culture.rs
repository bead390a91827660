// src/numerics/format/culture.rs
// Locale strategy trait and the stock Culture provider.

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Supplies the locale-dependent pieces of a number literal.
///
/// Vectors never consult a process-wide locale; callers pass a provider in.
/// An empty decimal separator or negative sign is treated as the invariant
/// `.` or `-`, so formatted text always parses back to the same value.
pub trait FormatProvider: Debug + Send + Sync {
    fn decimal_separator(&self) -> &str;

    fn group_separator(&self) -> &str;

    fn negative_sign(&self) -> &str;
}

/// Stock [`FormatProvider`] described by plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
    pub decimal_separator: String,
    pub group_separator: String,
    pub negative_sign: String,
}

impl Default for Culture {
    /// Same as [`Culture::invariant`].
    fn default() -> Self {
        Self::invariant()
    }
}

impl Culture {
    pub fn new(
        name: impl Into<String>,
        decimal_separator: impl Into<String>,
        group_separator: impl Into<String>,
        negative_sign: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            decimal_separator: decimal_separator.into(),
            group_separator: group_separator.into(),
            negative_sign: negative_sign.into(),
        }
    }

    /// Culture-neutral notation: `.` decimal point, `,` grouping, `-` sign.
    pub fn invariant() -> Self {
        Self::new("", ".", ",", "-")
    }

    /// German notation: `,` decimal point, `.` grouping.
    pub fn de() -> Self {
        Self::new("de-DE", ",", ".", "-")
    }

    /// French notation: `,` decimal point, narrow no-break space grouping.
    pub fn fr() -> Self {
        Self::new("fr-FR", ",", "\u{202f}", "-")
    }
}

impl FormatProvider for Culture {
    fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    fn group_separator(&self) -> &str {
        &self.group_separator
    }

    fn negative_sign(&self) -> &str {
        &self.negative_sign
    }
}
