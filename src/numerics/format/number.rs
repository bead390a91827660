// src/numerics/format/number.rs
// Number format specifiers, parse styles and culture rewriting.

use core::fmt;
use core::str::FromStr;

use super::culture::FormatProvider;
use crate::numerics::error::VectorError;

/// How a single component is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest text that parses back to the same value.
    #[default]
    General,
    /// Fixed point with the given number of decimals.
    Fixed(usize),
    /// Scientific notation with the given number of mantissa decimals.
    Exponential(usize),
    /// At most the given number of significant digits, switching to
    /// scientific notation for very large or very small magnitudes.
    Significant(usize),
}

const DEFAULT_FIXED_PRECISION: usize = 2;
const DEFAULT_EXPONENTIAL_PRECISION: usize = 6;

impl FromStr for NumberFormat {
    type Err = VectorError;

    /// Accepts `""`, `G[n]`, `R`, `F[n]` and `E[n]`, case-insensitive.
    ///
    /// `G0` is the same as `G`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let mut chars = spec.chars();
        let letter = match chars.next() {
            None => return Ok(NumberFormat::General),
            Some(c) => c.to_ascii_uppercase(),
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            Some(
                digits
                    .parse::<usize>()
                    .map_err(|_| VectorError::InvalidNumberFormat(spec.to_string()))?,
            )
        };

        match (letter, precision) {
            ('G', None) | ('G', Some(0)) | ('R', None) => Ok(NumberFormat::General),
            ('G', Some(digits)) => Ok(NumberFormat::Significant(digits)),
            ('F', p) => Ok(NumberFormat::Fixed(p.unwrap_or(DEFAULT_FIXED_PRECISION))),
            ('E', p) => Ok(NumberFormat::Exponential(p.unwrap_or(DEFAULT_EXPONENTIAL_PRECISION))),
            _ => Err(VectorError::InvalidNumberFormat(spec.to_string())),
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::General => write!(f, "G"),
            NumberFormat::Fixed(p) => write!(f, "F{}", p),
            NumberFormat::Exponential(p) => write!(f, "E{}", p),
            NumberFormat::Significant(p) => write!(f, "G{}", p),
        }
    }
}

/// Which literal shapes a component parser accepts.
///
/// Every style tolerates surrounding whitespace and a leading sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Digits only.
    Integer,
    /// Decimal point, exponent, `inf` and `NaN`.
    Float,
    /// `Float` plus the culture's group separators.
    Any,
}

/// Invariant text for `value` rounded to `digits` significant digits.
///
/// Fixed notation is used while the decimal exponent lies in `-4..digits`.
/// Trailing zeros are dropped.
pub(crate) fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= digits as i32 {
        return format!("{}e{}", trim_fraction(mantissa), exponent);
    }

    // Lay the already rounded mantissa digits out around the decimal point.
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let figures: String = mantissa.chars().filter(|&c| c != '.').collect();
    let fixed = if exponent >= 0 {
        let split = exponent as usize + 1;
        format!("{}.{}", &figures[..split], &figures[split..])
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), figures)
    };
    format!("{}{}", sign, trim_fraction(&fixed))
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

const INVARIANT_DECIMAL: &str = ".";
const INVARIANT_NEGATIVE: &str = "-";

// An empty separator or sign would make the text ambiguous, so it falls back
// to the invariant one.
fn decimal_separator(culture: &dyn FormatProvider) -> &str {
    match culture.decimal_separator() {
        "" => INVARIANT_DECIMAL,
        decimal => decimal,
    }
}

fn negative_sign(culture: &dyn FormatProvider) -> &str {
    match culture.negative_sign() {
        "" => INVARIANT_NEGATIVE,
        sign => sign,
    }
}

/// Rewrites invariant number text into the notation of `culture`.
pub(crate) fn localize(raw: &str, culture: &dyn FormatProvider) -> String {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let decimal = decimal_separator(culture);
    let digits = if decimal == INVARIANT_DECIMAL {
        digits.to_string()
    } else {
        digits.replacen('.', decimal, 1)
    };
    if negative {
        format!("{}{}", negative_sign(culture), digits)
    } else {
        digits
    }
}

/// Turns culture-specific text into something `str::parse` understands.
///
/// Returns `None` when the text does not fit `style`.
pub(crate) fn normalize_number(
    text: &str,
    style: NumberStyle,
    culture: &dyn FormatProvider,
) -> Option<String> {
    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix(negative_sign(culture)) {
        Some(rest) => ("-", rest),
        _ => match trimmed.strip_prefix('+') {
            Some(rest) => ("", rest),
            None => ("", trimmed),
        },
    };
    if body.is_empty() {
        return None;
    }

    let group = culture.group_separator();
    let mut body = if style == NumberStyle::Any && !group.is_empty() {
        body.replace(group, "")
    } else {
        body.to_string()
    };

    let decimal = decimal_separator(culture);
    if decimal != INVARIANT_DECIMAL {
        if body.contains('.') {
            return None;
        }
        body = body.replace(decimal, ".");
    }

    if style == NumberStyle::Integer && !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}{}", sign, body))
}
