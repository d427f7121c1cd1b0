//! # Number Formatting
//!
//! Rounding helpers shared by every calculator and the locale-aware
//! formatting used at the presentation boundary.
//!
//! The engine works in plain `f64` with a dot decimal point. Quantities are
//! rounded half-up once, when a [`MaterialItem`](crate::result::MaterialItem)
//! is built; consumers must not round them again.
//!
//! | Class              | Decimals |
//! |--------------------|----------|
//! | counts             | 0        |
//! | kg, liters, cm     | 1        |
//! | m², m, percentages | 2        |
//! | m³                 | 3        |

use serde::{Deserialize, Serialize};

/// Absorbs representation error (e.g. `2.675 * 100 = 267.49999...`) before
/// rounding or taking a ceiling.
const EPSILON: f64 = 1e-9;

/// Round half-up (away from zero for negatives) to `decimals` places.
///
/// ```rust
/// use takeoff_core::format::round_to;
///
/// assert_eq!(round_to(79.2000001, 1), 79.2);
/// assert_eq!(round_to(2.675, 2), 2.68);
/// assert_eq!(round_to(0.0625, 3), 0.063);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    (scaled + EPSILON.copysign(scaled)).round() / factor
}

/// Round to one decimal place (kg, liters, cm).
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimal places (m², m, percentages).
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Purchase rounding: smallest whole unit that covers `value`.
///
/// A value that is an integer up to float noise is not bumped to the next
/// unit, so `ceil_units(5.0000000001)` is 5.
///
/// ```rust
/// use takeoff_core::format::ceil_units;
///
/// assert_eq!(ceil_units(65.185), 66);
/// assert_eq!(ceil_units(5.0), 5);
/// assert_eq!(ceil_units(-2.0), 0);
/// ```
pub fn ceil_units(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value - EPSILON).ceil().max(0.0) as u64
}

/// Number of whole packages of `pack_size` needed to hold `quantity`.
pub fn packages(quantity: f64, pack_size: f64) -> u64 {
    if pack_size <= 0.0 {
        return 0;
    }
    ceil_units(quantity / pack_size)
}

/// Decimal separator used when turning numbers into display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    /// `12.5`
    Dot,
    /// `12,5` (pt-BR)
    #[default]
    Comma,
}

impl DecimalSeparator {
    pub fn as_char(self) -> char {
        match self {
            DecimalSeparator::Dot => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

/// Format a value with a fixed number of decimals and the given separator.
///
/// ```rust
/// use takeoff_core::format::{format_decimal, DecimalSeparator};
///
/// assert_eq!(format_decimal(79.2, 1, DecimalSeparator::Comma), "79,2");
/// assert_eq!(format_decimal(12.0, 2, DecimalSeparator::Dot), "12.00");
/// assert_eq!(format_decimal(66.0, 0, DecimalSeparator::Comma), "66");
/// ```
pub fn format_decimal(value: f64, decimals: u32, separator: DecimalSeparator) -> String {
    let rounded = round_to(value, decimals);
    let text = format!("{:.*}", decimals as usize, rounded);
    match separator {
        DecimalSeparator::Dot => text,
        DecimalSeparator::Comma => text.replace('.', ","),
    }
}

/// Short form used inside notes: at most `decimals` places, trailing zeros
/// dropped, dot separator.
pub(crate) fn trim_decimal(value: f64, decimals: u32) -> String {
    let text = format!("{:.*}", decimals as usize, round_to(value, decimals));
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
