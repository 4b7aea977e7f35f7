//! Fixed-point money values for the currencies the application displays.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A currency the backend may quote amounts in, with its formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    BAM, // Bosnia and Herzegovina Convertible Mark
    EUR, // Euro
    USD, // United States Dollar
}

impl Currency {
    /// Returns the number of decimal digits used by the currency.
    pub fn decimals(&self) -> u8 {
        // All three supported currencies subdivide into hundredths.
        2
    }

    /// Returns the display symbol for the currency.
    ///
    /// The convertible mark has no glyph; "KM" is the customary symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::BAM => "KM",
            Self::EUR => "€",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "BAM").
    /// This is handled by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BAM => "Bosnia and Herzegovina Convertible Mark",
            Self::EUR => "Euro",
            Self::USD => "United States Dollar",
        }
    }
}

/// Represents a monetary value in a specific currency.
///
/// Internally, the amount is stored as a signed 64-bit integer in the
/// currency's smallest unit (fening for BAM) to prevent floating-point
/// inaccuracies. The `Display` implementation formats this as a plain
/// numeric string; suffixes and placeholders are a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    minor: i64,
    currency: Currency,
}

impl Money {
    /// Returns the currency of the amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit.
    pub fn as_minor_units(&self) -> i64 {
        self.minor
    }

    /// Creates a `Money` from a floating-point value, typically off the wire.
    ///
    /// The float is converted to the integer representation by rounding to
    /// the nearest minor unit for the currency's number of decimal places.
    pub fn from_float(value: f64, currency: Currency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let minor = (value * multiplier).round() as i64;

        Self { minor, currency }
    }

    /// Creates a `Money` directly from its smallest unit.
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// A zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Formats the amount followed by its currency symbol (e.g., "25.34 KM").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{} {}", self, self.currency.symbol())
    }

    /// Formats the amount followed by its currency code (e.g., "25.34 BAM").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats the amount as a plain numeric string (e.g., "25.34").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.minor);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let sign = if self.minor < 0 { "-" } else { "" };
        let major_units = (self.minor / divisor).abs();
        let minor_units = self.minor.abs() % divisor;

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            major_units,
            minor_units,
            width = decimals
        )
    }
}
