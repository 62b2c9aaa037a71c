//! Length units
//!
//! All part dimensions are carried internally in millimetres. Host scenes
//! declare the unit their coordinates are expressed in, and output strings
//! are rendered in the unit picked by the user with an explicit
//! [`LengthFormat`] rather than any process-wide locale state.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Linear unit of a scene or of the rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimetres
    #[default]
    #[serde(alias = "mm")]
    Millimeter,
    /// Centimetres
    #[serde(alias = "cm")]
    Centimeter,
    /// Metres
    #[serde(alias = "m")]
    Meter,
    /// Inches
    #[serde(alias = "in")]
    Inch,
    /// Feet
    #[serde(alias = "ft")]
    Foot,
}

impl LengthUnit {
    /// Millimetres in one of this unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
            Self::Inch => MM_PER_INCH,
            Self::Foot => MM_PER_INCH * 12.0,
        }
    }

    /// Convert a value expressed in this unit to millimetres
    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }

    /// Convert a millimetre value into this unit
    pub fn from_mm(self, value_mm: f64) -> f64 {
        value_mm / self.mm_per_unit()
    }

    /// True for the metric units
    pub fn is_metric(self) -> bool {
        matches!(self, Self::Millimeter | Self::Centimeter | Self::Meter)
    }

    /// Number of decimals shown by default for this unit
    pub fn default_precision(self) -> usize {
        match self {
            Self::Millimeter => 1,
            Self::Centimeter => 2,
            Self::Inch => 3,
            Self::Meter | Self::Foot => 4,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeter => write!(f, "Millimeters"),
            Self::Centimeter => write!(f, "Centimeters"),
            Self::Meter => write!(f, "Meters"),
            Self::Inch => write!(f, "Inches"),
            Self::Foot => write!(f, "Feet"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(Self::Millimeter)
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Self::Centimeter)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meter),
            "in" | "inch" | "inches" | "\"" => Ok(Self::Inch),
            "ft" | "foot" | "feet" | "'" => Ok(Self::Foot),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

/// Get the short unit label ("mm", "cm", "m", "\"" or "'")
pub fn get_unit_label(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Millimeter => "mm",
        LengthUnit::Centimeter => "cm",
        LengthUnit::Meter => "m",
        LengthUnit::Inch => "\"",
        LengthUnit::Foot => "'",
    }
}

/// How lengths are rendered for output
///
/// Replaces the cached decimal-notation flag of older plugins: the
/// separator is decided once by the caller and handed to every formatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthFormat {
    /// Unit the numbers are expressed in
    pub unit: LengthUnit,
    /// Decimal separator ('.' or ',')
    pub decimal_separator: char,
    /// Decimals to keep; `None` uses the unit's default
    pub precision: Option<usize>,
}

impl Default for LengthFormat {
    fn default() -> Self {
        Self::new(LengthUnit::default())
    }
}

impl LengthFormat {
    /// Format with '.' as separator and the unit's default precision
    pub fn new(unit: LengthUnit) -> Self {
        Self {
            unit,
            decimal_separator: '.',
            precision: None,
        }
    }

    /// Use a different decimal separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Use a fixed number of decimals
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    fn decimals(&self) -> usize {
        self.precision
            .unwrap_or_else(|| self.unit.default_precision())
    }

    /// Render a millimetre value as a bare number in the target unit.
    ///
    /// Trailing zeros are dropped so whole values print as integers.
    pub fn format(&self, value_mm: f64) -> String {
        let value = self.unit.from_mm(value_mm);
        let mut text = format!("{:.*}", self.decimals(), value);
        if text.contains('.') {
            while text.ends_with('0') {
                text.pop();
            }
            if text.ends_with('.') {
                text.pop();
            }
        }
        if text == "-0" {
            text = "0".to_string();
        }
        if self.decimal_separator != '.' {
            text = text.replace('.', &self.decimal_separator.to_string());
        }
        text
    }

    /// Render a millimetre value followed by the unit label, e.g. `700mm`
    pub fn format_with_unit(&self, value_mm: f64) -> String {
        format!("{}{}", self.format(value_mm), get_unit_label(self.unit))
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `unit` - Target unit
pub fn format_length(value_mm: f64, unit: LengthUnit) -> String {
    LengthFormat::new(unit).format(value_mm)
}
