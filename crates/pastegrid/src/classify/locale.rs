//! Thousands/decimal separator conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PastegridError;

/// How a human writes ten thousand with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericLocale {
    /// `10,000.00`
    #[serde(rename = "10,000.00")]
    CommaDot,
    /// `10 000.00`
    #[serde(rename = "10 000.00")]
    SpaceDot,
    /// `10 000,00`
    #[serde(rename = "10 000,00")]
    SpaceComma,
    /// `10.000,00`
    #[serde(rename = "10.000,00")]
    DotComma,
}

impl NumericLocale {
    /// All supported locales.
    pub const ALL: [NumericLocale; 4] = [
        NumericLocale::CommaDot,
        NumericLocale::SpaceDot,
        NumericLocale::SpaceComma,
        NumericLocale::DotComma,
    ];

    /// The sample spelling used to name this locale.
    pub fn sample(&self) -> &'static str {
        match self {
            NumericLocale::CommaDot => "10,000.00",
            NumericLocale::SpaceDot => "10 000.00",
            NumericLocale::SpaceComma => "10 000,00",
            NumericLocale::DotComma => "10.000,00",
        }
    }

    /// Rewrite a human-formatted number into `-?\d+(\.\d+)?` form.
    ///
    /// Input that was never a number comes out as something `f64` parsing
    /// rejects; deciding validity is left to the classifier.
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            NumericLocale::CommaDot => raw.replace(',', ""),
            NumericLocale::SpaceDot => raw.replace(' ', ""),
            NumericLocale::SpaceComma => raw.replace(' ', "").replace(',', "."),
            NumericLocale::DotComma => raw.replace('.', "").replace(',', "."),
        }
    }
}

impl Default for NumericLocale {
    fn default() -> Self {
        NumericLocale::CommaDot
    }
}

impl fmt::Display for NumericLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sample())
    }
}

impl FromStr for NumericLocale {
    type Err = PastegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericLocale::ALL
            .into_iter()
            .find(|locale| locale.sample() == s.trim())
            .ok_or_else(|| {
                PastegridError::Config(format!(
                    "Unknown numeric locale '{}' (expected one of: 10,000.00, 10 000.00, 10 000,00, 10.000,00)",
                    s
                ))
            })
    }
}
