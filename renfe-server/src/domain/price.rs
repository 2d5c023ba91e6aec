//! Prices lifted from the listing markup.
//!
//! The site prints prices in the Spanish locale ("35,30 €", "1.234,56")
//! and repeats them in data attributes ("35,30"). The currency symbol is
//! stripped, not stored. Amounts are kept cent-exact so fare minima can
//! be compared without float drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when text contains no recognizable amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct PriceError {
    reason: &'static str,
}

/// A currency-unit-agnostic price, stored as whole cents.
///
/// # Examples
///
/// ```
/// use renfe_server::domain::Price;
///
/// let p = Price::parse("35,30 €").unwrap();
/// assert_eq!(p.cents(), 3530);
/// assert_eq!(p.to_string(), "35.30");
///
/// // Thousands dots are separators in the source locale
/// assert_eq!(Price::parse("1.234,56").unwrap().cents(), 123_456);
///
/// // Amounts embedded in prose are found too
/// assert_eq!(Price::parse("Precio desde 52,40 euros").unwrap().cents(), 5240);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Create a price from a cent count.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Extract the first amount from listing text.
    ///
    /// Dots are treated as thousands separators and the comma as the
    /// decimal separator, per the source locale. A bare dot followed by
    /// one or two digits is read as a decimal point so that already
    /// normalized amounts ("35.30") parse the same way.
    pub fn parse(text: &str) -> Option<Self> {
        let token = first_amount_token(text)?;

        let normalized = if token.contains(',') {
            // "1.234,56" -> "1234.56"
            token.replace('.', "").replace(',', ".")
        } else if let Some((whole, frac)) = token.rsplit_once('.') {
            if frac.len() <= 2 {
                // "35.30" -> decimal dot
                format!("{}.{}", whole.replace('.', ""), frac)
            } else {
                // "1.234" -> thousands dot
                token.replace('.', "")
            }
        } else {
            token
        };

        let (whole, frac) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        let whole: i64 = whole.parse().ok()?;
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            2 => frac.parse().ok()?,
            _ => return None,
        };

        Some(Self::from_cents(whole * 100 + frac_cents))
    }

    /// The amount in whole cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// The amount as a floating-point value, for serialization.
    pub fn value(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(PriceError {
            reason: "no amount found in text",
        })
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, (self.cents % 100).abs())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::from_cents((value * 100.0).round() as i64))
    }
}

/// First run of digit/separator characters that contains a digit.
fn first_amount_token(text: &str) -> Option<String> {
    let mut token = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            token.push(c);
        } else if token.chars().any(|c| c.is_ascii_digit()) {
            break;
        } else {
            token.clear();
        }
    }
    // Trailing separators belong to the surrounding prose ("35,30,")
    let token = token.trim_matches(|c| c == '.' || c == ',').to_string();
    if token.chars().any(|c| c.is_ascii_digit()) {
        Some(token)
    } else {
        None
    }
}
