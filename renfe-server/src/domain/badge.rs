//! Promotional badge labels on listed trains.
//!
//! The listing highlights some trains with short textual badges ("Precio
//! más bajo", "Más rápido"). The set is open: labels the table does not
//! know are captured verbatim as [`Badge::Other`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A badge label attached to a train offer.
///
/// # Examples
///
/// ```
/// use renfe_server::domain::Badge;
///
/// assert_eq!(Badge::from_label("Precio más bajo"), Badge::LowestPrice);
/// assert_eq!(Badge::from_label("MÁS RÁPIDO"), Badge::Fastest);
/// assert_eq!(
///     Badge::from_label("lowest price"),
///     Badge::Other("lowest price".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Badge {
    /// Cheapest offer of the listing.
    LowestPrice,
    /// Shortest travel time of the listing.
    Fastest,
    /// Any label not in the known table, carried verbatim.
    Other(String),
}

impl Badge {
    /// Match badge text against the known labels, case-insensitively.
    pub fn from_label(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.to_lowercase().as_str() {
            "precio más bajo" => Self::LowestPrice,
            "más rápido" => Self::Fastest,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// The badge as listing-facing text.
    pub fn label(&self) -> &str {
        match self {
            Self::LowestPrice => "Precio más bajo",
            Self::Fastest => "Más rápido",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Badge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}
