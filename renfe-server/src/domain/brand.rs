//! Carrier brand tags for listed services.
//!
//! The booking site labels each train with a commercial brand (AVE, AVLO,
//! ALVIA, ...). New brands appear without notice, so the known set is open:
//! anything unrecognized is carried through verbatim as [`ServiceBrand::Other`]
//! rather than failing the parse.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Brand the original parser falls back to when the markup names none.
const GENERIC_BRAND: &str = "Tren";

/// A service brand tag from the listing.
///
/// Known brands are a closed enumeration so consumers can match on them
/// exhaustively; everything else round-trips through [`ServiceBrand::Other`].
///
/// # Examples
///
/// ```
/// use renfe_server::domain::ServiceBrand;
///
/// assert_eq!(ServiceBrand::parse("AVE"), ServiceBrand::Ave);
/// assert_eq!(ServiceBrand::parse("avlo"), ServiceBrand::Avlo);
/// assert_eq!(ServiceBrand::parse("Media Distancia"), ServiceBrand::MediaDistancia);
///
/// // Unknown brands are preserved, not rejected
/// assert_eq!(
///     ServiceBrand::parse("IRYO"),
///     ServiceBrand::Other("IRYO".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceBrand {
    /// Long-distance high-speed service.
    Ave,
    /// Low-cost high-speed service.
    Avlo,
    /// Hybrid high-speed/conventional long distance.
    Alvia,
    /// Mid-distance high-speed shuttle.
    Avant,
    /// Conventional long-distance intercity.
    Intercity,
    /// Regional mid-distance service (MD).
    MediaDistancia,
    /// Any brand not in the known table, carried verbatim.
    Other(String),
}

impl ServiceBrand {
    /// Match listing text against the known-brand table.
    ///
    /// Matching is case-insensitive: first the whole trimmed text, then
    /// tag-wise against its whitespace-separated words, so decorated text
    /// like "AVE Internacional" still resolves. Unmatched text becomes
    /// [`ServiceBrand::Other`] with the trimmed original.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let upper = trimmed.to_uppercase();

        if let Some(brand) = Self::from_tag(&upper) {
            return brand;
        }
        for word in upper.split_whitespace() {
            if let Some(brand) = Self::from_tag(word) {
                return brand;
            }
        }

        Self::Other(trimmed.to_string())
    }

    /// The fallback used when the markup carries no brand at all.
    pub fn fallback() -> Self {
        Self::Other(GENERIC_BRAND.to_string())
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AVE" => Some(Self::Ave),
            "AVLO" => Some(Self::Avlo),
            "ALVIA" => Some(Self::Alvia),
            "AVANT" => Some(Self::Avant),
            "INTERCITY" => Some(Self::Intercity),
            "MD" | "MEDIA DISTANCIA" => Some(Self::MediaDistancia),
            _ => None,
        }
    }

    /// The brand as listing-facing text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ave => "AVE",
            Self::Avlo => "AVLO",
            Self::Alvia => "ALVIA",
            Self::Avant => "AVANT",
            Self::Intercity => "Intercity",
            Self::MediaDistancia => "MD",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ServiceBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceBrand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceBrand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
