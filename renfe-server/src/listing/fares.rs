//! Fare tiers, badges, and indicator flags for one train row.
//!
//! Fare cards carry their data in attributes (`data-precio-tarifa`,
//! `data-cod-tarifa`) with the tier label nested in the card header.
//! A card missing a required part is dropped and reported, never fatal
//! to the train. Badges and the accessibility/eco indicators are
//! best-effort presence checks.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::domain::{Badge, FareOption, Price};

use super::rows::{TrainRow, normalized_text};

static FARE_CARD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.seleccion-resumen-bottom.card").expect("valid selector")
});

static CARD_HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.card-header").expect("valid selector"));

/// The tier label span; distinguished from the price span by its inline
/// padding style.
static FARE_NAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.card-header span[style*=\"padding-right\"]").expect("valid selector")
});

static FEATURE_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid selector"));

static BADGES: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".badge-amarillo-junto, .badge-azul-junto").expect("valid selector")
});

static INFO_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.info-varios").expect("valid selector"));

const PRICE_ATTR: &str = "data-precio-tarifa";
const CODE_ATTR: &str = "data-cod-tarifa";
const LINK_ATTR: &str = "data-cod-tpenlacesilencio";

const ACCESSIBLE_MARKER: &str = "Plaza H disponible";
const ECO_MARKER: &str = "Cero emisiones";

/// A fare card that was dropped because a required part was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DroppedFare {
    /// Position of the card within the row, 0-based as listed.
    pub index: usize,
    /// The required part that was missing.
    pub field: &'static str,
}

/// Fares, badges, and indicator flags of one train row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RowAttributes {
    pub fares: Vec<FareOption>,
    pub badges: Vec<Badge>,
    pub accessible: bool,
    pub eco_friendly: bool,
    pub dropped_fares: Vec<DroppedFare>,
}

/// Extract fare tiers, badges, and indicator flags from one row.
///
/// Never fails: missing substructures yield empty collections or `false`
/// flags, and incomplete fare cards are recorded in `dropped_fares`.
pub(crate) fn extract_attributes(row: &TrainRow<'_>) -> RowAttributes {
    let mut attributes = RowAttributes::default();

    for (index, card) in row.find_all(&FARE_CARD).enumerate() {
        match extract_fare(card) {
            Ok(fare) => attributes.fares.push(fare),
            Err(field) => attributes.dropped_fares.push(DroppedFare { index, field }),
        }
    }

    for badge_element in row.find_all(&BADGES) {
        let text = normalized_text(badge_element);
        if text.is_empty() {
            continue;
        }
        let badge = Badge::from_label(&text);
        if !attributes.badges.contains(&badge) {
            attributes.badges.push(badge);
        }
    }

    if let Some(info) = row.find(&INFO_BLOCK) {
        let text = normalized_text(info);
        attributes.accessible = text.contains(ACCESSIBLE_MARKER);
        attributes.eco_friendly = text.contains(ECO_MARKER);
    }

    attributes
}

/// Extract one fare card; the error names the missing required part.
fn extract_fare(card: ElementRef<'_>) -> Result<FareOption, &'static str> {
    let name = extract_fare_name(card).ok_or("name")?;

    let price = card
        .value()
        .attr(PRICE_ATTR)
        .and_then(Price::parse)
        .ok_or("price")?;

    let code = card
        .value()
        .attr(CODE_ATTR)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or("code")?
        .to_string();

    let link_code = card
        .value()
        .attr(LINK_ATTR)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_string);

    let features = card
        .select(&FEATURE_ITEMS)
        .map(normalized_text)
        .filter(|feature| !feature.is_empty())
        .collect();

    Ok(FareOption {
        name,
        price,
        code,
        link_code,
        features,
    })
}

fn extract_fare_name(card: ElementRef<'_>) -> Option<String> {
    if let Some(span) = card.select(&FARE_NAME).next() {
        let name = normalized_text(span);
        if !name.is_empty() {
            return Some(name);
        }
    }

    // Fallback: the header text up to where the price starts.
    let header = card.select(&CARD_HEADER).next()?;
    let name: String = normalized_text(header)
        .chars()
        .take_while(|c| !c.is_ascii_digit() && *c != '€')
        .collect();
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
