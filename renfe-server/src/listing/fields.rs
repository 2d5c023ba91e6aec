//! Scalar field extraction for one train row.
//!
//! Pulls the identifier, brand, times, duration, and advertised "from"
//! price out of a row node. The markup encodes these through a mix of
//! attributes and nested elements, none of which are contractually stable,
//! so every lookup is by structural role and required fields report which
//! one could not be located.

use std::sync::LazyLock;

use scraper::Selector;

use crate::domain::{ClockTime, Price, ServiceBrand, TravelTime};

use super::rows::{TrainRow, normalized_text};

/// Train-type image; its alt text names the brand ("Tipo de tren AVE").
static SERVICE_IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[alt*=\"Tipo de tren\"]").expect("valid selector"));

/// Departure and arrival clock times, in that order.
static TIME_HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h5[aria-hidden=\"true\"]").expect("valid selector"));

/// Spelled-out travel duration.
static DURATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.text-number").expect("valid selector"));

/// Advertised minimum price; the amount lives in the title attribute.
static PRICE_FROM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.precio-final").expect("valid selector"));

const BRAND_PREFIX: &str = "Tipo de tren";

/// A required field that could not be located in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing required field: {0}")]
pub struct MissingField(pub &'static str);

/// The scalar fields of one train row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowFields {
    pub train_id: String,
    pub service_type: ServiceBrand,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub duration: TravelTime,
    pub price_from: Price,
}

/// Extract the scalar fields from one row.
///
/// `train_id`, both clock times and `price_from` are required; the brand
/// degrades to the generic fallback and the duration is derived from the
/// clock times when its element is missing or unreadable.
pub(crate) fn extract_fields(row: &TrainRow<'_>) -> Result<RowFields, MissingField> {
    let train_id = extract_train_id(row).ok_or(MissingField("train_id"))?;

    let mut times = row
        .find_all(&TIME_HEADINGS)
        .map(|heading| clock_time(&normalized_text(heading)));
    let departure_time = times
        .next()
        .flatten()
        .ok_or(MissingField("departure_time"))?;
    let arrival_time = times.next().flatten().ok_or(MissingField("arrival_time"))?;

    let service_type = extract_brand(row).unwrap_or_else(ServiceBrand::fallback);

    let duration = row
        .find(&DURATION)
        .and_then(|element| TravelTime::parse(&normalized_text(element)))
        .unwrap_or_else(|| TravelTime::between(departure_time, arrival_time));

    let price_from = extract_price_from(row).ok_or(MissingField("price_from"))?;

    Ok(RowFields {
        train_id,
        service_type,
        departure_time,
        arrival_time,
        duration,
        price_from,
    })
}

/// Row ids look like "tren_i_1"; the prefix is presentation noise.
fn extract_train_id(row: &TrainRow<'_>) -> Option<String> {
    let id = row.id_attr()?.trim();
    let id = id.strip_prefix("tren_").unwrap_or(id);
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

fn extract_brand(row: &TrainRow<'_>) -> Option<ServiceBrand> {
    let alt = row.find(&SERVICE_IMG)?.value().attr("alt")?;
    let (_, brand_text) = alt.split_once(BRAND_PREFIX)?;
    let brand_text = brand_text.trim();
    if brand_text.is_empty() {
        return None;
    }
    Some(ServiceBrand::parse(brand_text))
}

/// Times are shown as "06:24 h"; the unit suffix is dropped before parsing.
fn clock_time(text: &str) -> Option<ClockTime> {
    let text = text.trim().trim_end_matches(" h").trim();
    ClockTime::parse(text).ok()
}

fn extract_price_from(row: &TrainRow<'_>) -> Option<Price> {
    let element = row.find(&PRICE_FROM)?;
    if let Some(price) = element.value().attr("title").and_then(Price::parse) {
        return Some(price);
    }
    // Some rows omit the title and only render the amount as text.
    Price::parse(&normalized_text(element))
}
