//! Assembly and validation of the full parse result.
//!
//! Folds the per-row extractions into one ordered sequence of
//! [`TrainOffer`] records plus the diagnostics accumulated on the way.
//! A malformed row is skipped and reported, never allowed to abort the
//! parse: one broken row must not hide the other trains in the response.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{Price, TrainOffer};

use super::error::StructureNotFound;
use super::fares::extract_attributes;
use super::fields::{MissingField, extract_fields};
use super::rows::TrainListing;

/// A non-fatal irregularity observed while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A row was excluded because a required field could not be located.
    RowSkipped {
        /// 0-based position of the row in the listing.
        row: usize,
        /// The field that was missing.
        field: &'static str,
    },

    /// A fare card was dropped because a required part was missing.
    FareDropped {
        /// 0-based position of the row in the listing.
        row: usize,
        /// Identifier of the train the card belonged to.
        train_id: String,
        /// 0-based position of the card within the row.
        fare: usize,
        /// The part that was missing.
        field: &'static str,
    },

    /// The declared "from" price disagrees with the cheapest fare tier.
    ///
    /// The declared value is kept; the itemized minimum is reported here.
    PriceMismatch {
        /// 0-based position of the row in the listing.
        row: usize,
        /// Identifier of the affected train.
        train_id: String,
        /// The "from" price declared by the listing.
        declared: Price,
        /// The minimum across the row's fare tiers.
        cheapest_fare: Price,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RowSkipped { row, field } => {
                write!(f, "row {row}: skipped, missing required field {field}")
            }
            Diagnostic::FareDropped {
                row,
                train_id,
                fare,
                field,
            } => {
                write!(
                    f,
                    "row {row} (train {train_id}): dropped fare {fare}, missing {field}"
                )
            }
            Diagnostic::PriceMismatch {
                row,
                train_id,
                declared,
                cheapest_fare,
            } => {
                write!(
                    f,
                    "row {row} (train {train_id}): declared from-price {declared} \
                     differs from cheapest fare {cheapest_fare}"
                )
            }
        }
    }
}

/// The result of parsing one listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    /// Surviving train offers, in source order.
    pub offers: Vec<TrainOffer>,
    /// Non-fatal irregularities, in the order they were observed.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a results listing into train offers.
///
/// Accepts an isolated results fragment or a full page containing one;
/// both yield the same offers. Fails only with [`StructureNotFound`] when
/// the results container is absent; an empty container parses to an empty
/// report. Parsing is pure and stateless, so repeated calls over the same
/// markup yield identical reports.
///
/// # Examples
///
/// ```
/// use renfe_server::listing::parse_train_list;
///
/// let report = parse_train_list(
///     r#"<div class="container box-target-principal"></div>"#,
/// ).unwrap();
/// assert!(report.offers.is_empty());
///
/// assert!(parse_train_list("<p>not a listing</p>").is_err());
/// ```
pub fn parse_train_list(markup: &str) -> Result<ParseReport, StructureNotFound> {
    let listing = TrainListing::parse(markup)?;

    let mut report = ParseReport::default();

    for (row_index, row) in listing.rows().enumerate() {
        let fields = match extract_fields(&row) {
            Ok(fields) => fields,
            Err(MissingField(field)) => {
                warn!(row = row_index, field, "skipping row with missing field");
                report.diagnostics.push(Diagnostic::RowSkipped {
                    row: row_index,
                    field,
                });
                continue;
            }
        };

        let attributes = extract_attributes(&row);

        for dropped in &attributes.dropped_fares {
            warn!(
                row = row_index,
                train_id = %fields.train_id,
                fare = dropped.index,
                field = dropped.field,
                "dropping incomplete fare card"
            );
            report.diagnostics.push(Diagnostic::FareDropped {
                row: row_index,
                train_id: fields.train_id.clone(),
                fare: dropped.index,
                field: dropped.field,
            });
        }

        let offer = TrainOffer {
            train_id: fields.train_id,
            service_type: fields.service_type,
            departure_time: fields.departure_time,
            arrival_time: fields.arrival_time,
            duration: fields.duration,
            price_from: fields.price_from,
            fares: attributes.fares,
            badges: attributes.badges,
            accessible: attributes.accessible,
            eco_friendly: attributes.eco_friendly,
        };

        // The declared "from" price is the user-facing number and wins,
        // but a disagreement with the itemized tiers is worth reporting.
        if let Some(cheapest_fare) = offer.cheapest_fare() {
            if cheapest_fare != offer.price_from {
                report.diagnostics.push(Diagnostic::PriceMismatch {
                    row: row_index,
                    train_id: offer.train_id.clone(),
                    declared: offer.price_from,
                    cheapest_fare,
                });
            }
        }

        report.offers.push(offer);
    }

    debug!(
        trains = report.offers.len(),
        diagnostics = report.diagnostics.len(),
        "parsed train listing"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display() {
        let skipped = Diagnostic::RowSkipped {
            row: 3,
            field: "price_from",
        };
        assert_eq!(
            skipped.to_string(),
            "row 3: skipped, missing required field price_from"
        );

        let dropped = Diagnostic::FareDropped {
            row: 0,
            train_id: "i_1".to_string(),
            fare: 2,
            field: "code",
        };
        assert_eq!(
            dropped.to_string(),
            "row 0 (train i_1): dropped fare 2, missing code"
        );

        let mismatch = Diagnostic::PriceMismatch {
            row: 1,
            train_id: "i_2".to_string(),
            declared: Price::from_cents(3000),
            cheapest_fare: Price::from_cents(3530),
        };
        assert_eq!(
            mismatch.to_string(),
            "row 1 (train i_2): declared from-price 30.00 differs from cheapest fare 35.30"
        );
    }
}
