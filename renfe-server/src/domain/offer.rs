//! Train offer records assembled from the listing.
//!
//! These are the parse output handed to callers: immutable once built,
//! independent of each other, and serialized with the wire names the HTTP
//! layer exposes.

use serde::{Deserialize, Serialize};

use super::{Badge, ClockTime, Price, ServiceBrand, TravelTime};

/// One purchasable fare tier of a train offer.
///
/// Tiers keep the order they are listed in, cheapest to priciest as the
/// site presents them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareOption {
    /// Tier label (e.g. "Básico", "Elige", "Prémium").
    pub name: String,

    /// Tier price.
    pub price: Price,

    /// Fare code used by the booking backend.
    pub code: String,

    /// Correlation code for the backend purchase link, when present.
    #[serde(rename = "tp_enlace", default)]
    pub link_code: Option<String>,

    /// Included perks, in listed order.
    #[serde(default)]
    pub features: Vec<String>,
}

/// One train in the search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainOffer {
    /// Row identifier, unique within one parse result (e.g. "i_1").
    pub train_id: String,

    /// Commercial brand of the service.
    pub service_type: ServiceBrand,

    /// Local departure clock time.
    pub departure_time: ClockTime,

    /// Local arrival clock time.
    pub arrival_time: ClockTime,

    /// Elapsed travel time.
    pub duration: TravelTime,

    /// Lowest advertised price, as declared by the listing's "from"
    /// element. See [`TrainOffer::cheapest_fare`] for the itemized minimum.
    pub price_from: Price,

    /// Fare tiers in listed order; empty when the row shows none.
    #[serde(default)]
    pub fares: Vec<FareOption>,

    /// Promotional badges, duplicates collapsed, first-seen order.
    #[serde(default)]
    pub badges: Vec<Badge>,

    /// Whether a reduced-mobility seat indicator is present.
    pub accessible: bool,

    /// Whether a zero-emissions indicator is present.
    pub eco_friendly: bool,
}

impl TrainOffer {
    /// Minimum price across the fare tiers, `None` when there are no tiers.
    ///
    /// When fares are present this normally equals [`price_from`]; the
    /// listing's declared value wins when the two disagree, and the
    /// discrepancy is reported as a parse diagnostic.
    ///
    /// [`price_from`]: TrainOffer::price_from
    pub fn cheapest_fare(&self) -> Option<Price> {
        self.fares.iter().map(|fare| fare.price).min()
    }
}
