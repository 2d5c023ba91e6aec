//! Data transfer objects for web responses.

use serde::{Deserialize, Serialize};

use crate::domain::TrainOffer;
use crate::listing::ParseReport;

/// Response for a parsed listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseListingResponse {
    /// Parsed train offers, in source order.
    pub trains: Vec<TrainOffer>,

    /// Human-readable parse diagnostics, in observation order.
    pub diagnostics: Vec<String>,
}

impl From<ParseReport> for ParseListingResponse {
    fn from(report: ParseReport) -> Self {
        Self {
            trains: report.offers,
            diagnostics: report
                .diagnostics
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
