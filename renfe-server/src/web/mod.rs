//! Web layer for the train-listing parser.
//!
//! Exposes the parser over HTTP: collaborators that fetched the results
//! markup post it here and get the typed offers back as JSON.

mod dto;
mod routes;

pub use dto::{ErrorResponse, ParseListingResponse};
pub use routes::create_router;
