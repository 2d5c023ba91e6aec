//! Train-listing parser for the Renfe booking site.
//!
//! Turns the search-results markup (outbound or return, fragment or full
//! page) into a typed sequence of train offers with fares, badges, and
//! indicator flags, and serves the result as JSON.

pub mod domain;
pub mod listing;
pub mod web;
