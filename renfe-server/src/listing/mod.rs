//! Parsing of train-search results markup.
//!
//! The input is HTML authored for rendering, not a designed data format:
//! prices, fare tiers, and indicator flags are spread across element text,
//! nested tags, optional siblings, and textual badges that may or may not
//! be present. Parsing works in sequence over one markup fragment:
//!
//! 1. segment the listing into per-train row nodes (`rows`),
//! 2. extract each row's scalar fields (`fields`) and its fares,
//!    badges, and indicator flags (`fares`),
//! 3. assemble and validate the offers, accumulating diagnostics
//!    (`parse`).
//!
//! Only a missing results container is fatal; every per-row irregularity
//! degrades to a skipped row, a dropped fare, or a reported mismatch.

mod error;
mod fares;
mod fields;
mod parse;
mod rows;

#[cfg(test)]
mod parse_tests;

pub use error::StructureNotFound;
pub use fields::MissingField;
pub use parse::{Diagnostic, ParseReport, parse_train_list};
pub use rows::{TrainListing, TrainRow};
