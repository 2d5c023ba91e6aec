//! Domain types for the train-listing parser.
//!
//! This module contains the validated domain model the parser produces.
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity; the open-set types
//! ([`ServiceBrand`], [`Badge`]) round-trip unknown source text instead
//! of rejecting it.

mod badge;
mod brand;
mod clock;
mod offer;
mod price;
mod travel_time;

pub use badge::Badge;
pub use brand::ServiceBrand;
pub use clock::{ClockTime, ClockTimeError};
pub use offer::{FareOption, TrainOffer};
pub use price::{Price, PriceError};
pub use travel_time::{TravelTime, TravelTimeError};
