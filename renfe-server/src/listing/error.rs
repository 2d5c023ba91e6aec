//! Fatal parse errors.

/// The train-list container is absent from the input.
///
/// This signals that the markup is not a recognizable results listing at
/// all (an error page, an expired session). It is distinct from a listing
/// whose container is present but holds zero trains, which parses to an
/// empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("train listing container not found in markup")]
pub struct StructureNotFound;
