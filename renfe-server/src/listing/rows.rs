//! Segmentation of the results markup into per-train rows.
//!
//! The listing repeats one row structure per train inside a single results
//! container. Rows are located by their structural role, never by
//! position, so a listing with zero trains segments cleanly into nothing
//! and surrounding page chrome is never read.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::error::StructureNotFound;

/// The results container that holds all train rows.
static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.box-target-principal").expect("valid selector"));

/// One row per listed train.
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.selectedTren[role=\"listitem\"]").expect("valid selector"));

/// A parsed results listing, ready to be segmented into train rows.
///
/// Accepts either an isolated results fragment or a full page containing
/// one; both segment into the same rows. Construction fails only when the
/// results container itself is missing.
#[derive(Debug)]
pub struct TrainListing {
    document: Html,
}

impl TrainListing {
    /// Parse markup and verify the results container is present.
    pub fn parse(markup: &str) -> Result<Self, StructureNotFound> {
        let document = Html::parse_document(markup);
        if document.select(&CONTAINER).next().is_none() {
            return Err(StructureNotFound);
        }
        Ok(Self { document })
    }

    /// Iterate the train rows in source order.
    ///
    /// Each call returns a fresh iterator over the same rows, so callers
    /// can re-derive row positions independently of any earlier pass.
    /// Zero rows is a valid empty listing, not an error.
    pub fn rows(&self) -> impl Iterator<Item = TrainRow<'_>> {
        self.container().select(&ROW).map(TrainRow)
    }

    fn container(&self) -> ElementRef<'_> {
        // Presence was checked in parse.
        self.document
            .select(&CONTAINER)
            .next()
            .expect("container present")
    }
}

/// One per-train markup node, opaque to callers outside this module tree.
#[derive(Clone, Copy)]
pub struct TrainRow<'a>(pub(crate) ElementRef<'a>);

impl<'a> TrainRow<'a> {
    /// The row's `id` attribute, when present.
    pub(crate) fn id_attr(&self) -> Option<&'a str> {
        self.0.value().attr("id")
    }

    /// First element under the row matching `selector`.
    pub(crate) fn find(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.0.select(selector).next()
    }

    /// All elements under the row matching `selector`, in source order.
    pub(crate) fn find_all(&self, selector: &Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.0.select(selector)
    }
}

/// Element text with whitespace collapsed and ends trimmed.
pub(crate) fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
