//! Candidate Selector
//!
//! Finds the carousel thumbnails: `img` elements under an anchor whose
//! `href` contains `search?`, under a `div` whose `data-attrid` starts with
//! `kc:` (e.g. `kc:/biology/domesticated_animal:breeds`,
//! `kc:/music/artist:albums`, `kc:/visual_art/visual_artist:works`).

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::CAROUSEL_IMAGE_SELECTOR;

/// Carousel image candidates in document order. An empty vector means the
/// document has no carousel and is not an error.
#[must_use]
pub fn carousel_images(doc: &Document) -> Vec<Selection<'_>> {
    dom::select_all(doc, CAROUSEL_IMAGE_SELECTOR)
}
