//! Record Builder
//!
//! Joins one carousel image with its enclosing link, its caption texts and
//! its image payload, and normalizes the result into a [`CarouselResult`].

use dom_query::Selection;

use crate::dom;
use crate::error::{Error, Result};
use crate::escape::decode_hex_escapes;
use crate::patterns::CAROUSEL_TEXT_SELECTOR;
use crate::payload::ImagePayloadIndex;
use crate::result::CarouselResult;
use crate::Options;

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The candidate produced a record.
    Built(CarouselResult),
    /// The candidate had no enclosing anchor and was skipped. Holds the
    /// warning text.
    Orphan(String),
}

/// Builds records for the candidates of one document.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'a> {
    index: &'a ImagePayloadIndex,
    base_url: &'a str,
}

impl<'a> RecordBuilder<'a> {
    #[must_use]
    pub fn new(index: &'a ImagePayloadIndex, options: &'a Options) -> Self {
        Self {
            index,
            base_url: &options.base_url,
        }
    }

    /// Build the record for one candidate image.
    ///
    /// Returns [`RecordOutcome::Orphan`] when the image sits outside any
    /// anchor, and [`Error::MissingImageData`] when neither `data-src` nor
    /// the payload index gives an image.
    pub fn build(&self, image: &Selection) -> Result<RecordOutcome> {
        let Some(anchor) = dom::closest_ancestor(image, "a") else {
            return Ok(RecordOutcome::Orphan(format!(
                "Couldn't find parent link for image tag: {}",
                dom::outer_html(image)
            )));
        };

        let (name, year) = caption_texts(&anchor);
        let href = dom::get_attribute(&anchor, "href").unwrap_or_default();
        let raw_image = resolve_image(image, self.index)?;

        Ok(RecordOutcome::Built(CarouselResult {
            name,
            extensions: extensions_for(&year),
            link: absolutize_link(&href, self.base_url),
            image: decode_hex_escapes(&raw_image).into_owned(),
        }))
    }
}

/// Name and year of a carousel entry: trimmed text of the first two
/// `div > div` elements inside the anchor. Missing ones are empty.
#[must_use]
pub fn caption_texts(anchor: &Selection) -> (String, String) {
    let mut texts = dom::query_selector_all(anchor, CAROUSEL_TEXT_SELECTOR)
        .into_iter()
        .map(|sel| dom::trimmed_text(&sel));

    let name = texts.next().unwrap_or_default();
    let year = texts.next().unwrap_or_default();
    (name, year)
}

/// `Some([year])` when the year has text after trimming, otherwise `None`.
#[must_use]
pub fn extensions_for(year: &str) -> Option<Vec<String>> {
    let year = year.trim();
    if year.is_empty() {
        None
    } else {
        Some(vec![year.to_string()])
    }
}

/// Prefix `base` unless the link already starts with it. Applying it twice
/// gives the same result as applying it once.
///
/// ```rust
/// use rs_kc_carousel::record::absolutize_link;
///
/// let base = "https://www.google.com";
/// let once = absolutize_link("/search?q=labrador", base);
/// assert_eq!(once, "https://www.google.com/search?q=labrador");
/// assert_eq!(absolutize_link(&once, base), once);
/// ```
#[must_use]
pub fn absolutize_link(href: &str, base: &str) -> String {
    if href.starts_with(base) {
        href.to_string()
    } else {
        format!("{base}{href}")
    }
}

/// The candidate's image before escape decoding: a non-empty `data-src`,
/// else the payload indexed under its `id`.
pub fn resolve_image(image: &Selection, index: &ImagePayloadIndex) -> Result<String> {
    if let Some(src) = dom::non_empty_attribute(image, "data-src") {
        return Ok(src);
    }

    let image_id = dom::id(image).unwrap_or_default();
    index
        .get(&image_id)
        .map(str::to_string)
        .ok_or(Error::MissingImageData { image_id })
}
