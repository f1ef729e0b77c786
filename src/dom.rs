//! DOM Operations Adapter
//!
//! Small layer over the `dom_query` crate giving the extraction engine the
//! document capabilities it needs: parsing, CSS selection, attribute and text
//! access, and walking up the ancestor chain. The engine never mutates the tree.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// === Parsing ===

/// Parse an HTML string into a document tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating an empty value as absent. Whitespace
/// counts as a value.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name).filter(|v| !v.is_empty())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Text content with surrounding whitespace removed.
#[inline]
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Nearest ancestor with the given tag name, excluding the node itself.
///
/// # Example
///
/// ```rust
/// use rs_kc_carousel::dom;
///
/// let doc = dom::parse(r#"<div id="outer"><span><div id="inner"><img id="pic"></div></span></div>"#);
/// let img = doc.select("#pic");
/// let div = dom::closest_ancestor(&img, "div").expect("div");
/// assert_eq!(dom::id(&div).as_deref(), Some("inner"));
/// ```
#[must_use]
pub fn closest_ancestor<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = parent(sel);

    while current.exists() {
        if tag_name(&current).is_some_and(|t| t == tag) {
            return Some(current);
        }
        current = parent(&current);
    }

    None
}

// === Querying ===

/// Query all elements by CSS selector, returned one selection per node in
/// document order.
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Same as [`query_selector_all`], rooted at the whole document.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}
