//! Extraction pipeline: parse, index image payloads, select candidates,
//! build records, emit in document order.

use dom_query::{Document, Selection};
use tracing::{debug, warn};

use crate::dom;
use crate::error::Result;
use crate::payload::{ImagePayloadIndex, ScriptImagePattern};
use crate::record::{RecordBuilder, RecordOutcome};
use crate::result::ExtractResult;
use crate::selector;
use crate::Options;

/// Extract carousel entries from an HTML string.
pub(crate) fn extract_carousel(html: &str, options: &Options) -> Result<ExtractResult> {
    options.validate()?;
    let pattern = ScriptImagePattern::from_options(options)?;

    debug!(html_len = html.len(), "parsing document");
    let doc = dom::parse(html);

    extract_from_document(&doc, &pattern, options)
}

/// Run the two passes over an already parsed document.
///
/// The payload index is complete before any candidate is joined, since an
/// injecting script may appear before or after the image it targets.
pub(crate) fn extract_from_document(
    doc: &Document,
    pattern: &ScriptImagePattern,
    options: &Options,
) -> Result<ExtractResult> {
    let index = ImagePayloadIndex::build(doc, pattern);
    let candidates = selector::carousel_images(doc);
    debug!(candidates = candidates.len(), "selected carousel images");

    let builder = RecordBuilder::new(&index, options);
    let result = collect_records(&candidates, &builder)?;

    debug!(
        records = result.results.len(),
        warnings = result.warnings.len(),
        "carousel extraction complete"
    );
    Ok(result)
}

/// Build every candidate in order. Orphans become warnings and the loop
/// moves on; a missing image stops it.
fn collect_records(candidates: &[Selection], builder: &RecordBuilder) -> Result<ExtractResult> {
    let mut result = ExtractResult::default();

    for candidate in candidates {
        match builder.build(candidate)? {
            RecordOutcome::Built(record) => result.results.push(record),
            RecordOutcome::Orphan(warning) => {
                warn!("{warning}");
                result.warnings.push(warning);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn invalid_options_fail_before_parsing() {
        let options = Options {
            base_url: "not a url".to_string(),
            ..Options::default()
        };
        assert!(matches!(
            extract_carousel("<html></html>", &options),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn script_after_markup_is_joined() {
        let html = r#"
            <div data-attrid="kc:/biology/domesticated_animal:breeds">
                <a href="/search?q=beagle"><div><div>Beagle</div><div></div></div><img id="dimg_b"></a>
            </div>
            <script>(function(){var s='data:image/jpeg;base64,BEAGLE';var ii=['dimg_b'];_setImagesSrc(ii,s);})();</script>
        "#;
        let result = extract_carousel(html, &Options::default()).expect("extract");
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].image, "data:image/jpeg;base64,BEAGLE");
    }

    #[test]
    fn script_before_markup_is_joined() {
        let html = r#"
            <script>(function(){var s='data:image/jpeg;base64,PUG';var ii=['dimg_p'];_setImagesSrc(ii,s);})();</script>
            <div data-attrid="kc:/biology/domesticated_animal:breeds">
                <a href="/search?q=pug"><div><div>Pug</div></div><img id="dimg_p"></a>
            </div>
        "#;
        let result = extract_carousel(html, &Options::default()).expect("extract");
        assert_eq!(result.results[0].image, "data:image/jpeg;base64,PUG");
    }

    #[test]
    fn missing_image_aborts_whole_extraction() {
        let html = r#"
            <div data-attrid="kc:/music/artist:albums">
                <a href="/search?q=a"><img data-src="https://example.com/a.jpg"></a>
                <a href="/search?q=b"><img id="dimg_none"></a>
            </div>
        "#;
        assert!(matches!(
            extract_carousel(html, &Options::default()),
            Err(Error::MissingImageData { .. })
        ));
    }

    #[test]
    fn orphans_are_collected_as_warnings() {
        let doc = dom::parse(
            r#"<div><img id="lonely" data-src="https://example.com/x.jpg"></div>
               <a href="/search?q=a"><div><div>Akita</div></div><img data-src="https://example.com/a.jpg"></a>
               <div><img id="stray" data-src="https://example.com/y.jpg"></div>"#,
        );
        let candidates = dom::select_all(&doc, "img");
        let index = ImagePayloadIndex::default();
        let options = Options::default();
        let builder = RecordBuilder::new(&index, &options);

        let result = collect_records(&candidates, &builder).expect("extract");

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].name, "Akita");
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].starts_with("Couldn't find parent link"));
        assert!(result.warnings[0].contains("lonely"));
        assert!(result.warnings[1].contains("stray"));
    }
}
