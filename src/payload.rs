//! Image Payload Indexer
//!
//! Some carousel thumbnails carry no usable `src`; their data is injected
//! later by a script block that calls a setter with a list of image ids and
//! a `data:` literal. This module scans every script block once and records
//! `id -> still-escaped payload` so that candidates can be joined regardless
//! of whether the script comes before or after the markup.

use std::borrow::Cow;
use std::collections::HashMap;

use dom_query::Document;
use regex::Regex;
use tracing::{debug, trace};

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{
    script_image_data_regex, SCRIPT_IMAGE_BINDING, SCRIPT_IMAGE_DATA, SCRIPT_SELECTOR,
};
use crate::Options;

/// Matcher for the image injection micro-grammar.
///
/// Wraps the compiled pattern; the default prefix reuses the precompiled
/// static.
#[derive(Debug, Clone)]
pub struct ScriptImagePattern {
    regex: Cow<'static, Regex>,
}

impl ScriptImagePattern {
    /// Pattern for the prefix configured in `options`.
    pub fn from_options(options: &Options) -> Result<Self> {
        if options.uses_default_image_prefix() {
            return Ok(Self::default());
        }

        let regex = script_image_data_regex(&options.image_data_prefix).map_err(|e| {
            Error::InvalidOption(format!(
                "image_data_prefix '{}': {e}",
                options.image_data_prefix
            ))
        })?;

        Ok(Self {
            regex: Cow::Owned(regex),
        })
    }

    /// Match one script body. All or nothing: returns `(id, data)` only when
    /// the statement declares the data literal and later hands a one-id list
    /// and that data variable, in that order, to a call. Unrelated list and
    /// call pairs between the two are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_kc_carousel::payload::ScriptImagePattern;
    ///
    /// let pattern = ScriptImagePattern::default();
    /// let script = r"(function(){var s='data:image/jpeg;base64,/9j\x2F';var ii=['dimg_1'];_setImagesSrc(ii,s);})();";
    /// let (id, data) = pattern.parse(script).expect("match");
    /// assert_eq!(id, "dimg_1");
    /// assert_eq!(data, r"data:image/jpeg;base64,/9j\x2F");
    /// ```
    #[must_use]
    pub fn parse<'t>(&self, script: &'t str) -> Option<(&'t str, &'t str)> {
        self.regex.captures_iter(script).find_map(|head| {
            let data_var = head.name("data_var")?.as_str();
            let data = head.name("data")?.as_str();
            let rest = head.name("rest")?.as_str();

            SCRIPT_IMAGE_BINDING.captures_iter(rest).find_map(|binding| {
                let list_var = binding.name("list_var")?.as_str();
                let args_match = binding.name("arg_list")?.as_str() == list_var
                    && binding.name("arg_data")?.as_str() == data_var;

                if args_match {
                    Some((binding.name("id")?.as_str(), data))
                } else {
                    None
                }
            })
        })
    }
}

impl Default for ScriptImagePattern {
    fn default() -> Self {
        Self {
            regex: Cow::Borrowed(&*SCRIPT_IMAGE_DATA),
        }
    }
}

/// Mapping from image element id to its script-injected payload.
///
/// Payloads are stored exactly as written in the script, escapes included.
/// When two scripts name the same id the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePayloadIndex {
    payloads: HashMap<String, String>,
}

impl ImagePayloadIndex {
    /// Scan every `<script>` in the document.
    #[must_use]
    pub fn build(doc: &Document, pattern: &ScriptImagePattern) -> Self {
        Self::from_scripts(
            dom::select_all(doc, SCRIPT_SELECTOR)
                .iter()
                .map(dom::text_content),
            pattern,
        )
    }

    /// Build from script bodies, in order.
    pub fn from_scripts<I, S>(scripts: I, pattern: &ScriptImagePattern) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();

        for (position, script) in scripts.into_iter().enumerate() {
            let script = script.as_ref();
            match pattern.parse(script) {
                Some((id, data)) => index.insert(id, data),
                None => trace!(position, "script does not inject an image"),
            }
        }

        debug!(payloads = index.len(), "built image payload index");
        index
    }

    /// Record a payload, replacing any earlier one for the same id.
    pub fn insert(&mut self, id: &str, data: &str) {
        if self
            .payloads
            .insert(id.to_string(), data.to_string())
            .is_some()
        {
            debug!(image_id = id, "image payload redefined; keeping the later one");
        }
    }

    /// Payload for an image id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.payloads.get(id).map(String::as_str)
    }

    /// Number of indexed ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// True when no script injected an image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn injector(var: &str, data: &str, list: &str, id: &str) -> String {
        format!("(function(){{var {var}='{data}';var {list}=['{id}'];_setImagesSrc({list},{var});}})();")
    }

    #[test]
    fn parse_extracts_id_and_raw_data() {
        let pattern = ScriptImagePattern::default();
        let script = injector("s", r"data:image/jpeg;base64,/9j\x3d", "ii", "dimg_5");
        assert_eq!(
            pattern.parse(&script),
            Some(("dimg_5", r"data:image/jpeg;base64,/9j\x3d"))
        );
    }

    #[test]
    fn parse_rejects_swapped_call_arguments() {
        let pattern = ScriptImagePattern::default();
        let script =
            "(function(){var s='data:image/jpeg;base64,AAA';var ii=['dimg_5'];_setImagesSrc(s,ii);})();";
        assert_eq!(pattern.parse(script), None);
    }

    #[test]
    fn parse_skips_unrelated_list_and_call() {
        let pattern = ScriptImagePattern::default();
        let script = "(function(){var s='data:image/jpeg;base64,AAAA';var t=['z'];log(t,q);var ii=['dimg_a'];_setImagesSrc(ii,s);})();";
        assert_eq!(
            pattern.parse(script),
            Some(("dimg_a", "data:image/jpeg;base64,AAAA"))
        );
    }

    #[test]
    fn parse_rejects_when_no_call_names_the_data() {
        let pattern = ScriptImagePattern::default();
        let script = "(function(){var s='data:image/jpeg;base64,AAAA';var t=['z'];log(t,q);var ii=['dimg_a'];other(ii,t);})();";
        assert_eq!(pattern.parse(script), None);
    }

    #[test]
    fn parse_rejects_unrelated_scripts() {
        let pattern = ScriptImagePattern::default();
        assert_eq!(pattern.parse("window.google={kEI:'abc'};"), None);
        assert_eq!(pattern.parse(""), None);
        assert_eq!(
            pattern.parse("(function(){var s='https://example.com/a.jpg';var ii=['x'];f(ii,s);})();"),
            None
        );
    }

    #[test]
    fn custom_prefix_pattern() {
        let options = Options {
            image_data_prefix: "data:image/webp;base64".to_string(),
            ..Options::default()
        };
        let pattern = ScriptImagePattern::from_options(&options).expect("pattern");
        let script = injector("a", "data:image/webp;base64,UklG", "b", "dimg_9");

        assert_eq!(pattern.parse(&script), Some(("dimg_9", "data:image/webp;base64,UklG")));
        assert_eq!(ScriptImagePattern::default().parse(&script), None);
    }

    #[test]
    fn later_duplicate_wins() {
        let scripts = [
            injector("s", "data:image/jpeg;base64,FIRST", "ii", "dimg_1"),
            injector("s", "data:image/jpeg;base64,SECOND", "ii", "dimg_1"),
        ];
        let index = ImagePayloadIndex::from_scripts(&scripts, &ScriptImagePattern::default());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("dimg_1"), Some("data:image/jpeg;base64,SECOND"));
    }

    #[test]
    fn index_ignores_interleaved_noise() {
        let pattern = ScriptImagePattern::default();
        let a = injector("s", "data:image/jpeg;base64,AAAA", "ii", "dimg_a");
        let b = injector("s", "data:image/jpeg;base64,BBBB", "ii", "dimg_b");

        let clean = ImagePayloadIndex::from_scripts([a.as_str(), b.as_str()], &pattern);
        let noisy = ImagePayloadIndex::from_scripts(
            [
                "google.kEI='x';",
                a.as_str(),
                "(function(){var x=1;})();",
                "",
                b.as_str(),
                "var ii=['dimg_a'];",
            ],
            &pattern,
        );

        assert_eq!(clean, noisy);
    }

    #[test]
    fn build_reads_script_elements() {
        let html = format!(
            "<html><head><script>{}</script></head><body><script>{}</script></body></html>",
            injector("s", "data:image/jpeg;base64,HEAD", "ii", "dimg_h"),
            injector("s", "data:image/jpeg;base64,BODY", "ii", "dimg_b"),
        );
        let doc = dom::parse(&html);
        let index = ImagePayloadIndex::build(&doc, &ScriptImagePattern::default());

        assert_eq!(index.get("dimg_h"), Some("data:image/jpeg;base64,HEAD"));
        assert_eq!(index.get("dimg_b"), Some("data:image/jpeg;base64,BODY"));
        assert_eq!(index.get("dimg_missing"), None);
    }
}
