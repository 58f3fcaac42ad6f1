// src/utils/text.rs

//! Text cleanup for upstream news fields.
//!
//! Upstream titles and summaries arrive with HTML markup, entities and
//! leftovers of double-encoded JSON. [`TextCleaner`] strips them with a fixed
//! sequence of replacements followed by the configured extra rules. It is a
//! normalizer, not a parser: anything that survives the passes is kept.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::models::{CleaningConfig, Replacement};

/// Named entities decoded by the cleaner. `&amp;` goes last so that
/// `&amp;lt;` decodes one level only.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&hellip;", "..."),
    ("&mdash;", "-"),
    ("&ndash;", "-"),
    ("&amp;", "&"),
];

/// Literal escape sequences left behind by double-encoded JSON.
const ESCAPES: &[(&str, &str)] = &[("\\n", " "), ("\\r", " "), ("\\t", " "), ("\\\"", "\"")];

/// Compiled cleanup rules.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    tag: Regex,
    numeric_entity: Regex,
    remove_patterns: Vec<Regex>,
    replacements: Vec<Replacement>,
}

impl TextCleaner {
    /// Compile the built-in passes plus the configured extra rules.
    pub fn new(config: &CleaningConfig) -> Result<Self> {
        let remove_patterns = config
            .remove_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            tag: Regex::new(r"</?[A-Za-z!][^<>]*>")?,
            numeric_entity: Regex::new(r"&#(?:x([0-9a-fA-F]{1,6})|([0-9]{1,7}));")?,
            remove_patterns,
            replacements: config.replacements.clone(),
        })
    }

    /// Clean a single text field.
    pub fn clean(&self, text: &str) -> String {
        let mut result = text.to_string();

        for (from, to) in ESCAPES {
            result = result.replace(from, to);
        }

        result = self.tag.replace_all(&result, " ").into_owned();
        result = self.decode_entities(&result);
        // Entity-escaped markup only becomes a tag after decoding
        result = self.tag.replace_all(&result, " ").into_owned();
        result = strip_json_punctuation(&result);

        for pattern in &self.remove_patterns {
            result = pattern.replace_all(&result, "").into_owned();
        }
        for r in &self.replacements {
            result = result.replace(&r.from, &r.to);
        }

        normalize_whitespace(&result)
    }

    fn decode_entities(&self, text: &str) -> String {
        let decoded = self
            .numeric_entity
            .replace_all(text, |caps: &regex::Captures| {
                let code = match (caps.get(1), caps.get(2)) {
                    (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                    (_, Some(dec)) => dec.as_str().parse().ok(),
                    _ => None,
                };
                match code.and_then(char::from_u32) {
                    Some(c) if c.is_whitespace() => " ".to_string(),
                    Some(c) if c.is_control() => String::new(),
                    Some(c) => c.to_string(),
                    None => String::new(),
                }
            })
            .into_owned();

        NAMED_ENTITIES
            .iter()
            .fold(decoded, |acc, (entity, ch)| acc.replace(entity, ch))
    }
}

/// Drop backslashes and peel JSON leftovers off the ends of a field.
///
/// Braces, commas and colons are trimmed from the ends. Quotes and square
/// brackets are removed only when they wrap the whole field or have no
/// partner, so `"o5"` or `[Breaking]` inside a title survive.
fn strip_json_punctuation(text: &str) -> String {
    let text = text.replace('\\', "");
    let mut s = text.as_str();

    loop {
        let trimmed =
            s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '{' | '}' | ',' | ':'));
        let peeled = peel_pair(trimmed, '"', '"')
            .or_else(|| peel_pair(trimmed, '[', ']'))
            .unwrap_or(trimmed);
        if peeled.len() == s.len() {
            break;
        }
        s = peeled;
    }

    s.to_string()
}

/// Remove one wrapping or unpartnered `open`/`close` from the ends of `s`.
fn peel_pair(s: &str, open: char, close: char) -> Option<&str> {
    if let Some(inner) = s.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
        if wraps_whole(inner, open, close) {
            return Some(inner);
        }
    }

    let (leading_extra, trailing_extra) = if open == close {
        let odd = s.matches(open).count() % 2 == 1;
        (odd, odd)
    } else {
        let opens = s.matches(open).count();
        let closes = s.matches(close).count();
        (opens > closes, closes > opens)
    };

    if leading_extra {
        if let Some(rest) = s.strip_prefix(open) {
            return Some(rest);
        }
    }
    if trailing_extra {
        if let Some(rest) = s.strip_suffix(close) {
            return Some(rest);
        }
    }
    None
}

/// Whether a leading `open` and trailing `close` around `inner` pair with
/// each other.
fn wraps_whole(inner: &str, open: char, close: char) -> bool {
    if open == close {
        return !inner.contains(open);
    }
    let mut depth = 0i32;
    for c in inner.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth < 0 {
                return false;
            }
        }
    }
    depth == 0
}

/// Collapse whitespace runs into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length as a reader sees it (grapheme clusters).
pub fn display_len(s: &str) -> usize {
    s.graphemes(true).count()
}
