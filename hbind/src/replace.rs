//! Rewriting a single matched segment.
//!
//! A matched segment is rewritten in one of two modes, picked by the
//! selector:
//!
//! - **Attribute mode** (`form:action`): the attribute value inside the
//!   segment's first tag is replaced, or the attribute is added right after
//!   the tag name when the tag does not carry it yet.
//! - **Content mode** (`p.error`): everything between the opening and the
//!   closing tag is replaced.
//!
//! Values are HTML-escaped unless the selector is in embed mode (`p.error!`).
//! Quotes inside existing attribute values are not unescaped; a value runs
//! up to the next literal quote character.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{HbindError, Result};
use crate::selector::Selector;

lazy_static! {
    static ref ELEMENT_SHAPE: Regex = Regex::new(r"(?s)^(<[^>]+>)(.*)(</[^>]+>)$").unwrap();
}

/// Escapes a value for insertion into markup.
///
/// The result is safe inside text content and inside both single- and
/// double-quoted attribute values.
///
/// ```
/// assert_eq!(hbind::escape(r#"<b a="1">"#), "&lt;b a=&quot;1&quot;&gt;");
/// ```
pub fn escape(value: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(value)
}

/// Rewrites one matched segment with one value.
///
/// `None` is the absent value: in content mode the whole segment is
/// replaced by nothing, in attribute mode the segment is returned unchanged.
///
/// ## Errors
///
/// Returns [`HbindError::ReplaceShape`] when content mode is asked to
/// rewrite a segment that is not an `<open>...</close>` pair, such as a
/// self-closing tag.
///
/// ## Examples
///
/// ```
/// use hbind::{Selector, replace};
///
/// let selector = Selector::parse("form:action");
/// let out = replace(r#"<form method="post"></form>"#, &selector, Some("/login")).unwrap();
/// assert_eq!(out, r#"<form action="/login" method="post"></form>"#);
///
/// let selector = Selector::parse("p");
/// assert!(replace("<p/>", &selector, Some("text")).is_err());
/// ```
pub fn replace(segment: &str, selector: &Selector, value: Option<&str>) -> Result<String> {
    let Some(value) = value else {
        return Ok(match selector.attribute() {
            Some(_) => segment.to_string(),
            None => String::new(),
        });
    };

    let value = if selector.is_embed() {
        Cow::Borrowed(value)
    } else {
        escape(value)
    };

    if let Some(attribute) = selector.attribute() {
        return Ok(replace_attribute(segment, attribute, &value));
    }

    let Some(captures) = ELEMENT_SHAPE.captures(segment) else {
        debug!(%selector, segment, "matched segment has no closing tag");
        return Err(HbindError::ReplaceShape {
            selector: selector.to_string(),
            segment: segment.to_string(),
        });
    };

    let open = &captures[1];
    let close = &captures[3];
    let mut rewritten = String::with_capacity(open.len() + value.len() + close.len());
    rewritten.push_str(open);
    rewritten.push_str(&value);
    rewritten.push_str(close);
    Ok(rewritten)
}

/// Sets `attribute` to the already-escaped `value` in the first tag of
/// `segment`, preferring an existing double-quoted value, then a
/// single-quoted one, and otherwise inserting a new double-quoted attribute
/// directly after the tag name.
fn replace_attribute(segment: &str, attribute: &str, value: &str) -> String {
    let existing = attribute_value_range(segment, attribute, '"')
        .or_else(|| attribute_value_range(segment, attribute, '\''));

    if let Some((start, end)) = existing {
        return [&segment[..start], value, &segment[end..]].concat();
    }

    let insert_at = tag_name_end(segment);
    format!(
        r#"{} {attribute}="{value}"{}"#,
        &segment[..insert_at],
        &segment[insert_at..]
    )
}

/// Locates the byte range of a quoted attribute value.
///
/// Found by plain substring search for `attribute=` followed by `quote`, so
/// the name is taken literally and also hits longer names ending in it
/// (`value` finds `data-value`). The match must sit inside the first tag,
/// after `<` and at least one more character. When the tag carries it
/// several times the last occurrence wins. The value itself runs to the
/// next `quote`.
fn attribute_value_range(segment: &str, attribute: &str, quote: char) -> Option<(usize, usize)> {
    let head_end = segment.find('>').unwrap_or(segment.len());
    let head = segment.get(..head_end)?;
    let needle = format!("{attribute}={quote}");

    let found = head.rfind(&needle)?;
    if found < 2 || !head.starts_with('<') {
        return None;
    }

    let start = found + needle.len();
    let len = segment[start..].find(quote)?;
    Some((start, start + len))
}

/// Byte offset just past `<tagname` at the start of the segment.
fn tag_name_end(segment: &str) -> usize {
    let Some(rest) = segment.strip_prefix('<') else {
        return 0;
    };
    1 + rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len())
}
