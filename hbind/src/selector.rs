//! Selector parsing and tag matching.
//!
//! A selector is a compact string naming the element(s) to bind to:
//!
//! | Selector        | Targets                                              |
//! |-----------------|------------------------------------------------------|
//! | `form`          | content of `<form ...>` elements                     |
//! | `p.error`       | content of `<p>` elements carrying the `error` class |
//! | `#name`         | content of elements with `id="name"` or `name="name"` |
//! | `form:action`   | the `action` attribute of `<form>` elements          |
//! | `:value`        | the `value` attribute of any element                 |
//! | `p.error!`      | content of `p.error`, inserted as raw markup         |
//!
//! Matching is done on a single raw tag token. The tag-name test is a plain
//! prefix test on `<name`, so the selector `p` also matches `<param>`.
//!
//! ## Examples
//!
//! ```
//! use hbind::Selector;
//!
//! let selector = Selector::parse("#name:value");
//! assert_eq!(selector.id(), Some("name"));
//! assert_eq!(selector.attribute(), Some("value"));
//!
//! assert!(selector.matches(r#"<input type="text" name="name" />"#));
//! assert!(!selector.matches(r#"<input type="text" name="email" />"#));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLASS_DOUBLE_QUOTED: Regex = Regex::new(r#"class="([^"]*)""#).unwrap();
    static ref CLASS_SINGLE_QUOTED: Regex = Regex::new(r"class='([^']*)'").unwrap();
}

/// A parsed selector.
///
/// Every identity field left as `None` is a wildcard: [`Selector::matches`]
/// only checks the constraints that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    name: Option<String>,
    id: Option<String>,
    class: Option<String>,
    attribute: Option<String>,
    embed: bool,
}

impl Selector {
    /// Parses a selector string.
    ///
    /// The grammar is total; any string yields a selector. Modifiers are
    /// stripped right to left: a trailing `!` sets embed mode, then the text
    /// after the last `:` names the target attribute. What remains is either
    /// `name.class` (split on the first `.`), `#id`, or a bare tag name.
    /// Empty parts are treated as absent.
    pub fn parse(raw: &str) -> Self {
        let mut selector = Selector::default();
        let mut rest = raw;

        if let Some(stripped) = rest.strip_suffix('!') {
            selector.embed = true;
            rest = stripped;
        }

        if let Some(colon) = rest.rfind(':') {
            selector.attribute = non_empty(&rest[colon + 1..]);
            rest = &rest[..colon];
        }

        if let Some((name, class)) = rest.split_once('.') {
            selector.name = non_empty(name);
            selector.class = non_empty(class);
        } else if let Some(id) = rest.strip_prefix('#') {
            selector.id = non_empty(id);
        } else {
            selector.name = non_empty(rest);
        }

        selector
    }

    /// The required tag name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The required `id` (or `name` attribute) value, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The required class, if any.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// The attribute to bind to instead of element content, if any.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Whether bound values are inserted verbatim rather than escaped.
    pub fn is_embed(&self) -> bool {
        self.embed
    }

    /// Tests a single opening or self-closing tag token against this selector.
    ///
    /// ## Examples
    ///
    /// ```
    /// use hbind::Selector;
    ///
    /// let selector = Selector::parse("p.error");
    /// assert!(selector.matches(r#"<p class="note error">"#));
    /// assert!(!selector.matches(r#"<p class="errors">"#));
    /// assert!(!selector.matches("<p>"));
    /// ```
    pub fn matches(&self, tag: &str) -> bool {
        if let Some(name) = &self.name {
            let prefixed = tag
                .strip_prefix('<')
                .is_some_and(|rest| rest.starts_with(name.as_str()));
            if !prefixed {
                return false;
            }
        }

        if let Some(id) = &self.id {
            let addressed = ["id", "name"].iter().any(|attr| {
                tag.contains(&format!(r#"{attr}="{id}""#))
                || tag.contains(&format!("{attr}='{id}'"))
            });
            if !addressed {
                return false;
            }
        }

        if let Some(class) = &self.class {
            let classes = CLASS_DOUBLE_QUOTED
                .captures(tag)
                .or_else(|| CLASS_SINGLE_QUOTED.captures(tag))
                .and_then(|captures| captures.get(1));

            match classes {
                Some(list) => {
                    if !list.as_str().split(' ').any(|candidate| candidate == class) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

fn non_empty(part: &str) -> Option<String> {
    (!part.is_empty()).then(|| part.to_string())
}

impl fmt::Display for Selector {
    /// Renders the canonical selector string, which parses back to `self`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        } else {
            if let Some(name) = &self.name {
                f.write_str(name)?;
            }
            if let Some(class) = &self.class {
                write!(f, ".{class}")?;
            }
        }
        if let Some(attribute) = &self.attribute {
            write!(f, ":{attribute}")?;
        }
        if self.embed {
            f.write_str("!")?;
        }
        Ok(())
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::parse(s))
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::parse(s)
    }
}
