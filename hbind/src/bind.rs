//! Binding values into templates.
//!
//! [`bind`] applies one selector to a document: it slices the document,
//! copies unmatched segments through, and rewrites every matched segment
//! once per bound value. [`bind_all`] folds a whole [`Bindings`] list over
//! a template, each step working on the previous step's output.
//!
//! ## Examples
//!
//! ```
//! use hbind::hbind;
//!
//! let form = r#"<form method="post"><p class="error"></p></form>"#;
//! let html = hbind(form, [
//!     ("form:action", "/login"),
//!     ("p.error", "Wrong password"),
//! ]).unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<form action="/login" method="post"><p class="error">Wrong password</p></form>"#
//! );
//! ```

use std::borrow::Cow;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::replace::replace;
use crate::selector::Selector;
use crate::slice::slice;
use crate::value::{Bindings, Value};

/// Binds `value` to every element in `document` matched by `selector`.
///
/// A matched element is emitted once per item of `value`, so a sequence of
/// `K` strings renders `K` consecutive copies of it. Returns
/// `Cow::Borrowed(document)` when the selector matches nothing.
///
/// ## Errors
///
/// Fails with [`crate::HbindError::ReplaceShape`] when a content binding
/// hits a self-closing element.
///
/// ## Examples
///
/// ```
/// use hbind::{Selector, Value, bind};
///
/// let items = Value::from(["a", "b"]);
/// let html = bind("<ul><li></li></ul>", &Selector::parse("li"), &items).unwrap();
/// assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
/// ```
#[instrument(skip_all, fields(selector = %selector))]
pub fn bind<'a>(document: &'a str, selector: &Selector, value: &Value) -> Result<Cow<'a, str>> {
    let segments = slice(document, selector);
    let matched = segments.iter().filter(|s| s.matched).count();

    if matched == 0 {
        debug!(len = document.len(), "selector matched nothing");
        return Ok(Cow::Borrowed(document));
    }

    let items = value.items();
    debug!(matched, values = items.len(), "binding matched segments");

    let mut output = String::with_capacity(document.len());
    for segment in &segments {
        if !segment.matched {
            output.push_str(segment.text);
            continue;
        }
        for item in &items {
            output.push_str(&replace(segment.text, selector, *item)?);
        }
    }

    Ok(Cow::Owned(output))
}

/// Applies every binding in order, each to the output of the previous one.
///
/// Because the steps are sequential, a selector can match markup inserted
/// by an earlier embed binding. The first failing step aborts the whole
/// sequence.
pub fn bind_all<'a>(template: &'a str, bindings: &Bindings) -> Result<Cow<'a, str>> {
    let mut output = Cow::Borrowed(template);

    for (raw, value) in bindings.iter() {
        let selector = Selector::parse(raw);
        let next = match bind(&output, &selector, value)? {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        output = Cow::Owned(next);
    }

    Ok(output)
}

/// Binds a sequence of selector/value pairs to a template.
///
/// Convenience over [`bind_all`] that accepts any ordered pairs, such as an
/// array of tuples, and always returns an owned string. The result can be
/// passed as a value to another call to build nested fragments.
///
/// ```
/// use hbind::{Value, hbind};
///
/// let name = hbind(r#"<input name="name"/>"#, [(":value", "Troels")]).unwrap();
/// let form = hbind("<p class=\"field\"></p>", [("p.field!", Value::from(vec![name]))]).unwrap();
/// assert_eq!(form, r#"<p class="field"><input value="Troels" name="name"/></p>"#);
/// ```
pub fn hbind<I, K, V>(template: &str, bindings: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let bindings: Bindings = bindings.into_iter().collect();
    Ok(bind_all(template, &bindings)?.into_owned())
}
