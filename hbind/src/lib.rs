//! Hbind - `sprintf` for HTML.
//!
//! Binds values into HTML fragments by selector, without building a DOM.
//! A template is split into tags and text with a regular expression, the
//! elements targeted by a selector are located with a nesting-aware scan,
//! and their content or one of their attributes is rewritten. Everything
//! else in the template is copied through byte for byte.
//!
//! ## Modules
//!
//! - [`selector`] - Selector parsing (`p.error`, `#name:value`, `div!`) and tag matching
//! - [`token`] - Lossless tokenization of markup into tags and text runs
//! - [`slice`] - Partitioning a document into matched and unmatched segments
//! - [`replace`] - Rewriting one matched segment with one value
//! - [`bind`] - Single-selector and sequential multi-selector binding
//! - [`value`] - Bound values and ordered binding lists
//!
//! ## Examples
//!
//! ```
//! use hbind::{Value, hbind};
//!
//! let template = r#"
//! <form method="post">
//! <p class="error"></p>
//! <input type="text" name="email" />
//! </form>"#;
//!
//! let html = hbind(template, [
//!     ("form:action", Value::from("/login")),
//!     ("p.error", Value::from(["Unknown user", "Try again"])),
//!     ("#email:value", Value::from("me@example.org")),
//! ]).unwrap();
//!
//! assert!(html.contains(r#"<form action="/login" method="post">"#));
//! assert!(html.contains(r#"<p class="error">Unknown user</p><p class="error">Try again</p>"#));
//! assert!(html.contains(r#"<input value="me@example.org" type="text" name="email" />"#));
//! ```
//!
//! ## Limitations
//!
//! - The tag-name test is a prefix test, so `p` also matches `<param>`.
//! - Comments and CDATA sections are tokenized like any other markup.
//! - Attribute values are matched up to the next literal quote.

pub mod bind;
pub mod error;
pub mod replace;
pub mod selector;
pub mod slice;
pub mod token;
pub mod value;

pub use bind::{bind, bind_all, hbind};
pub use error::{HbindError, Result};
pub use replace::{escape, replace};
pub use selector::Selector;
pub use slice::{Segment, slice};
pub use token::{Token, TokenKind, tokenize};
pub use value::{Bindings, Value};
