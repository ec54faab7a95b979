//! Partitioning a document into matched and unmatched segments.
//!
//! The slicer walks the token stream with a two-state machine. Outside a
//! match it accumulates literal text; on an opening tag accepted by the
//! selector it switches to collecting the matched element, counting nested
//! elements of the same tag name so that `<div>` is closed by its own
//! `</div>` and not by the first inner one.

use tracing::trace;

use crate::selector::Selector;
use crate::token::{TokenKind, tokenize};

/// A contiguous span of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Whether this span is an element targeted by the selector.
    pub matched: bool,
    /// The exact source text of the span.
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    fn unmatched(text: &'a str) -> Self {
        Segment {
            matched: false,
            text,
        }
    }

    fn matched(text: &'a str) -> Self {
        Segment {
            matched: true,
            text,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    Outside,
    Inside {
        search: Option<&'a str>,
        depth: usize,
    },
}

/// Splits `document` into alternating unmatched and matched segments.
///
/// Concatenating the `text` of the returned segments always reproduces
/// `document`. An unmatched segment is emitted before every match and once
/// at the end, even when empty, so a document where nothing matches yields
/// exactly one segment.
///
/// A match that is still open when the input ends (its closing tag never
/// arrived) is returned as unmatched text.
///
/// ## Examples
///
/// ```
/// use hbind::{Selector, slice};
///
/// let segments = slice(r#"<div><div class="foo"></div></div>"#, &Selector::parse("div.foo"));
/// let texts: Vec<&str> = segments.iter().map(|s| s.text).collect();
/// assert_eq!(texts, vec!["<div>", r#"<div class="foo"></div>"#, "</div>"]);
/// assert!(segments[1].matched);
/// ```
pub fn slice<'a>(document: &'a str, selector: &Selector) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut state = State::Outside;
    let mut start = 0;

    for token in tokenize(document) {
        match state {
            State::Outside => match token.kind {
                TokenKind::Open if selector.matches(token.text) => {
                    segments.push(Segment::unmatched(&document[start..token.offset]));
                    start = token.offset;
                    state = State::Inside {
                        search: token.tag_name(),
                        depth: 0,
                    };
                }
                TokenKind::SelfClose if selector.matches(token.text) => {
                    segments.push(Segment::unmatched(&document[start..token.offset]));
                    segments.push(Segment::matched(token.text));
                    start = token.end();
                }
                _ => {}
            },
            State::Inside { search, depth } => {
                let same_name = search.is_some() && token.tag_name() == search;
                match token.kind {
                    TokenKind::Close if same_name && depth == 0 => {
                        segments.push(Segment::matched(&document[start..token.end()]));
                        start = token.end();
                        state = State::Outside;
                    }
                    TokenKind::Close if same_name => {
                        state = State::Inside {
                            search,
                            depth: depth - 1,
                        };
                    }
                    TokenKind::Open if same_name => {
                        state = State::Inside {
                            search,
                            depth: depth + 1,
                        };
                    }
                    _ => {}
                }
            }
        }
    }

    if let State::Inside { search, depth } = state {
        trace!(?search, depth, "input ended inside an open match");
    }
    segments.push(Segment::unmatched(&document[start..]));

    for segment in &segments {
        trace!(matched = segment.matched, len = segment.text.len(), "segment");
    }

    segments
}
