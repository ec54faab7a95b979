//! Flat tokenization of markup into tags and text runs.
//!
//! The tokenizer never builds a tree: it splits the input on every `<...>`
//! run and classifies each piece by its delimiters. Concatenating the
//! `text` of all tokens reproduces the input exactly.
//!
//! Comments and CDATA sections get no special treatment, so a `>` inside
//! them ends the "tag" early.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// The kind of a markup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An opening tag such as `<p class="x">`.
    Open,
    /// A closing tag such as `</p>`.
    Close,
    /// A self-closing tag such as `<input />`.
    SelfClose,
    /// Anything that is not a tag.
    Text,
}

impl TokenKind {
    /// Classifies a raw token by its delimiters.
    ///
    /// `</` wins over `/>`, and a piece that merely starts with `<` counts
    /// as an opening tag.
    pub fn classify(text: &str) -> Self {
        if text.starts_with("</") {
            TokenKind::Close
        } else if text.ends_with("/>") {
            TokenKind::SelfClose
        } else if text.starts_with('<') {
            TokenKind::Open
        } else {
            TokenKind::Text
        }
    }
}

/// A token borrowed from the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: &'a str,
    /// Byte offset of `text` within the input.
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// The tag name of a tag token, `None` for text.
    ///
    /// ```
    /// use hbind::token::{Token, TokenKind};
    ///
    /// let token = Token { kind: TokenKind::Close, text: "</my-card>", offset: 0 };
    /// assert_eq!(token.tag_name(), Some("my-card"));
    /// ```
    pub fn tag_name(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Text => None,
            _ => tag_name(self.text),
        }
    }
}

/// Extracts the tag name following a leading `<` or `</`.
///
/// The name runs up to the first whitespace, `/` or `>`.
pub(crate) fn tag_name(tag: &str) -> Option<&str> {
    let rest = tag.strip_prefix("</").or_else(|| tag.strip_prefix('<'))?;
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Splits markup into an ordered, lossless sequence of tokens.
///
/// Empty text runs between adjacent tags are not emitted.
///
/// ## Examples
///
/// ```
/// use hbind::token::{tokenize, TokenKind};
///
/// let tokens = tokenize("<p>Hi<br/></p>");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Open, TokenKind::Text, TokenKind::SelfClose, TokenKind::Close]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    let mut push = |start: usize, end: usize| {
        if start < end {
            let text = &input[start..end];
            tokens.push(Token {
                kind: TokenKind::classify(text),
                text,
                offset: start,
            });
        }
    };

    for tag in TAG.find_iter(input) {
        push(cursor, tag.start());
        push(tag.start(), tag.end());
        cursor = tag.end();
    }
    push(cursor, input.len());

    tokens
}
