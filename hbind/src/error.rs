//! Error types for binding operations.

use thiserror::Error;

/// Errors that can occur while binding values into a template.
///
/// Selector parsing is total and unmatched selectors are not errors, so the
/// engine itself only ever fails with [`HbindError::ReplaceShape`].
#[derive(Error, Debug)]
pub enum HbindError {
    /// Content replacement was asked for a matched segment that is not an
    /// `<open>...</close>` pair (for example a self-closing `<p/>`).
    #[error("Cannot replace content of `{segment}` for `{selector}`: expected <open>...</close>")]
    ReplaceShape {
        /// The selector, re-rendered in its canonical form.
        selector: String,
        /// The matched segment that could not be decomposed.
        segment: String,
    },

    /// A bindings document could not be read.
    #[error("Invalid bindings document: {0}")]
    InvalidBindings(#[from] serde_json::Error),
}

/// Result type for binding operations.
pub type Result<T> = std::result::Result<T, HbindError>;
