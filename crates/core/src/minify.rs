//! Forth source minification.
//!
//! The pipeline has two stages:
//!
//! 1. [`reduce`](crate::reduce::reduce) scans the source once, dropping `( ... )` comments,
//!    collapsing whitespace runs, and removing line breaks. Whitespace inside `"` string literals
//!    is left alone.
//! 2. [`normalize`](crate::normalize::normalize) splits the reduced text on `:` and rejoins it
//!    so every word definition starts with exactly one separator.
//!
//! The default configuration reproduces the stripping rules existing firmware sources were
//! written against, including their quirks: comments do not nest, a `)` inside a string literal
//! still closes a comment, and definitions are not trimmed. Each quirk can be switched off
//! through [`MinifyConfig`].

use crate::{MinifyError, normalize::normalize, reduce::reduce};

/// Configuration options for minification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyConfig {
    /// If true, `(` inside a comment opens a nested comment that needs its own `)`.
    pub nested_comments: bool,

    /// If true, comment scanning respects string literals.
    ///
    /// A `(` inside a string literal is kept as text, and a `)` between a pair of `"` inside a
    /// comment does not end the comment.
    pub quote_aware_comments: bool,

    /// If true, definitions are trimmed and emitted as `: <definition>`, and empty definitions
    /// are dropped.
    pub trim_definitions: bool,
}

/// Minify Forth `source` into its final compact form.
///
/// An empty source is not an error: it produces a lone `:`.
pub fn minify(source: &str, config: &MinifyConfig) -> Result<String, MinifyError> {
    let reduced = reduce(source, config)?;
    let out = normalize(&reduced, config);
    log::debug!(
        "minified {} chars into {} (reduced: {})",
        source.chars().count(),
        out.chars().count(),
        reduced.chars().count()
    );
    Ok(out)
}
