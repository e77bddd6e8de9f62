//! Comment and whitespace reduction.
//!
//! [`reduce`] walks the source once, left to right, and decides for every character whether it
//! is copied, rewritten, or dropped:
//!
//! 1. `(` starts a comment. Everything up to and including the closing `)` is skipped. By
//!    default the first `)` closes the comment, even one that sits inside a string literal.
//! 2. Once output exists, a blank (`\n`, `\r`, `\t` or space) following a space is dropped
//!    unless the scanner is inside a string literal. Otherwise a tab becomes a space, the very
//!    last source character is dropped, and anything else is copied.
//! 3. Before any output exists, blanks are dropped and everything else is copied.
//! 4. Every `"` that was not skipped as part of a comment toggles the string-literal flag.
//!
//! Finally, all `\n` are removed from the output, including the ones kept inside string
//! literals. Line breaks are deleted rather than turned into spaces, so words separated only by
//! a line break run together.

use crate::{MinifyError, minify::MinifyConfig};

const COMMENT_OPEN: char = '(';
const COMMENT_CLOSE: char = ')';
const STRING_DELIM: char = '"';

/// Scanner state carried across a single [`reduce`] pass.
#[derive(Debug, Default)]
pub struct ScanState {
    /// True between an odd `"` and the next one.
    pub inside_string: bool,
    /// Text produced so far.
    pub output: String,
    /// Index of the current character in the source.
    pub cursor: usize,
}

/// Returns true for the characters the reducer treats as whitespace.
fn is_blank(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | ' ')
}

/// Strip comments and redundant whitespace from `source`.
///
/// Fails with [`MinifyError::MalformedComment`] if a comment is never closed.
pub fn reduce(source: &str, config: &MinifyConfig) -> Result<String, MinifyError> {
    let chars: Vec<char> = source.chars().collect();
    let mut state = ScanState::default();

    while state.cursor < chars.len() {
        step(&chars, &mut state, config)?;
        state.cursor += 1;
    }

    let mut out = state.output;
    out.retain(|c| c != '\n');
    Ok(out)
}

/// Process the character under `state.cursor`.
///
/// After a comment, the cursor is left on the closing `)` so the caller's increment moves past it.
fn step(chars: &[char], state: &mut ScanState, config: &MinifyConfig) -> Result<(), MinifyError> {
    let c = chars[state.cursor];
    let is_last = state.cursor + 1 == chars.len();

    if c == COMMENT_OPEN && !(config.quote_aware_comments && state.inside_string) {
        let close = skip_comment(chars, state.cursor, config)?;
        log::trace!("skipped comment at {}..={}", state.cursor, close);
        state.cursor = close;
        return Ok(());
    }

    let last = state.output.chars().next_back();
    match last {
        Some(last) => {
            if last == ' ' && is_blank(c) && !state.inside_string {
                // Collapsed into the previous space.
            } else if c == '\t' {
                state.output.push(' ');
            } else if is_last {
                // Trailing sentinel.
            } else {
                state.output.push(c);
            }
        }
        None => {
            if !is_blank(c) {
                state.output.push(c);
            }
        }
    }

    if c == STRING_DELIM {
        state.inside_string = !state.inside_string;
    }

    Ok(())
}

/// Find the `)` closing the comment opened at `open`.
fn skip_comment(chars: &[char], open: usize, config: &MinifyConfig) -> Result<usize, MinifyError> {
    let mut depth = 0usize;
    let mut quoted = false;

    for (i, &c) in chars.iter().enumerate().skip(open) {
        if config.quote_aware_comments && c == STRING_DELIM {
            quoted = !quoted;
            continue;
        }
        if quoted {
            continue;
        }

        match c {
            COMMENT_OPEN if i == open || config.nested_comments => depth += 1,
            COMMENT_CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }

    Err(MinifyError::MalformedComment { offset: open })
}
