//! Definition normalization.
//!
//! Reduced text is split on the `:` separator. Whatever precedes the first `:` is discarded, and
//! the remaining definitions are joined back so that the text starts with `:` and every later
//! definition is introduced by ` :`. The space keeps a definition's closing `;` apart from the
//! next `:`, since the reducer deletes the line break that used to separate them.

use crate::minify::MinifyConfig;

const SEPARATOR: char = ':';

/// Rewrite reduced text into one `:`-introduced segment per definition.
///
/// Without any separator in `minified`, the result is a lone `:`.
pub fn normalize(minified: &str, config: &MinifyConfig) -> String {
    let definitions = minified.split(SEPARATOR).skip(1);

    let mut out = String::with_capacity(minified.len() + 1);
    if config.trim_definitions {
        for def in definitions.map(str::trim).filter(|def| !def.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push(SEPARATOR);
            out.push(' ');
            out.push_str(def);
        }
    } else {
        for (i, def) in definitions.enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(SEPARATOR);
            out.push_str(def);
        }
    }

    if out.is_empty() {
        out.push(SEPARATOR);
    }
    out
}
