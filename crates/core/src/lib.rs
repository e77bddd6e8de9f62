//! Forth source minifier and C array generator for firmware images.
//!
//! This crate shrinks zForth-dialect source to a compact byte form and serializes it as a
//! statically-initialized C array, so scripts can be bundled into a firmware image and looked up
//! at runtime through a generated module table.
//!
//! Entry points:
//!
//! - [`minify`](mod@minify) runs the whole text pipeline and holds [`MinifyConfig`].
//! - [`source`] loads an input file, passing pre-compiled `.zfa` images through untouched.
//! - [`emit`] renders C array declarations and the module table header.
//!
//! Internals:
//!
//! - [`reduce`] strips comments and collapses whitespace in a single forward pass.
//! - [`normalize`] rewrites the reduced text into one segment per word definition.

use std::path::PathBuf;

pub mod emit;
pub mod minify;
pub mod normalize;
pub mod reduce;
pub mod source;

pub use emit::{CArray, ModuleEntry, render_module_table};
pub use minify::{MinifyConfig, minify};
pub use source::ModuleSource;

/// Errors that can occur while loading or minifying a module.
#[derive(thiserror::Error, Debug)]
pub enum MinifyError {
    #[error("cannot open {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unterminated comment starting at offset {offset}")]
    MalformedComment { offset: usize },

    #[error("{} is not valid UTF-8 text: {source}", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
