//! Module input loading.
//!
//! A module is either Forth source text, which goes through [`minify`], or a pre-compiled
//! dictionary image (`.zfa`), whose bytes are embedded unchanged.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    MinifyError,
    minify::{MinifyConfig, minify},
};

/// File extension of pre-compiled dictionary images.
pub const PRECOMPILED_EXTENSION: &str = "zfa";

/// The contents of one input module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// A pre-compiled image, embedded byte for byte.
    Precompiled(Vec<u8>),
    /// Forth source text with line endings normalized to `\n`.
    Text(String),
}

impl ModuleSource {
    /// Load `path`, choosing the kind of module from its extension.
    pub fn load(path: &Path) -> Result<Self, MinifyError> {
        if is_precompiled(path) {
            Self::load_precompiled(path)
        } else {
            Self::load_text(path)
        }
    }

    /// Load `path` as a pre-compiled image regardless of its extension.
    pub fn load_precompiled(path: &Path) -> Result<Self, MinifyError> {
        let bytes = read_all(path)?;
        log::debug!("{}: {} pre-compiled bytes", path.display(), bytes.len());
        Ok(ModuleSource::Precompiled(bytes))
    }

    /// Load `path` as Forth source text.
    pub fn load_text(path: &Path) -> Result<Self, MinifyError> {
        read_text(path).map(ModuleSource::Text)
    }

    /// Produce the bytes to embed: pre-compiled images as-is, text minified.
    pub fn into_bytes(self, config: &MinifyConfig) -> Result<Vec<u8>, MinifyError> {
        match self {
            ModuleSource::Precompiled(bytes) => Ok(bytes),
            ModuleSource::Text(text) => Ok(minify(&text, config)?.into_bytes()),
        }
    }
}

/// Read `path` as UTF-8 text with line endings normalized to `\n`.
pub fn read_text(path: &Path) -> Result<String, MinifyError> {
    let bytes = read_all(path)?;
    let text = String::from_utf8(bytes).map_err(|source| MinifyError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{}: {} bytes of source text", path.display(), text.len());
    Ok(normalize_line_endings(&text))
}

/// Returns true if `path` names a pre-compiled image.
pub fn is_precompiled(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PRECOMPILED_EXTENSION)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a whole file, reporting a failure to open it as [`MinifyError::FileNotFound`].
fn read_all(path: &Path) -> Result<Vec<u8>, MinifyError> {
    let mut file = File::open(path).map_err(|source| MinifyError::FileNotFound {
        path: PathBuf::from(path),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
