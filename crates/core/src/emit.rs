//! C source generation.
//!
//! Two artifacts are produced:
//!
//! - A per-module array, rendered by [`CArray::render`]:
//!
//!   ```c
//!   const char core_gen_str[] = {
//!       58, 32, 65, 32, 59};
//!   // 5 bytes
//!   ```
//!
//! - A module table header, rendered by [`render_module_table`], that includes every generated
//!   array and lists `{ name, data, size }` records in the order the modules were given. Firmware
//!   loads modules in that order, so it is never sorted.

use std::{fmt::Write as _, path::Path};

/// Suffix appended to a module's stem to form its array symbol.
pub const ARRAY_SUFFIX: &str = "_gen_str";

/// A named byte array ready to be rendered as C.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CArray {
    /// C identifier of the array.
    pub symbol: String,
    /// Array contents.
    pub bytes: Vec<u8>,
}

impl CArray {
    pub fn new(symbol: impl Into<String>, bytes: Vec<u8>) -> Self {
        CArray {
            symbol: symbol.into(),
            bytes,
        }
    }

    /// Create an array named after the module at `path` (`words/core.fs` becomes `core_gen_str`).
    pub fn for_module(path: &Path, bytes: Vec<u8>) -> Self {
        CArray::new(format!("{}{ARRAY_SUFFIX}", module_stem(path)), bytes)
    }

    /// Append a NUL byte so the array can also be read as a C string.
    pub fn null_terminated(mut self) -> Self {
        self.bytes.push(0);
        self
    }

    /// Render the declaration followed by its `// <n> bytes` trailer.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len() * 5 + self.symbol.len() + 48);
        let _ = write!(out, "const char {}[] = {{\n    ", self.symbol);
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{b}");
        }
        out.push_str("};\n");
        let _ = writeln!(out, "// {} bytes", self.bytes.len());
        out
    }
}

/// Read the byte count back from a rendered array's `// <n> bytes` trailer.
pub fn parse_declared_size(rendered: &str) -> Option<usize> {
    rendered.lines().rev().find_map(|line| {
        line.trim()
            .strip_prefix("//")?
            .trim()
            .strip_suffix("bytes")?
            .trim()
            .parse()
            .ok()
    })
}

/// One record of the module table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Name the firmware looks the module up by.
    pub name: String,
    /// Header to `#include`, as written in the generated file.
    pub header: String,
    /// C identifier of the module's array.
    pub symbol: String,
    /// Byte length, if known. Otherwise the table uses `sizeof(symbol)`.
    pub size: Option<usize>,
}

impl ModuleEntry {
    /// Describe the generated header at `path` (`a_gen.h` gives name `a_gen`, symbol `a_gen_str`).
    pub fn from_header(path: &Path) -> Self {
        let name = module_stem(path);
        ModuleEntry {
            symbol: format!("{name}_str"),
            header: path.display().to_string(),
            name,
            size: None,
        }
    }

    /// Set the known byte length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

/// Render the module table header for `modules`, keeping their order.
pub fn render_module_table(modules: &[ModuleEntry]) -> String {
    let mut out = String::new();

    out.push_str("#pragma once\n\n");
    out.push_str("#include <stddef.h>\n");
    for module in modules {
        let _ = writeln!(out, "#include \"{}\"", module.header);
    }

    out.push_str(
        "\ntypedef struct {\n    const char * const name;\n    const char * const data;\n    const size_t size;\n} module_t;\n",
    );

    let _ = write!(out, "\n#define MODULES_COUNT {}\n", modules.len());

    out.push_str("\nstatic const module_t modules[] = {\n");
    for module in modules {
        let size = match module.size {
            Some(n) => n.to_string(),
            None => format!("sizeof({})", module.symbol),
        };
        let _ = writeln!(
            out,
            "    {{\"{}\", {}, {}}},",
            module.name, module.symbol, size
        );
    }
    out.push_str("};\n");

    out
}

/// The file name of `path` up to its first `.`, made into a C identifier.
///
/// Characters that cannot appear in an identifier become `_`, and a leading digit gets a `_`
/// prefix.
pub fn module_stem(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
