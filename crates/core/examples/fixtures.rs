use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use forth_minify::{MinifyConfig, minify, source::read_text};

#[derive(Parser, Debug)]
#[command(name = "fixtures")]
#[command(about = "Create or validate fixture files", long_about = None)]
struct Args {
    /// Write fixtures instead of validating them
    #[arg(long, short)]
    write: bool,

    /// Path to the fixtures directory (defaults to "./fixtures")
    #[arg(long, default_value = "fixtures")]
    dir: PathBuf,
}

const SOURCE_EXTENSION: &str = ".fs";

/// Returns the expected-output path for a fixture input (`core.fs` gives `core.out.fs`).
fn expected_path(dir: &Path, filename: &str) -> Option<PathBuf> {
    let basename = filename.strip_suffix(SOURCE_EXTENSION)?;
    Some(dir.join(format!("{basename}.out{SOURCE_EXTENSION}")))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Args::parse();

    // Fixtures always use the default rules existing sources rely on.
    let cfg = MinifyConfig::default();

    let mut input_files = Vec::new();
    for entry in fs::read_dir(&args.dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("invalid filename")?;

        // Skip .out. files and anything that is not Forth source
        if filename.contains(".out.") || !filename.ends_with(SOURCE_EXTENSION) {
            continue;
        }
        input_files.push(path);
    }

    input_files.sort();

    let mut mismatches = Vec::new();
    println!(
        "{} fixtures...",
        if args.write { "Creating" } else { "Validating" }
    );

    for input_path in &input_files {
        let filename = input_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("invalid filename")?;
        let out_path = expected_path(&args.dir, filename).ok_or("unsupported fixture name")?;

        let source = read_text(input_path)?;
        let code = minify(&source, &cfg)?;

        if args.write {
            fs::write(&out_path, &code)?;
            println!("  Created {}", out_path.display());
            continue;
        }

        if out_path.exists() {
            let expected_code = fs::read(&out_path)?;
            if code.as_bytes() != expected_code {
                mismatches.push(format!("{filename}: code mismatch"));
            } else {
                println!("  ✓ {filename}");
            }
        } else {
            mismatches.push(format!(
                "{filename}: missing output file {}",
                out_path.display()
            ));
        }
    }

    if !mismatches.is_empty() {
        eprintln!("\nValidation failed:");
        for mismatch in &mismatches {
            eprintln!("  ✗ {mismatch}");
        }
        return Err(format!("{} validation error(s)", mismatches.len()).into());
    }

    println!("\nDone with {} fixtures.", input_files.len());
    Ok(())
}
