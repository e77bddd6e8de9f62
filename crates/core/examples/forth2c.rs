use std::{fs, path::PathBuf};

use clap::Parser;
use forth_minify::{CArray, MinifyConfig, ModuleSource};

#[derive(Parser, Debug)]
#[command(name = "forth2c")]
#[command(about = "Minify a Forth module and emit it as a C byte array", long_about = None)]
struct Args {
    /// Path to the Forth source (or pre-compiled .zfa image) to embed
    input: PathBuf,

    /// Output path for the generated C fragment (defaults to stdout)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Override the array symbol instead of deriving it from the input file name
    #[arg(long)]
    name: Option<String>,

    /// Treat the input as a pre-compiled image regardless of its extension
    #[arg(long)]
    precompiled: bool,

    /// Append a NUL byte to the array
    #[arg(long)]
    null_terminate: bool,

    /// Let `(` inside a comment open a nested comment
    #[arg(long)]
    nested_comments: bool,

    /// Respect string literals while scanning comments
    #[arg(long)]
    quote_aware_comments: bool,

    /// Trim whitespace around each definition
    #[arg(long)]
    trim_definitions: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Args::parse();

    let cfg = MinifyConfig {
        nested_comments: args.nested_comments,
        quote_aware_comments: args.quote_aware_comments,
        trim_definitions: args.trim_definitions,
    };

    let source = if args.precompiled {
        ModuleSource::load_precompiled(&args.input)?
    } else {
        ModuleSource::load(&args.input)?
    };
    let bytes = source.into_bytes(&cfg)?;

    let mut array = match args.name {
        Some(name) => CArray::new(name, bytes),
        None => CArray::for_module(&args.input, bytes),
    };
    if args.null_terminate {
        array = array.null_terminated();
    }
    log::info!(
        "{}: {} bytes as {}",
        args.input.display(),
        array.bytes.len(),
        array.symbol
    );

    let out_code = array.render();
    match &args.out {
        None => {
            print!("{out_code}");
        }
        Some(out) => {
            fs::write(out, out_code)?;
        }
    }

    Ok(())
}
