use std::path::PathBuf;

use clap::Parser;
use forth_minify::{MinifyConfig, minify, source::read_text};

#[derive(Parser, Debug)]
#[command(name = "minify")]
#[command(about = "Print the minified form of a Forth source file", long_about = None)]
struct Args {
    /// Path to the Forth source file
    input: PathBuf,

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

    let source = read_text(&args.input)?;

    println!("{}", minify(&source, &cfg)?);
    Ok(())
}
