use std::{fs, path::PathBuf};

use clap::Parser;
use forth_minify::{ModuleEntry, emit::parse_declared_size, render_module_table};

#[derive(Parser, Debug)]
#[command(name = "gen-modules")]
#[command(about = "Generate the module table header for a list of generated arrays", long_about = None)]
struct Args {
    /// Generated array headers, in load order
    #[arg(required = true)]
    modules: Vec<PathBuf>,

    /// Output path for the header (defaults to stdout)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Take each module's size from the `// <n> bytes` trailer of its header instead of `sizeof`
    #[arg(long)]
    read_sizes: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Args::parse();

    let mut entries = Vec::with_capacity(args.modules.len());
    for path in &args.modules {
        let mut entry = ModuleEntry::from_header(path);
        if args.read_sizes {
            let text = fs::read_to_string(path)?;
            match parse_declared_size(&text) {
                Some(size) => entry = entry.with_size(size),
                None => log::warn!(
                    "{}: no byte count trailer, falling back to sizeof",
                    path.display()
                ),
            }
        }
        entries.push(entry);
    }

    let header = render_module_table(&entries);
    match &args.out {
        None => {
            print!("{header}");
        }
        Some(out) => {
            fs::write(out, header)?;
        }
    }

    Ok(())
}
