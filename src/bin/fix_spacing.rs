//! Rewrites a manuscript in place so that every paragraph is separated by a
//! blank line.

use clap::Parser;
use manustyle::{
    error::{default_error_handler, Result},
    logger::init_logger,
    spacing::normalize_spacing,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Insert blank lines between manuscript paragraphs", long_about = None)]
struct Args {
    /// Markdown document to rewrite in place
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        default_error_handler(err);
    }
}

fn run(args: &Args) -> Result<()> {
    let text = std::fs::read_to_string(&args.document)?;
    let spaced = normalize_spacing(&text);
    if spaced == text {
        log::debug!("{} already spaced", args.document.display());
    } else {
        // In place, so permissions and symlinks are kept.
        std::fs::write(&args.document, spaced)?;
    }
    println!("Formatting complete.");
    Ok(())
}
