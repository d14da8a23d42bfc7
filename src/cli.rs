//! Command-line interface implementation for manustyle.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::METADATA_FILE;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for manustyle.
#[derive(Parser, Debug)]
#[command(author, version, about = "manustyle: render a manuscript stylesheet from document frontmatter", long_about = None)]
pub struct Args {
    /// Markdown document whose frontmatter personalizes the stylesheet
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Shared metadata file applied beneath the document's frontmatter
    #[arg(value_name = "METADATA", default_value = METADATA_FILE)]
    pub metadata: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the document argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
