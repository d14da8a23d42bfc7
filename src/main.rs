//! manustyle's main application entry point.
//! Parses arguments, configures logging and runs the rendering pipeline
//! against the current working directory.

use manustyle::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, Result},
    logger::init_logger,
    pipeline,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::new(std::env::current_dir()?);
    let output = pipeline::run(&settings, &args.document, &args.metadata)?;
    println!("Successfully rendered CSS to {}", output.display());
    Ok(())
}
