//! Stylesheet generation pipeline.
//! Loads every configuration layer, validates the merged context, renders the
//! template in memory and only then writes the output file.

use crate::config::Settings;
use crate::context::{load_shared_metadata, Context, ContextBuilder, Layer};
use crate::error::{Error, Result};
use crate::frontmatter::read_frontmatter;
use crate::renderer::{MustacheRenderer, TemplateRenderer};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the validated context for `document`.
///
/// # Errors
/// * `Error::IoError` if the document cannot be read
/// * `Error::MissingConfigurationError` if required keys are absent
pub fn resolve_context<P: AsRef<Path>>(
    settings: &Settings,
    document: P,
    metadata_path: P,
) -> Result<Context> {
    let shared = load_shared_metadata(metadata_path);
    let frontmatter = read_frontmatter(document)?;

    let context = ContextBuilder::with_defaults(&settings.defaults)
        .layer(Layer::SharedMetadata, shared)
        .layer(Layer::Frontmatter, frontmatter)
        .build();

    settings.schema.validate(&context)?;
    Ok(context)
}

/// Reads the stylesheet template.
///
/// # Errors
/// * `Error::MissingTemplateError` if the template does not exist
/// * `Error::IoError` if it exists but cannot be read
pub fn read_template<P: AsRef<Path>>(template_path: P) -> Result<String> {
    let template_path = template_path.as_ref();
    if !template_path.is_file() {
        return Err(Error::MissingTemplateError {
            path: template_path.display().to_string(),
        });
    }
    debug!("Reading template from {}", template_path.display());
    Ok(fs::read_to_string(template_path)?)
}

/// Writes `content` to `dest_path`, creating the parent directory if needed.
///
/// The content goes to a sibling temporary file first and is renamed into
/// place, so `dest_path` never holds a partial stylesheet.
pub fn write_output<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = dest_path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = dest_path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, dest_path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp_path);
    })?;
    Ok(())
}

/// Runs the whole pipeline and returns the path of the rendered stylesheet.
///
/// # Flow
/// 1. Loads shared metadata and document frontmatter
/// 2. Merges them over the defaults and validates the result
/// 3. Reads and renders the template
/// 4. Writes the stylesheet
pub fn run<P: AsRef<Path>>(settings: &Settings, document: P, metadata_path: P) -> Result<PathBuf> {
    let context = resolve_context(settings, document, metadata_path)?;
    let template = read_template(&settings.template_path)?;

    let renderer = MustacheRenderer::new()?;
    let css = renderer.render(&template, &context);

    write_output(&settings.output_path, &css)?;
    Ok(settings.output_path.clone())
}
