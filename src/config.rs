//! Run configuration for manustyle.
//! Built once at startup from the working directory and passed by reference
//! to every stage of the pipeline.

use crate::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_PAGE_SIZE, OUTPUT_DIR, OUTPUT_FILE, TEMPLATE_FILE,
};
use crate::context::Context;
use crate::schema::Schema;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Built-in values forming the lowest-precedence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Defaults {
    pub page_size: String,
    pub font_family: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl Defaults {
    /// Converts the defaults into a context layer keyed by field name.
    pub fn to_context(&self) -> Context {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.into_iter().collect(),
            _ => Context::new(),
        }
    }
}

/// Immutable settings for a single run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub defaults: Defaults,
    pub schema: Schema,
    /// Stylesheet template to render
    pub template_path: PathBuf,
    /// Full path of the rendered stylesheet
    pub output_path: PathBuf,
}

impl Settings {
    /// Resolves template and output locations against `working_dir`.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        let working_dir = working_dir.as_ref();
        let output_dir = working_dir.join(OUTPUT_DIR);
        Self {
            defaults: Defaults::default(),
            schema: Schema::default(),
            template_path: working_dir.join(TEMPLATE_FILE),
            output_path: output_dir.join(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_to_context() {
        let context = Defaults::default().to_context();
        assert_eq!(context.len(), 2);
        assert_eq!(context["page_size"], json!("A4"));
        assert_eq!(context["font_family"], json!(r#""Times New Roman", Times, serif"#));
    }

    #[test]
    fn test_settings_paths() {
        let settings = Settings::new("/work");
        assert_eq!(
            settings.template_path,
            PathBuf::from("/work/templates/manuscript.css.mustache")
        );
        assert_eq!(settings.output_path, PathBuf::from("/work/rendered/manuscript.css"));
    }
}
