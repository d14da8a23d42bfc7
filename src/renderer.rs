//! Placeholder substitution for stylesheet templates.
//! Supports `{{{ key }}}` and `{{ key }}` tokens; there is no logic, nesting
//! or escaping.
use crate::context::Context;
use crate::error::Result;
use regex::{Captures, Regex};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `String` - Rendered template string
    fn render(&self, template: &str, context: &Context) -> String;
}

/// Mustache-style renderer performing two substitution passes.
///
/// Triple-brace tokens are replaced first since every `{{{ key }}}` contains
/// a `{{ key }}` substring. Tokens never span lines.
pub struct MustacheRenderer {
    triple: Regex,
    double: Regex,
}

impl MustacheRenderer {
    /// Creates a new renderer with compiled token patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            triple: Regex::new(r"\{\{\{(.*?)\}\}\}")?,
            double: Regex::new(r"\{\{(.*?)\}\}")?,
        })
    }
}

/// Textual form of a context value as it appears in rendered output.
///
/// Nulls render as an empty string; sequences and mappings as compact JSON.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn substitute(pattern: &Regex, template: &str, context: &Context) -> String {
    pattern
        .replace_all(template, |caps: &Captures| {
            let key = caps[1].trim();
            context.get(key).map(display_value).unwrap_or_default()
        })
        .into_owned()
}

impl TemplateRenderer for MustacheRenderer {
    /// Renders `template`, substituting an empty string for unknown keys.
    fn render(&self, template: &str, context: &Context) -> String {
        let partial = substitute(&self.triple, template, context);
        substitute(&self.double, &partial, context)
    }
}
