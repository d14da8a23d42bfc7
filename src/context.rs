//! Layered context assembly.
//! Values are merged from built-in defaults, the shared metadata file and the
//! document frontmatter, in increasing order of precedence.

use crate::config::Defaults;
use crate::error::{Error, Result};
use crate::yaml;
use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// Flat key/value mapping used to resolve template placeholders.
pub type Context = IndexMap<String, serde_json::Value>;

/// A source of configuration values. Variants are declared in increasing
/// order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Defaults,
    SharedMetadata,
    Frontmatter,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Defaults => write!(f, "defaults"),
            Layer::SharedMetadata => write!(f, "shared metadata"),
            Layer::Frontmatter => write!(f, "frontmatter"),
        }
    }
}

/// Parses YAML text into a context.
///
/// An empty document yields an empty context. A repeated key keeps its last
/// value. Keys that are not strings are skipped with a warning.
///
/// # Errors
/// * `Error::YamlError` if the text is not valid YAML
/// * `Error::NotAMapping` if the YAML is valid but not a mapping
pub fn parse_mapping(yaml: &str, origin: &str) -> Result<Context> {
    if yaml.trim().is_empty() {
        return Ok(Context::new());
    }

    match yaml::from_str(yaml)? {
        serde_json::Value::Null => Ok(Context::new()),
        serde_json::Value::Object(mapping) => Ok(mapping.into_iter().collect()),
        _ => Err(Error::NotAMapping { origin: origin.to_string() }),
    }
}

/// Loads the shared metadata layer.
///
/// A missing file is an empty layer. A file that cannot be read or parsed is
/// also an empty layer, reported with a warning.
pub fn load_shared_metadata<P: AsRef<Path>>(metadata_path: P) -> Context {
    let metadata_path = metadata_path.as_ref();
    if !metadata_path.is_file() {
        debug!("No shared metadata at {}", metadata_path.display());
        return Context::new();
    }

    debug!("Loading shared metadata from {}", metadata_path.display());
    let loaded = std::fs::read_to_string(metadata_path)
        .map_err(Error::IoError)
        .and_then(|content| parse_mapping(&content, &metadata_path.display().to_string()));

    match loaded {
        Ok(context) => context,
        Err(e) => {
            warn!("Could not read metadata file: {e}");
            Context::new()
        }
    }
}

/// Collects layers and merges them by precedence.
///
/// Layers may be supplied in any order; `build` always applies them from
/// lowest to highest rank. Supplying the same layer twice replaces it.
#[derive(Debug, Default)]
pub struct ContextBuilder {
    layers: BTreeMap<Layer, Context>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder seeded with the defaults layer.
    pub fn with_defaults(defaults: &Defaults) -> Self {
        Self::new().layer(Layer::Defaults, defaults.to_context())
    }

    pub fn layer(mut self, layer: Layer, context: Context) -> Self {
        self.layers.insert(layer, context);
        self
    }

    /// Merges all layers; the last write per key wins.
    pub fn build(self) -> Context {
        let mut merged = Context::new();
        for (layer, context) in self.layers {
            for (key, value) in context {
                debug!("'{key}' set by {layer}");
                merged.insert(key, value);
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(pairs: &[(&str, serde_json::Value)]) -> Context {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_frontmatter_overrides_lower_layers() {
        let merged = ContextBuilder::new()
            .layer(Layer::Defaults, context(&[("title", json!("default"))]))
            .layer(Layer::SharedMetadata, context(&[("title", json!("shared"))]))
            .layer(Layer::Frontmatter, context(&[("title", json!("document"))]))
            .build();
        assert_eq!(merged["title"], json!("document"));
    }

    #[test]
    fn test_absent_key_falls_through() {
        let merged = ContextBuilder::new()
            .layer(Layer::Defaults, context(&[("title", json!("default"))]))
            .layer(Layer::SharedMetadata, context(&[("title", json!("shared"))]))
            .layer(Layer::Frontmatter, context(&[("email", json!("a@b.c"))]))
            .build();
        assert_eq!(merged["title"], json!("shared"));
        assert_eq!(merged["email"], json!("a@b.c"));
    }

    #[test]
    fn test_precedence_ignores_insertion_order() {
        let merged = ContextBuilder::new()
            .layer(Layer::Frontmatter, context(&[("page_size", json!("Letter"))]))
            .layer(Layer::Defaults, context(&[("page_size", json!("A4"))]))
            .build();
        assert_eq!(merged["page_size"], json!("Letter"));
    }

    #[test]
    fn test_with_defaults() {
        let merged = ContextBuilder::with_defaults(&Defaults::default()).build();
        assert_eq!(merged["page_size"], json!("A4"));
        assert_eq!(merged["font_family"], json!(r#""Times New Roman", Times, serif"#));
    }

    #[test]
    fn test_parse_mapping_values() {
        let parsed = parse_mapping("a: text\nb: 3\nc: 1.5\nd: true\ne: ~\n", "test").unwrap();
        assert_eq!(parsed["a"], json!("text"));
        assert_eq!(parsed["b"], json!(3));
        assert_eq!(parsed["c"], json!(1.5));
        assert_eq!(parsed["d"], json!(true));
        assert_eq!(parsed["e"], serde_json::Value::Null);
    }

    #[test]
    fn test_parse_mapping_skips_non_string_keys() {
        let parsed = parse_mapping("1: one\ntwo: 2\n", "test").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["two"], json!(2));
    }

    #[test]
    fn test_parse_mapping_rejects_scalars() {
        assert!(matches!(
            parse_mapping("just a string", "test"),
            Err(Error::NotAMapping { .. })
        ));
        assert!(matches!(parse_mapping("a: [1,", "test"), Err(Error::YamlError(_))));
    }

    #[test]
    fn test_parse_mapping_empty() {
        assert!(parse_mapping("", "test").unwrap().is_empty());
        assert!(parse_mapping("  \n", "test").unwrap().is_empty());
        assert!(parse_mapping("~", "test").unwrap().is_empty());
    }
}
