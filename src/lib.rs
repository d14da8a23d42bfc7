//! manustyle renders a manuscript stylesheet from a mustache-style template.
//! Template values come from built-in defaults, a shared metadata file and the
//! YAML frontmatter of the manuscript, in increasing order of precedence.

/// Command-line interface module for the manustyle application
pub mod cli;

/// Run settings and built-in defaults
pub mod config;

/// Common constants: file locations, required keys, default values
pub mod constants;

/// Layered context assembly
pub mod context;

/// Error types and handling for the manustyle application
pub mod error;

/// YAML frontmatter extraction from manuscript documents
pub mod frontmatter;

/// Logging setup shared by the binaries
pub mod logger;

/// Orchestration of loading, validation, rendering and output
pub mod pipeline;

/// `{{ key }}` / `{{{ key }}}` placeholder substitution
pub mod renderer;

/// Required-key validation
pub mod schema;

/// Blank-line normalization for manuscript bodies
pub mod spacing;

/// YAML to JSON conversion with last-wins keys
pub mod yaml;
