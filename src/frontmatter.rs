//! Frontmatter extraction for manuscript documents.
//! A document may open with a YAML block fenced by `---` lines; everything
//! after the closing fence is body content and is left untouched.

use crate::constants::FRONTMATTER_DELIMITER;
use crate::context::{parse_mapping, Context};
use crate::error::Result;
use log::{debug, warn};
use std::path::Path;

/// Returns true when `line` is a frontmatter fence, ignoring the line ending
/// and trailing whitespace.
pub fn is_delimiter(line: &str) -> bool {
    line.trim_end() == FRONTMATTER_DELIMITER
}

/// Splits a document into its raw frontmatter block and body.
///
/// # Returns
/// * `Some((block, body))` - when the first line is a fence and a closing
///   fence follows
/// * `None` - when the document has no frontmatter or the block is unterminated
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let opening = lines.next()?;
    if !is_delimiter(opening) {
        return None;
    }

    let block_start = opening.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&text[block_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Extracts the frontmatter mapping from a document.
///
/// Malformed or non-mapping frontmatter is treated as absent: a warning is
/// logged and an empty context returned.
pub fn extract_frontmatter(text: &str) -> Context {
    let Some((block, _body)) = split_frontmatter(text) else {
        debug!("Document has no frontmatter");
        return Context::new();
    };

    match parse_mapping(block, "frontmatter") {
        Ok(context) => context,
        Err(e) => {
            warn!("Ignoring frontmatter: {e}");
            Context::new()
        }
    }
}

/// Reads a document from disk and extracts its frontmatter.
///
/// # Errors
/// * `Error::IoError` if the document cannot be read
pub fn read_frontmatter<P: AsRef<Path>>(document: P) -> Result<Context> {
    let document = document.as_ref();
    debug!("Reading frontmatter from {}", document.display());
    let text = std::fs::read_to_string(document)?;
    Ok(extract_frontmatter(&text))
}
