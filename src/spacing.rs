//! Paragraph spacing for manuscript bodies.
//! Markdown joins adjacent lines into one paragraph; manuscripts written one
//! paragraph per line need a blank line between them.

use crate::frontmatter::is_delimiter;

/// Inserts a blank line after every non-empty body line that is directly
/// followed by another non-empty line.
///
/// A leading frontmatter block passes through unchanged, and a line reading
/// `---` never triggers an insertion before it. Running it twice gives the
/// same result as running it once.
pub fn normalize_spacing(text: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut output = String::with_capacity(text.len() + lines.len());

    let mut in_frontmatter = lines.first().is_some_and(|line| is_delimiter(line));
    let mut fences_seen = 0;

    for (i, line) in lines.iter().enumerate() {
        output.push_str(line);

        if in_frontmatter {
            if is_delimiter(line) {
                fences_seen += 1;
                in_frontmatter = fences_seen < 2;
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }
        if let Some(next) = lines.get(i + 1) {
            if !next.trim().is_empty() && !is_delimiter(next.trim_start()) {
                output.push('\n');
            }
        }
    }
    output
}
