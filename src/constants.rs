//! Common constants used throughout manustyle.

/// Line that opens and closes a frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Shared metadata file looked up in the working directory
pub const METADATA_FILE: &str = "metadata.yaml";

/// Stylesheet template, relative to the working directory
pub const TEMPLATE_FILE: &str = "templates/manuscript.css.mustache";

/// Directory receiving the rendered stylesheet
pub const OUTPUT_DIR: &str = "rendered";

/// Name of the rendered stylesheet
pub const OUTPUT_FILE: &str = "manuscript.css";

/// Keys every document must resolve after all layers are merged
pub const REQUIRED_KEYS: [&str; 8] = [
    "address",
    "firstname",
    "lastname",
    "byline",
    "font_family",
    "title",
    "page_size",
    "email",
];

pub const DEFAULT_PAGE_SIZE: &str = "A4";

pub const DEFAULT_FONT_FAMILY: &str = r#""Times New Roman", Times, serif"#;
