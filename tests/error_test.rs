use std::io;

use manustyle::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::MissingConfigurationError {
        missing: vec!["title".to_string(), "email".to_string()],
    };
    assert_eq!(err.to_string(), "Missing keys in frontmatter: title, email.");

    let err = Error::MissingTemplateError { path: "/work/templates/x.mustache".to_string() };
    assert_eq!(err.to_string(), "Template file not found at /work/templates/x.mustache.");

    let err = Error::NotAMapping { origin: "metadata.yaml".to_string() };
    assert_eq!(err.to_string(), "Expected a key/value mapping in metadata.yaml.");
}
