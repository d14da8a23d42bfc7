use clap::Parser;
use manustyle::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("manustyle")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_document_only() {
    let args = make_args(&["chapters/novel.md"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.document, PathBuf::from("chapters/novel.md"));
    assert_eq!(parsed.metadata, PathBuf::from("metadata.yaml"));
    assert!(!parsed.verbose);
}

#[test]
fn test_explicit_metadata() {
    let args = make_args(&["novel.md", "shared/author.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.metadata, PathBuf::from("shared/author.yaml"));
}

#[test]
fn test_verbose_flags() {
    let parsed = Args::try_parse_from(make_args(&["-v", "novel.md"])).unwrap();
    assert!(parsed.verbose);

    let parsed = Args::try_parse_from(make_args(&["novel.md", "--verbose"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["novel.md", "metadata.yaml", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
