use clap::Parser;
use genescope_cli::{execute, Cli};

fn records_path() -> String {
    format!("{}/../../data/genes.json", env!("CARGO_MANIFEST_DIR"))
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let records = records_path();
    let mut argv = vec!["genescope", "--records", records.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);

    let mut out = Vec::new();
    execute(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_search_bundled_catalogue() {
    let text = run(&["search", "apoe"]).unwrap();
    assert!(text.starts_with("Showing 1-"));
    assert!(text.contains("APOE | APOE4 (rs429358)"));
}

#[test]
fn test_search_paged() {
    let text = run(&["search", "alzheimer", "--page-size", "3", "--page", "2"]).unwrap();
    assert!(text.starts_with("Showing 4-6 of "));
    assert!(text.contains("[2]"));
}

#[test]
fn test_search_empty_and_missing() {
    assert!(run(&["search"]).unwrap().starts_with("Enter a gene"));
    assert!(run(&["search", "zzz-not-present"])
        .unwrap()
        .starts_with("No results found"));
}

#[test]
fn test_show_record() {
    let text = run(&["show", "0"]).unwrap();
    assert!(text.lines().next().unwrap().ends_with("APOE"));
    assert_eq!(text.lines().count(), 14);
}

#[test]
fn test_missing_record_file() {
    let cli = Cli::parse_from(["genescope", "--records", "no/such/file.json", "search", "apoe"]);
    let mut out = Vec::new();
    let err = execute(&cli, &mut out).unwrap_err();
    assert!(err.to_string().contains("Could not load gene records"));
}

#[test]
fn test_seq_does_not_need_records() {
    let cli = Cli::parse_from(["genescope", "--records", "no/such/file.json", "seq", "transcribe", "ATGT"]);
    let mut out = Vec::new();
    execute(&cli, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "AUGU\n");
}

#[test]
fn test_link() {
    let text = run(&["link", "blast", "ATGC GGCC"]).unwrap();
    assert!(text.starts_with("NCBI BLAST: https://blast.ncbi.nlm.nih.gov/"));
    assert!(text.trim_end().ends_with("QUERY=ATGC%20GGCC"));
}
