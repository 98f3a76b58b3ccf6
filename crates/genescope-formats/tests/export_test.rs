use genescope_core::record::RecordField;
use genescope_formats::{export, records, FormatError};
use pretty_assertions::assert_eq;

const GENES_JSON: &str = include_str!("fixtures/genes.json");

#[test]
fn test_fixture_parses() {
    let recs = records::parse(GENES_JSON).unwrap();
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0].get(RecordField::GeneName), Some("APOE"));
}

#[test]
fn test_export_fixture() {
    let recs = records::parse(GENES_JSON).unwrap();
    let csv = export::to_delimited_text(&recs).unwrap();

    // header + one line per record
    assert_eq!(csv.lines().count(), recs.len() + 1);
    assert!(csv.starts_with("\"Gene Name\",\"Variant\","));
}

#[test]
fn test_export_absent_variant_is_empty_quoted() {
    let recs = records::parse(GENES_JSON).unwrap();
    let bdnf = recs
        .iter()
        .find(|r| r.get(RecordField::GeneName) == Some("BDNF"))
        .expect("BDNF record not found");
    assert_eq!(bdnf.variant, None);

    let csv = export::to_delimited_text([bdnf]).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.starts_with("\"BDNF\",\"\","));
}

#[test]
fn test_export_nothing() {
    let recs = records::parse("[]").unwrap();
    assert!(matches!(
        export::to_delimited_text(&recs),
        Err(FormatError::EmptyExport)
    ));
}
