use anyhow::Result;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

use gs1_decoder::compose::{to_bracket_notation, to_element_string};
use gs1_decoder::normalize::InputNormalizer;
use gs1_decoder::{is_valid, parse, DecodedElement, Gs1Decoder, FNC1};

#[test]
fn test_bracket_format_round_trip() {
    let record = parse("(01)04012345678901(17)251231(10)ABC123");

    assert_eq!(record.gtin.as_deref(), Some("04012345678901"));
    assert_eq!(record.expiry_date.as_deref(), Some("2025-12-31"));
    assert_eq!(record.batch_number.as_deref(), Some("ABC123"));
    assert_eq!(record.raw, "(01)04012345678901(17)251231(10)ABC123");
}

#[test]
fn test_raw_format_with_separator_matches_bracket_format() {
    let bracket = parse("(01)04012345678901(17)251231(10)ABC123");
    let raw = parse(&format!("010401234567890117251231{}10ABC123", FNC1));

    // Identical decode modulo `raw`, which by definition retains each
    // original input.
    assert_eq!(raw.gtin, bracket.gtin);
    assert_eq!(raw.expiry_date, bracket.expiry_date);
    assert_eq!(raw.batch_number, bracket.batch_number);
    assert_eq!(raw.serial_number, bracket.serial_number);
    assert_eq!(raw.sscc, bracket.sscc);
    assert_eq!(raw.production_date, bracket.production_date);
    assert_eq!(raw.elements, bracket.elements);
}

#[test]
fn test_fixed_length_field_never_over_consumes() {
    let record = parse("0104012345678901");

    assert_eq!(record.gtin.as_deref(), Some("04012345678901"));
    assert!(record.batch_number.is_none());
    assert!(record.serial_number.is_none());
    assert!(record.sscc.is_none());
    assert!(record.expiry_date.is_none());
    assert!(record.production_date.is_none());
    assert_eq!(record.elements.len(), 1);
}

#[test]
fn test_admissibility_heuristic_keeps_lookalike_in_batch() {
    // "17" at the tail of the batch value has too little behind it to be a
    // real expiry field; the batch must not be truncated.
    let record = parse("1017A9");

    assert_eq!(record.batch_number.as_deref(), Some("17A9"));
    assert!(record.expiry_date.is_none());
}

#[test]
fn test_date_normalization_boundary() {
    let record = parse("(17)251231");
    assert_eq!(record.expiry_date.as_deref(), Some("2025-12-31"));

    // Five digits cannot be normalized; the raw value is retained as-is.
    let record = parse("(17)25123");
    assert_eq!(record.expiry_date.as_deref(), Some("25123"));
}

#[test]
fn test_validity_verdict_survives_normalization() {
    let normalizer = InputNormalizer::new();
    for input in [
        "(01)04012345678901",
        "]C10104012345678901",
        "]C1]e01017A9",
        "10ABCx1d21XYZ",
        " 01 04012345678901 ",
        "~10ABC",
        "plain text",
        "991234",
        "",
        "]C",
    ] {
        let normalized = normalizer.canonicalize(input);
        assert_eq!(
            is_valid(input),
            is_valid(&normalized),
            "validity changed under normalization for {:?}",
            input
        );
    }
}

#[test]
fn test_parse_never_fails() {
    let oversized = "x".repeat(4096);
    for input in [
        "",
        "\u{0}\u{1}\u{2}binary\u{ff}",
        "(((((",
        "))))",
        "999999999999999999999999",
        "]C1",
        "~~~~~~~~",
        "日本語のテキスト",
        oversized.as_str(),
    ] {
        let record = parse(input);
        assert_eq!(record.raw, input);
    }
}

#[test]
fn test_duplicate_ai_last_write_wins() {
    let record = parse("(10)FIRST(10)SECOND");
    assert_eq!(record.batch_number.as_deref(), Some("SECOND"));
}

#[test]
fn test_scanner_quirks_full_pipeline() {
    // AIM prefix, spaces from the wedge, and a textual separator stand-in,
    // all in one scan.
    let record = parse("]C101 04012345678901 17 251231 10LOT-7x1d21S99");

    assert_eq!(record.gtin.as_deref(), Some("04012345678901"));
    assert_eq!(record.expiry_date.as_deref(), Some("2025-12-31"));
    assert_eq!(record.batch_number.as_deref(), Some("LOT-7"));
    assert_eq!(record.serial_number.as_deref(), Some("S99"));
}

#[test]
fn test_unregistered_bracket_ai_kept_as_opaque_element() {
    let record = parse("(01)04012345678901(3103)001500");

    assert_eq!(record.gtin.as_deref(), Some("04012345678901"));
    assert!(record
        .elements
        .contains(&DecodedElement::new("3103", "001500")));
}

#[test]
fn test_composer_output_parses_back() {
    let elements = vec![
        DecodedElement::new("01", "04012345678901"),
        DecodedElement::new("10", "ABC123"),
        DecodedElement::new("21", "SER42"),
    ];

    let bracket = parse(&to_bracket_notation(&elements));
    assert_eq!(bracket.gtin.as_deref(), Some("04012345678901"));
    assert_eq!(bracket.batch_number.as_deref(), Some("ABC123"));
    assert_eq!(bracket.serial_number.as_deref(), Some("SER42"));

    let raw = parse(&to_element_string(&elements));
    assert_eq!(raw.gtin, bracket.gtin);
    assert_eq!(raw.batch_number, bracket.batch_number);
    assert_eq!(raw.serial_number, bracket.serial_number);
}

#[test]
fn test_batch_scan_file_decodes_line_by_line() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("scans.txt");
    let mut file = fs::File::create(&path)?;
    writeln!(file, "(01)04012345678901(10)L1")?;
    writeln!(file)?;
    writeln!(file, "0104012345678902")?;
    writeln!(file, "not a barcode")?;

    let decoder = Gs1Decoder::new();
    let content = fs::read_to_string(&path)?;
    let records: Vec<_> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| decoder.parse(line))
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].gtin.as_deref(), Some("04012345678901"));
    assert_eq!(records[0].batch_number.as_deref(), Some("L1"));
    assert_eq!(records[1].gtin.as_deref(), Some("04012345678902"));
    assert!(!records[2].has_named_fields());
    Ok(())
}
