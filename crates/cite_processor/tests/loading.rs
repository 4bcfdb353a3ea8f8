/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::CitationStandard;
use cite_processor::io::load_records;
use cite_processor::{format_citations, ProcessorError};

#[test]
fn test_yaml_fixture_matches_builders() {
    let records =
        load_records(&fixture_path("records.yaml")).expect("records fixture should parse");
    assert_eq!(records, all_records());
}

#[test]
fn test_json_fixture_matches_builders() {
    let records =
        load_records(&fixture_path("records.json")).expect("records fixture should parse");
    assert_eq!(records, all_records());
}

#[test]
fn test_json_fixture_formats_under_apa() {
    let records = load_records(&fixture_path("records.json")).unwrap();
    let citations = format_citations(CitationStandard::Apa, &records).unwrap();
    assert_eq!(citations, vec![APA_JOURNAL_ARTICLE, APA_BOOK]);
}

#[test]
fn test_missing_file() {
    let err = load_records(&fixture_path("missing.yaml")).unwrap_err();
    assert!(matches!(err, ProcessorError::Io(_)));
}

#[test]
fn test_yaml_rejects_invalid_utf8() {
    // The title holds a lone 0xFF byte.
    let err = load_records(&fixture_path("invalid-utf8.yaml")).unwrap_err();
    match err {
        ProcessorError::ParseError(format, message) => {
            assert_eq!(format, "YAML");
            assert!(message.contains("invalid utf-8"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
