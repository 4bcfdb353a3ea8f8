/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::{Book, CitationStandard, Record, RecordKind};
use cite_processor::{format_citations, StyleRegistry};

#[test]
fn test_render_is_deterministic() {
    let records = all_records();
    for standard in CitationStandard::ALL {
        let registry = StyleRegistry::for_standard(*standard);
        for record in &records {
            let first = registry.render(record).map(|r| r.unwrap());
            let second = registry.render(record).map(|r| r.unwrap());
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_output_is_sorted() {
    let mut records = all_records();
    records.push(
        Book::builder()
            .authors("Алексеев А.А.")
            .title("Основы")
            .city("М.")
            .publishing_house("Наука")
            .year(1999)
            .pages(120)
            .build()
            .unwrap()
            .into(),
    );
    records.reverse();

    for standard in CitationStandard::ALL {
        let citations = format_citations(*standard, &records).unwrap();
        for pair in citations.windows(2) {
            assert!(pair[0] <= pair[1], "{:?} > {:?}", pair[0], pair[1]);
        }
    }
}

#[test]
fn test_every_placeholder_has_a_field() {
    let records = all_records();
    for standard in CitationStandard::ALL {
        let registry = StyleRegistry::for_standard(*standard);
        for record in &records {
            if let Some(rendered) = registry.render(record) {
                let rendered = rendered.unwrap();
                assert!(!rendered.contains('$'), "unfilled placeholder in {rendered}");
            }
        }
    }
}

#[test]
fn test_registry_matches_output_kinds() {
    let records = all_records();
    for standard in CitationStandard::ALL {
        let registry = StyleRegistry::for_standard(*standard);
        let expected: Vec<RecordKind> = records
            .iter()
            .map(Record::kind)
            .filter(|kind| registry.supports(*kind))
            .collect();
        let rendered = format_citations(*standard, &records).unwrap();
        assert_eq!(rendered.len(), expected.len());
    }
}

#[test]
fn test_book_without_edition_has_no_fragment() {
    let book = Book::builder()
        .authors(AUTHORS)
        .title(TITLE)
        .city("СПб.")
        .publishing_house("Просвещение")
        .year(2020)
        .pages(999)
        .build()
        .unwrap();
    let citations = format_citations(CitationStandard::Gost, &[Record::from(book)]).unwrap();
    assert_eq!(
        citations,
        vec!["Иванов И.М., Петров С.Н. Наука как искусство. – СПб.: Просвещение, 2020. – 999 с."]
    );
}
