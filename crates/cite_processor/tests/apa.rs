/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::{CitationStandard, Record, RecordKind};
use cite_processor::style::apa::{ApaBook, ApaJournalArticle};
use cite_processor::{format_citations, CitationFormatter, CitationRule};

#[test]
fn test_book() {
    assert_eq!(ApaBook.render(&make_book()).unwrap(), APA_BOOK);
}

#[test]
fn test_journal_article() {
    assert_eq!(
        ApaJournalArticle.render(&make_journal_article()).unwrap(),
        APA_JOURNAL_ARTICLE
    );
}

#[test]
fn test_citation_formatter_sorts_journal_before_book() {
    let records: Vec<Record> = vec![make_book().into(), make_journal_article().into()];
    let citations = format_citations(CitationStandard::Apa, &records).unwrap();
    assert_eq!(citations, vec![APA_JOURNAL_ARTICLE, APA_BOOK]);
}

#[test]
fn test_unsupported_kinds_are_dropped() {
    let records = all_records();
    let citations = CitationFormatter::new(CitationStandard::Apa, &records)
        .unwrap()
        .format();

    assert_eq!(citations.len(), 2);
    assert!(citations.len() < records.len());
    for citation in &citations {
        assert!(matches!(
            citation.kind(),
            RecordKind::Book | RecordKind::JournalArticle
        ));
    }
    for text in citations.iter().map(|c| c.formatted()) {
        assert_ne!(text, GOST_INTERNET_RESOURCE);
        assert!(!text.contains("Ведомости"));
        assert!(!text.contains("Сборник научных трудов"));
        assert!(!text.contains("дис."));
    }
}

#[test]
fn test_only_unsupported_kinds_yield_empty_list() {
    let records: Vec<Record> = vec![
        make_internet_resource().into(),
        make_dissertation().into(),
        make_articles_collection().into(),
    ];
    let formatter = CitationFormatter::new(CitationStandard::Apa, &records).unwrap();
    assert!(formatter.is_empty());
    assert!(formatter.format().is_empty());
}
