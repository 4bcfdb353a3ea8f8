/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::{CitationStandard, Record, RecordKind};
use cite_processor::style::gost::{
    GostBook, GostCollectionArticle, GostDissertation, GostInternetResource, GostJournalArticle,
};
use cite_processor::{format_citations, CitationFormatter, CitationRule};

#[test]
fn test_book() {
    assert_eq!(GostBook.render(&make_book()).unwrap(), GOST_BOOK);
}

#[test]
fn test_internet_resource() {
    assert_eq!(
        GostInternetResource.render(&make_internet_resource()).unwrap(),
        GOST_INTERNET_RESOURCE
    );
}

#[test]
fn test_articles_collection() {
    assert_eq!(
        GostCollectionArticle.render(&make_articles_collection()).unwrap(),
        GOST_ARTICLES_COLLECTION
    );
}

#[test]
fn test_dissertation() {
    assert_eq!(
        GostDissertation.render(&make_dissertation()).unwrap(),
        GOST_DISSERTATION
    );
}

#[test]
fn test_journal_article() {
    assert_eq!(
        GostJournalArticle.render(&make_journal_article()).unwrap(),
        GOST_JOURNAL_ARTICLE
    );
}

#[test]
fn test_citation_formatter_sorts_all_kinds() {
    let records = all_records();
    let citations = CitationFormatter::new(CitationStandard::Gost, &records)
        .unwrap()
        .format();

    let kinds: Vec<RecordKind> = citations.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::Dissertation,
            RecordKind::ArticlesCollection,
            RecordKind::Book,
            RecordKind::JournalArticle,
            RecordKind::InternetResource,
        ]
    );

    let text: Vec<String> = citations.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        text,
        vec![
            GOST_DISSERTATION,
            GOST_ARTICLES_COLLECTION,
            GOST_BOOK,
            GOST_JOURNAL_ARTICLE,
            GOST_INTERNET_RESOURCE,
        ]
    );
}

#[test]
fn test_edition_fragment_precedes_city() {
    let rendered = GostBook.render(&make_book()).unwrap();
    assert!(rendered.contains("3-е изд. – СПб.:"));
}

#[test]
fn test_citation_formatter_keeps_records() {
    let records: Vec<Record> = vec![make_book().into(), make_book().into()];
    let citations = format_citations(CitationStandard::Gost, &records).unwrap();
    assert_eq!(citations, vec![GOST_BOOK, GOST_BOOK]);
}
