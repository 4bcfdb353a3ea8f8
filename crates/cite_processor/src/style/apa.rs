/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! APA reference list entries.
//!
//! Only books and journal articles have an APA form; other kinds are left
//! out of APA reference lists.

use cite_core::{Book, CitationStandard, JournalArticle};

use crate::registry::StyleRegistry;
use crate::style::CitationRule;
use crate::template::{Fields, Template};

pub static REGISTRY: StyleRegistry = StyleRegistry {
    standard: CitationStandard::Apa,
    book: Some(&ApaBook),
    internet_resource: None,
    articles_collection: None,
    dissertation: None,
    journal_article: Some(&ApaJournalArticle),
};

pub struct ApaBook;

static BOOK: Template = Template::new("$authors ($year). $title. $publishing_house");

impl CitationRule<Book> for ApaBook {
    fn template(&self) -> &'static Template {
        &BOOK
    }

    fn fields<'a>(&self, book: &'a Book) -> Fields<'a> {
        Fields::new()
            .with("authors", book.authors())
            .with("title", book.title())
            .with("publishing_house", book.publishing_house())
            .with("year", book.year())
    }
}

pub struct ApaJournalArticle;

static JOURNAL_ARTICLE: Template =
    Template::new("$authors ($year). $article_title. $journal_name, $N, $pages");

impl CitationRule<JournalArticle> for ApaJournalArticle {
    fn template(&self) -> &'static Template {
        &JOURNAL_ARTICLE
    }

    fn fields<'a>(&self, article: &'a JournalArticle) -> Fields<'a> {
        Fields::new()
            .with("authors", article.authors())
            .with("article_title", article.article_title())
            .with("journal_name", article.journal_name())
            .with("year", article.year())
            .with("N", article.issue_number())
            .with("pages", article.pages())
    }
}
