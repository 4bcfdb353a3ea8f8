/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-standard tables mapping record kinds to rendering rules.

use cite_core::{
    ArticlesCollection, Book, CitationStandard, Dissertation, InternetResource, JournalArticle,
    Record, RecordKind,
};

use crate::style::{apa, gost, CitationRule};
use crate::template::{Template, TemplateError};

/// The rules of one citation standard, one optional slot per record kind.
///
/// Tables are `static` and never change at runtime. A `None` slot means the
/// standard has no form for that kind and such records are skipped.
pub struct StyleRegistry {
    pub standard: CitationStandard,
    pub book: Option<&'static dyn CitationRule<Book>>,
    pub internet_resource: Option<&'static dyn CitationRule<InternetResource>>,
    pub articles_collection: Option<&'static dyn CitationRule<ArticlesCollection>>,
    pub dissertation: Option<&'static dyn CitationRule<Dissertation>>,
    pub journal_article: Option<&'static dyn CitationRule<JournalArticle>>,
}

impl StyleRegistry {
    /// The table for `standard`.
    pub fn for_standard(standard: CitationStandard) -> &'static StyleRegistry {
        match standard {
            CitationStandard::Gost => &gost::REGISTRY,
            CitationStandard::Apa => &apa::REGISTRY,
        }
    }

    /// Template used for `kind`, if the standard supports it.
    pub fn template(&self, kind: RecordKind) -> Option<&'static Template> {
        match kind {
            RecordKind::Book => self.book.map(|rule| rule.template()),
            RecordKind::InternetResource => self.internet_resource.map(|rule| rule.template()),
            RecordKind::ArticlesCollection => self.articles_collection.map(|rule| rule.template()),
            RecordKind::Dissertation => self.dissertation.map(|rule| rule.template()),
            RecordKind::JournalArticle => self.journal_article.map(|rule| rule.template()),
        }
    }

    pub fn supports(&self, kind: RecordKind) -> bool {
        self.template(kind).is_some()
    }

    /// Supported kinds, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = RecordKind> + '_ {
        RecordKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.supports(*kind))
    }

    /// Render `record` with the rule registered for its kind.
    ///
    /// Returns `None` when the standard has no rule for the kind.
    pub fn render(&self, record: &Record) -> Option<Result<String, TemplateError>> {
        match record {
            Record::Book(r) => self.book.map(|rule| rule.render(r)),
            Record::InternetResource(r) => self.internet_resource.map(|rule| rule.render(r)),
            Record::ArticlesCollection(r) => self.articles_collection.map(|rule| rule.render(r)),
            Record::Dissertation(r) => self.dissertation.map(|rule| rule.render(r)),
            Record::JournalArticle(r) => self.journal_article.map(|rule| rule.render(r)),
        }
    }
}
