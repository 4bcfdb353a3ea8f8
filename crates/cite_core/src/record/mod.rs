/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A record is one bibliographic entry: a book, an article, a web page.
//! Records are validated on construction and immutable afterwards.

pub mod types;


use serde::{Deserialize, Serialize};

pub use self::types::*;

crate::str_enum! {
    /// The kind of a [`Record`], used as the key of style registries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum RecordKind {
        Book = "book",
        InternetResource = "internet-resource",
        ArticlesCollection = "articles-collection",
        Dissertation = "dissertation",
        JournalArticle = "journal-article",
    }
}

/// The Record model.
///
/// Serialized with a `type` tag holding the [`RecordKind`] name:
///
/// ```yaml
/// - type: internet-resource
///   article: Наука как искусство
///   website: Ведомости
///   link: https://www.vedomosti.ru
///   access_date: 01.01.2021
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Record {
    Book(Book),
    InternetResource(InternetResource),
    ArticlesCollection(ArticlesCollection),
    Dissertation(Dissertation),
    JournalArticle(JournalArticle),
}

impl Record {
    /// Return the record kind.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Book(_) => RecordKind::Book,
            Record::InternetResource(_) => RecordKind::InternetResource,
            Record::ArticlesCollection(_) => RecordKind::ArticlesCollection,
            Record::Dissertation(_) => RecordKind::Dissertation,
            Record::JournalArticle(_) => RecordKind::JournalArticle,
        }
    }

    /// Return the main title of the work.
    pub fn title(&self) -> &str {
        match self {
            Record::Book(r) => r.title(),
            Record::InternetResource(r) => r.article(),
            Record::ArticlesCollection(r) => r.article_title(),
            Record::Dissertation(r) => r.dissertation_title(),
            Record::JournalArticle(r) => r.article_title(),
        }
    }

    /// Return the publication year, if the kind carries one.
    pub fn year(&self) -> Option<u32> {
        match self {
            Record::Book(r) => Some(r.year()),
            Record::InternetResource(_) => None,
            Record::ArticlesCollection(r) => Some(r.year()),
            Record::Dissertation(r) => Some(r.year()),
            Record::JournalArticle(r) => Some(r.year()),
        }
    }
}

impl From<Book> for Record {
    fn from(r: Book) -> Self {
        Self::Book(r)
    }
}

impl From<InternetResource> for Record {
    fn from(r: InternetResource) -> Self {
        Self::InternetResource(r)
    }
}

impl From<ArticlesCollection> for Record {
    fn from(r: ArticlesCollection) -> Self {
        Self::ArticlesCollection(r)
    }
}

impl From<Dissertation> for Record {
    fn from(r: Dissertation) -> Self {
        Self::Dissertation(r)
    }
}

impl From<JournalArticle> for Record {
    fn from(r: JournalArticle) -> Self {
        Self::JournalArticle(r)
    }
}
