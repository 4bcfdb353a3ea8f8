/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::macros::builder_setters;
use crate::record::RecordKind;

fn required<T>(
    kind: RecordKind,
    field: &'static str,
    value: Option<T>,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { kind, field })
}

fn positive(
    kind: RecordKind,
    field: &'static str,
    value: Option<i64>,
) -> Result<u32, ValidationError> {
    let value = required(kind, field, value)?;
    if value <= 0 {
        return Err(ValidationError::NotPositive { kind, field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { kind, field, value })
}

/// A book.
///
/// ```
/// use cite_core::Book;
///
/// let book = Book::builder()
///     .authors("Иванов И.М., Петров С.Н.")
///     .title("Наука как искусство")
///     .edition("3-е")
///     .city("СПб.")
///     .publishing_house("Просвещение")
///     .year(2020)
///     .pages(999)
///     .build()
///     .unwrap();
/// assert_eq!(book.edition(), Some("3-е"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookBuilder")]
pub struct Book {
    authors: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    edition: Option<String>,
    city: String,
    publishing_house: String,
    year: u32,
    pages: u32,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::default()
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Edition statement, e.g. `3-е`. Optional.
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publishing_house(&self) -> &str {
        &self.publishing_house
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

/// Unvalidated fields of a [`Book`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookBuilder {
    authors: Option<String>,
    title: Option<String>,
    edition: Option<String>,
    city: Option<String>,
    publishing_house: Option<String>,
    year: Option<i64>,
    pages: Option<i64>,
}

impl BookBuilder {
    builder_setters! {
        authors: String,
        title: String,
        edition: String,
        city: String,
        publishing_house: String,
        year: i64,
        pages: i64,
    }

    pub fn build(self) -> Result<Book, ValidationError> {
        const KIND: RecordKind = RecordKind::Book;
        Ok(Book {
            authors: required(KIND, "authors", self.authors)?,
            title: required(KIND, "title", self.title)?,
            edition: self.edition,
            city: required(KIND, "city", self.city)?,
            publishing_house: required(KIND, "publishing_house", self.publishing_house)?,
            year: positive(KIND, "year", self.year)?,
            pages: positive(KIND, "pages", self.pages)?,
        })
    }
}

impl TryFrom<BookBuilder> for Book {
    type Error = ValidationError;

    fn try_from(builder: BookBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// A page on a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InternetResourceBuilder")]
pub struct InternetResource {
    article: String,
    website: String,
    link: String,
    access_date: String,
}

impl InternetResource {
    pub fn builder() -> InternetResourceBuilder {
        InternetResourceBuilder::default()
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Date the resource was accessed, kept as written (e.g. `01.01.2021`).
    pub fn access_date(&self) -> &str {
        &self.access_date
    }
}

/// Unvalidated fields of an [`InternetResource`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InternetResourceBuilder {
    article: Option<String>,
    website: Option<String>,
    link: Option<String>,
    access_date: Option<String>,
}

impl InternetResourceBuilder {
    builder_setters! {
        article: String,
        website: String,
        link: String,
        access_date: String,
    }

    pub fn build(self) -> Result<InternetResource, ValidationError> {
        const KIND: RecordKind = RecordKind::InternetResource;
        Ok(InternetResource {
            article: required(KIND, "article", self.article)?,
            website: required(KIND, "website", self.website)?,
            link: required(KIND, "link", self.link)?,
            access_date: required(KIND, "access_date", self.access_date)?,
        })
    }
}

impl TryFrom<InternetResourceBuilder> for InternetResource {
    type Error = ValidationError;

    fn try_from(builder: InternetResourceBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// An article published in a collection of papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticlesCollectionBuilder")]
pub struct ArticlesCollection {
    authors: String,
    article_title: String,
    collection_title: String,
    city: String,
    publishing_house: String,
    year: u32,
    pages: String,
}

impl ArticlesCollection {
    pub fn builder() -> ArticlesCollectionBuilder {
        ArticlesCollectionBuilder::default()
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    pub fn collection_title(&self) -> &str {
        &self.collection_title
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publishing_house(&self) -> &str {
        &self.publishing_house
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Page range as free text, e.g. `25-30`.
    pub fn pages(&self) -> &str {
        &self.pages
    }
}

/// Unvalidated fields of an [`ArticlesCollection`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlesCollectionBuilder {
    authors: Option<String>,
    article_title: Option<String>,
    collection_title: Option<String>,
    city: Option<String>,
    publishing_house: Option<String>,
    year: Option<i64>,
    pages: Option<String>,
}

impl ArticlesCollectionBuilder {
    builder_setters! {
        authors: String,
        article_title: String,
        collection_title: String,
        city: String,
        publishing_house: String,
        year: i64,
        pages: String,
    }

    pub fn build(self) -> Result<ArticlesCollection, ValidationError> {
        const KIND: RecordKind = RecordKind::ArticlesCollection;
        Ok(ArticlesCollection {
            authors: required(KIND, "authors", self.authors)?,
            article_title: required(KIND, "article_title", self.article_title)?,
            collection_title: required(KIND, "collection_title", self.collection_title)?,
            city: required(KIND, "city", self.city)?,
            publishing_house: required(KIND, "publishing_house", self.publishing_house)?,
            year: positive(KIND, "year", self.year)?,
            pages: required(KIND, "pages", self.pages)?,
        })
    }
}

impl TryFrom<ArticlesCollectionBuilder> for ArticlesCollection {
    type Error = ValidationError;

    fn try_from(builder: ArticlesCollectionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// A dissertation or its abstract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DissertationBuilder")]
pub struct Dissertation {
    author: String,
    dissertation_title: String,
    degree: String,
    field: String,
    code: String,
    city: String,
    year: u32,
    pages: u32,
}

impl Dissertation {
    pub fn builder() -> DissertationBuilder {
        DissertationBuilder::default()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn dissertation_title(&self) -> &str {
        &self.dissertation_title
    }

    /// Academic degree, e.g. `канд.` or `д-р.`
    pub fn degree(&self) -> &str {
        &self.degree
    }

    /// Field of science, e.g. `экон.`
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Specialty code, e.g. `01.01.01`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

/// Unvalidated fields of a [`Dissertation`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DissertationBuilder {
    author: Option<String>,
    dissertation_title: Option<String>,
    degree: Option<String>,
    field: Option<String>,
    code: Option<String>,
    city: Option<String>,
    year: Option<i64>,
    pages: Option<i64>,
}

impl DissertationBuilder {
    builder_setters! {
        author: String,
        dissertation_title: String,
        degree: String,
        field: String,
        code: String,
        city: String,
        year: i64,
        pages: i64,
    }

    pub fn build(self) -> Result<Dissertation, ValidationError> {
        const KIND: RecordKind = RecordKind::Dissertation;
        Ok(Dissertation {
            author: required(KIND, "author", self.author)?,
            dissertation_title: required(KIND, "dissertation_title", self.dissertation_title)?,
            degree: required(KIND, "degree", self.degree)?,
            field: required(KIND, "field", self.field)?,
            code: required(KIND, "code", self.code)?,
            city: required(KIND, "city", self.city)?,
            year: positive(KIND, "year", self.year)?,
            pages: positive(KIND, "pages", self.pages)?,
        })
    }
}

impl TryFrom<DissertationBuilder> for Dissertation {
    type Error = ValidationError;

    fn try_from(builder: DissertationBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// An article from a journal issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JournalArticleBuilder")]
pub struct JournalArticle {
    authors: String,
    article_title: String,
    journal_name: String,
    city: String,
    year: u32,
    issue_number: u32,
    pages: String,
}

impl JournalArticle {
    pub fn builder() -> JournalArticleBuilder {
        JournalArticleBuilder::default()
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    pub fn journal_name(&self) -> &str {
        &self.journal_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Issue number within the year (`N` in the source data).
    pub fn issue_number(&self) -> u32 {
        self.issue_number
    }

    /// Page range as free text, e.g. `25-30`.
    pub fn pages(&self) -> &str {
        &self.pages
    }
}

/// Unvalidated fields of a [`JournalArticle`].
///
/// Accepts `article_name` and `N` as aliases of `article_title` and
/// `issue_number` when deserializing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalArticleBuilder {
    authors: Option<String>,
    #[serde(alias = "article_name")]
    article_title: Option<String>,
    journal_name: Option<String>,
    city: Option<String>,
    year: Option<i64>,
    #[serde(alias = "N")]
    issue_number: Option<i64>,
    pages: Option<String>,
}

impl JournalArticleBuilder {
    builder_setters! {
        authors: String,
        article_title: String,
        journal_name: String,
        city: String,
        year: i64,
        issue_number: i64,
        pages: String,
    }

    pub fn build(self) -> Result<JournalArticle, ValidationError> {
        const KIND: RecordKind = RecordKind::JournalArticle;
        Ok(JournalArticle {
            authors: required(KIND, "authors", self.authors)?,
            article_title: required(KIND, "article_title", self.article_title)?,
            journal_name: required(KIND, "journal_name", self.journal_name)?,
            city: required(KIND, "city", self.city)?,
            year: positive(KIND, "year", self.year)?,
            issue_number: positive(KIND, "issue_number", self.issue_number)?,
            pages: required(KIND, "pages", self.pages)?,
        })
    }
}

impl TryFrom<JournalArticleBuilder> for JournalArticle {
    type Error = ValidationError;

    fn try_from(builder: JournalArticleBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
