/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! GOST R 7.0.5-2008 bibliographic references.

use cite_core::{
    ArticlesCollection, Book, CitationStandard, Dissertation, InternetResource, JournalArticle,
};

use crate::registry::StyleRegistry;
use crate::style::CitationRule;
use crate::template::{Fields, Template};

/// GOST supports every record kind.
pub static REGISTRY: StyleRegistry = StyleRegistry {
    standard: CitationStandard::Gost,
    book: Some(&GostBook),
    internet_resource: Some(&GostInternetResource),
    articles_collection: Some(&GostCollectionArticle),
    dissertation: Some(&GostDissertation),
    journal_article: Some(&GostJournalArticle),
};

pub struct GostBook;

static BOOK: Template =
    Template::new("$authors $title. – $edition$city: $publishing_house, $year. – $pages с.");

impl CitationRule<Book> for GostBook {
    fn template(&self) -> &'static Template {
        &BOOK
    }

    fn fields<'a>(&self, book: &'a Book) -> Fields<'a> {
        Fields::new()
            .with("authors", book.authors())
            .with("title", book.title())
            .with_optional("edition", book.edition(), |edition| {
                format!("{} изд. – ", edition)
            })
            .with("city", book.city())
            .with("publishing_house", book.publishing_house())
            .with("year", book.year())
            .with("pages", book.pages())
    }
}

pub struct GostInternetResource;

static INTERNET_RESOURCE: Template =
    Template::new("$article // $website URL: $link (дата обращения: $access_date).");

impl CitationRule<InternetResource> for GostInternetResource {
    fn template(&self) -> &'static Template {
        &INTERNET_RESOURCE
    }

    fn fields<'a>(&self, resource: &'a InternetResource) -> Fields<'a> {
        Fields::new()
            .with("article", resource.article())
            .with("website", resource.website())
            .with("link", resource.link())
            .with("access_date", resource.access_date())
    }
}

pub struct GostCollectionArticle;

static COLLECTION_ARTICLE: Template = Template::new(
    "$authors $article_title // $collection_title. – $city: $publishing_house, $year. – С. $pages.",
);

impl CitationRule<ArticlesCollection> for GostCollectionArticle {
    fn template(&self) -> &'static Template {
        &COLLECTION_ARTICLE
    }

    fn fields<'a>(&self, article: &'a ArticlesCollection) -> Fields<'a> {
        Fields::new()
            .with("authors", article.authors())
            .with("article_title", article.article_title())
            .with("collection_title", article.collection_title())
            .with("city", article.city())
            .with("publishing_house", article.publishing_house())
            .with("year", article.year())
            .with("pages", article.pages())
    }
}

pub struct GostDissertation;

static DISSERTATION: Template = Template::new(
    "$author $dissertation_title: дис. ... $degree $field наук.: $code. - $city, $year. - с. $pages",
);

impl CitationRule<Dissertation> for GostDissertation {
    fn template(&self) -> &'static Template {
        &DISSERTATION
    }

    fn fields<'a>(&self, dissertation: &'a Dissertation) -> Fields<'a> {
        Fields::new()
            .with("author", dissertation.author())
            .with("dissertation_title", dissertation.dissertation_title())
            .with("degree", dissertation.degree())
            .with("field", dissertation.field())
            .with("code", dissertation.code())
            .with("city", dissertation.city())
            .with("year", dissertation.year())
            .with("pages", dissertation.pages())
    }
}

pub struct GostJournalArticle;

// Two spaces before the year.
static JOURNAL_ARTICLE: Template =
    Template::new("$article_title / $authors // $journal_name. -  $year. - N $N. - С. $pages");

impl CitationRule<JournalArticle> for GostJournalArticle {
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
