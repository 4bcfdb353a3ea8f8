/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::PathBuf;

use cite_core::{
    ArticlesCollection, Book, Dissertation, InternetResource, JournalArticle, Record,
};

// --- Helper Functions for Test Data Construction ---

pub const AUTHORS: &str = "Иванов И.М., Петров С.Н.";
pub const TITLE: &str = "Наука как искусство";

pub fn make_book() -> Book {
    Book::builder()
        .authors(AUTHORS)
        .title(TITLE)
        .edition("3-е")
        .city("СПб.")
        .publishing_house("Просвещение")
        .year(2020)
        .pages(999)
        .build()
        .unwrap()
}

pub fn make_internet_resource() -> InternetResource {
    InternetResource::builder()
        .article(TITLE)
        .website("Ведомости")
        .link("https://www.vedomosti.ru")
        .access_date("01.01.2021")
        .build()
        .unwrap()
}

pub fn make_articles_collection() -> ArticlesCollection {
    ArticlesCollection::builder()
        .authors(AUTHORS)
        .article_title(TITLE)
        .collection_title("Сборник научных трудов")
        .city("СПб.")
        .publishing_house("АСТ")
        .year(2020)
        .pages("25-30")
        .build()
        .unwrap()
}

pub fn make_dissertation() -> Dissertation {
    Dissertation::builder()
        .author("Иванов И.М.")
        .dissertation_title(TITLE)
        .degree("д-р. / канд.")
        .field("экон.")
        .code("01.01.01")
        .city("СПб.")
        .year(2020)
        .pages(199)
        .build()
        .unwrap()
}

pub fn make_journal_article() -> JournalArticle {
    JournalArticle::builder()
        .authors(AUTHORS)
        .article_title(TITLE)
        .journal_name("Образование и наука")
        .city("М.")
        .year(2020)
        .issue_number(10)
        .pages("25-30")
        .build()
        .unwrap()
}

/// One record of every kind, in declaration order of `RecordKind`.
pub fn all_records() -> Vec<Record> {
    vec![
        make_book().into(),
        make_internet_resource().into(),
        make_articles_collection().into(),
        make_dissertation().into(),
        make_journal_article().into(),
    ]
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// --- Expected output ---

pub const GOST_BOOK: &str =
    "Иванов И.М., Петров С.Н. Наука как искусство. – 3-е изд. – СПб.: Просвещение, 2020. – 999 с.";
pub const GOST_INTERNET_RESOURCE: &str =
    "Наука как искусство // Ведомости URL: https://www.vedomosti.ru (дата обращения: 01.01.2021).";
pub const GOST_ARTICLES_COLLECTION: &str =
    "Иванов И.М., Петров С.Н. Наука как искусство // Сборник научных трудов. – СПб.: АСТ, 2020. – С. 25-30.";
pub const GOST_DISSERTATION: &str =
    "Иванов И.М. Наука как искусство: дис. ... д-р. / канд. экон. наук.: 01.01.01. - СПб., 2020. - с. 199";
pub const GOST_JOURNAL_ARTICLE: &str =
    "Наука как искусство / Иванов И.М., Петров С.Н. // Образование и наука. -  2020. - N 10. - С. 25-30";

pub const APA_BOOK: &str = "Иванов И.М., Петров С.Н. (2020). Наука как искусство. Просвещение";
pub const APA_JOURNAL_ARTICLE: &str =
    "Иванов И.М., Петров С.Н. (2020). Наука как искусство. Образование и наука, 10, 25-30";
