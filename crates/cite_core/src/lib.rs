/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliographic record models.
//!
//! This crate defines the five record kinds the citation processor knows how
//! to format, the validation rules applied when they are built, and the
//! citation standards records can be rendered under.

pub mod error;
pub mod macros;
pub mod record;
pub mod standard;

pub use error::{UnknownNameError, ValidationError};
pub use record::{
    ArticlesCollection, Book, Dissertation, InternetResource, JournalArticle, Record, RecordKind,
};
pub use standard::CitationStandard;
