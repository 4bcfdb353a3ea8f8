/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation Processor
//!
//! Turns bibliographic records into reference list entries under a chosen
//! citation standard and returns them sorted by their text.
//!
//! Each standard is a static [`StyleRegistry`] holding one [`CitationRule`]
//! per supported record kind. A rule pairs a [`Template`] with the fields of
//! its record; the [`CitationFormatter`] renders every record it has a rule
//! for and sorts the results.
//!
//! # Example
//!
//! ```rust
//! use cite_core::{CitationStandard, JournalArticle, Record};
//! use cite_processor::format_citations;
//!
//! let records: Vec<Record> = vec![JournalArticle::builder()
//!     .authors("Иванов И.М., Петров С.Н.")
//!     .article_title("Наука как искусство")
//!     .journal_name("Образование и наука")
//!     .city("М.")
//!     .year(2020)
//!     .issue_number(10)
//!     .pages("25-30")
//!     .build()
//!     .unwrap()
//!     .into()];
//!
//! let citations = format_citations(CitationStandard::Gost, &records).unwrap();
//! assert_eq!(
//!     citations,
//!     ["Наука как искусство / Иванов И.М., Петров С.Н. // Образование и наука. -  2020. - N 10. - С. 25-30"]
//! );
//! ```

pub mod error;
pub mod formatter;
pub mod io;
pub mod registry;
pub mod style;
pub mod template;

pub use error::ProcessorError;
pub use formatter::{format_citations, CitationFormatter, FormattedCitation};
pub use registry::StyleRegistry;
pub use style::CitationRule;
pub use template::{FieldValue, Fields, Template, TemplateError};

// Re-export the record model for convenience
pub use cite_core::{CitationStandard, Record, RecordKind};
