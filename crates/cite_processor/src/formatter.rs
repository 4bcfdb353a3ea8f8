/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Formatting a whole reference list.

use std::fmt;

use cite_core::{CitationStandard, Record, RecordKind};
use tracing::{debug, info};

use crate::error::ProcessorError;
use crate::registry::StyleRegistry;

/// One record together with its rendered citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCitation<'a> {
    record: &'a Record,
    formatted: String,
}

impl<'a> FormattedCitation<'a> {
    pub fn record(&self) -> &'a Record {
        self.record
    }

    pub fn kind(&self) -> RecordKind {
        self.record.kind()
    }

    /// The citation exactly as the template produced it.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

/// Prints the citation with surrounding whitespace trimmed.
impl fmt::Display for FormattedCitation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formatted.trim())
    }
}

/// Renders a list of records under one citation standard.
///
/// Every record is rendered when the formatter is built; records whose kind
/// the standard does not support are dropped without error.
///
/// ```
/// use cite_core::{Book, CitationStandard, Record};
/// use cite_processor::CitationFormatter;
///
/// let records: Vec<Record> = vec![Book::builder()
///     .authors("Иванов И.М., Петров С.Н.")
///     .title("Наука как искусство")
///     .city("СПб.")
///     .publishing_house("Просвещение")
///     .year(2020)
///     .pages(999)
///     .build()
///     .unwrap()
///     .into()];
///
/// let citations = CitationFormatter::new(CitationStandard::Apa, &records)
///     .unwrap()
///     .format();
/// assert_eq!(
///     citations[0].to_string(),
///     "Иванов И.М., Петров С.Н. (2020). Наука как искусство. Просвещение"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CitationFormatter<'a> {
    standard: CitationStandard,
    items: Vec<FormattedCitation<'a>>,
}

impl<'a> CitationFormatter<'a> {
    pub fn new(standard: CitationStandard, records: &'a [Record]) -> Result<Self, ProcessorError> {
        let registry = StyleRegistry::for_standard(standard);
        let mut items = Vec::with_capacity(records.len());

        for record in records {
            match registry.render(record) {
                Some(rendered) => {
                    let formatted = rendered?;
                    debug!(
                        standard = %standard,
                        kind = %record.kind(),
                        title = record.title(),
                        "rendered record"
                    );
                    items.push(FormattedCitation { record, formatted });
                }
                None => {
                    debug!(
                        standard = %standard,
                        kind = %record.kind(),
                        title = record.title(),
                        "no rule for record kind, skipping"
                    );
                }
            }
        }

        Ok(Self { standard, items })
    }

    /// Number of records that will appear in the output.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The citations in ascending code point order of their text.
    /// Equal citations keep their input order.
    pub fn format(self) -> Vec<FormattedCitation<'a>> {
        info!(
            standard = %self.standard,
            count = self.items.len(),
            "formatting reference list"
        );
        let mut items = self.items;
        items.sort_by(|a, b| a.formatted.cmp(&b.formatted));
        items
    }
}

/// Format `records` under `standard` and return the sorted citation strings.
pub fn format_citations(
    standard: CitationStandard,
    records: &[Record],
) -> Result<Vec<String>, ProcessorError> {
    Ok(CitationFormatter::new(standard, records)?
        .format()
        .into_iter()
        .map(|citation| citation.to_string())
        .collect())
}
