/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering rules, one per (record kind, citation standard) pair.

pub mod apa;
pub mod gost;

use crate::template::{Fields, Template, TemplateError};

/// Turns one record of type `R` into one citation string.
///
/// Implementors supply a static template and the named fields it refers
/// to; `render` fills the former from the latter.
pub trait CitationRule<R>: Sync {
    fn template(&self) -> &'static Template;

    fn fields<'a>(&self, record: &'a R) -> Fields<'a>;

    fn render(&self, record: &R) -> Result<String, TemplateError> {
        self.template().substitute(&self.fields(record))
    }
}
