/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation standards known to the processor.

use serde::{Deserialize, Serialize};

crate::str_enum! {
    /// A named set of rendering rules.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum CitationStandard {
        /// GOST R 7.0.5-2008 bibliographic references.
        #[default]
        Gost = "gost",
        /// APA reference list entries.
        Apa = "apa",
    }
}

impl CitationStandard {
    /// Human-readable name of the standard.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Gost => "ГОСТ Р 7.0.5-2008",
            Self::Apa => "APA",
        }
    }
}
