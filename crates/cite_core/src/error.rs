/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

use crate::record::RecordKind;

/// Raised when a record cannot be constructed from the supplied fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind}: required field `{field}` is missing")]
    MissingField {
        kind: RecordKind,
        field: &'static str,
    },

    #[error("{kind}: field `{field}` must be greater than zero, got {value}")]
    NotPositive {
        kind: RecordKind,
        field: &'static str,
        value: i64,
    },

    #[error("{kind}: field `{field}` is out of range: {value}")]
    OutOfRange {
        kind: RecordKind,
        field: &'static str,
        value: i64,
    },
}

impl ValidationError {
    /// The record kind that failed validation.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::MissingField { kind, .. }
            | Self::NotPositive { kind, .. }
            | Self::OutOfRange { kind, .. } => *kind,
        }
    }

    /// The offending field name.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::NotPositive { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// Returned by `FromStr` on string-backed enums for unrecognised names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {name:?}")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
}
