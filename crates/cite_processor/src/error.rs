/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

use crate::template::TemplateError;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
