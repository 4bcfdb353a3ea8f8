/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! `$name` substitution templates.
//!
//! A template is literal text with named placeholders. `$name` and `${name}`
//! are replaced by the value of the field called `name`; `$$` is a literal
//! dollar sign. Names are ASCII identifiers, so `$N.` refers to the field `N`
//! followed by a full stop.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
    )
    .expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no value for placeholder `${field}` in template {template:?}")]
    MissingField { field: String, template: String },

    #[error("invalid placeholder at byte {offset} in template {template:?}")]
    InvalidPlaceholder { offset: usize, template: String },
}

/// The textual value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(u32),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(s: String) -> Self {
        FieldValue::Text(Cow::Owned(s))
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(n: u32) -> Self {
        FieldValue::Number(n)
    }
}

/// Named field values supplied to [`Template::substitute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields<'a>(Vec<(&'static str, FieldValue<'a>)>);

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A later value for the same name replaces the earlier one.
    pub fn with(mut self, name: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    /// Add an optional field. The absent projection is the empty string;
    /// empty values count as absent.
    pub fn with_optional(
        self,
        name: &'static str,
        value: Option<&'a str>,
        present: impl FnOnce(&'a str) -> String,
    ) -> Self {
        let projected = match value {
            Some(v) if !v.is_empty() => present(v),
            _ => String::new(),
        };
        self.with(name, projected)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue<'a>> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(n, _)| *n)
    }
}

/// A substitution template over a static string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub const fn new(source: &'static str) -> Self {
        Self(source)
    }

    /// Placeholder names in order of appearance. Escapes and malformed
    /// placeholders are skipped.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        PLACEHOLDER.captures_iter(self.0).filter_map(|caps| {
            caps.name("named")
                .or_else(|| caps.name("braced"))
                .map(|m| m.as_str())
        })
    }

    /// Fill every placeholder from `fields`. Fields the template does not
    /// mention are ignored.
    pub fn substitute(&self, fields: &Fields<'_>) -> Result<String, TemplateError> {
        let source = self.0;
        let mut output = String::with_capacity(source.len() * 2);
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            output.push_str(&source[last..whole.start()]);

            if caps.name("escaped").is_some() {
                output.push('$');
            } else if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                let value = fields
                    .get(name.as_str())
                    .ok_or_else(|| TemplateError::MissingField {
                        field: name.as_str().to_string(),
                        template: source.to_string(),
                    })?;
                match value {
                    FieldValue::Text(text) => output.push_str(text),
                    FieldValue::Number(number) => output.push_str(&number.to_string()),
                }
            } else {
                return Err(TemplateError::InvalidPlaceholder {
                    offset: whole.start(),
                    template: source.to_string(),
                });
            }
            last = whole.end();
        }
        output.push_str(&source[last..]);

        Ok(output)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
