//! The v1 `extensions` field: `;`-separated `name` or `name=value` entries.

use std::fmt;

use crate::error::StampError;
use crate::types::Field;
use crate::validation::validate_field_string;

/// One extension subfield.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    pub name: String,
    pub value: Option<String>,
}

impl Extension {
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// Split an extensions field into subfields.
///
/// Empty segments are skipped. Each segment is split on its first `=`, so a
/// value may itself contain `=`.
pub fn parse_extensions(s: &str) -> Vec<Extension> {
    s.split(';')
        .filter(|seg| !seg.is_empty())
        .map(|seg| match seg.split_once('=') {
            Some((name, value)) => Extension::pair(name, value),
            None => Extension::flag(seg),
        })
        .collect()
}

/// Join subfields into an extensions field, checking the result is
/// representable in a stamp.
pub fn format_extensions(extensions: &[Extension]) -> Result<String, StampError> {
    let joined = extensions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";");
    validate_field_string(Field::Extensions, Some(&joined))?;
    Ok(joined)
}
