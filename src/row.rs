//! One line of a strings CSV: an internal name, a comma, and a quoted
//! translation.
//!
//! Rows are raw bytes. Translations in legacy encodings go through untouched.

use crate::fragment::Entry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("No comma in `{line}`")]
    MalformedRow { line: String },
    #[error("Couldn't dequote `{value}`")]
    MalformedValue { value: String },
}

// space, \t, \n, \v, \f, \r
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| !is_space(*b)).unwrap_or(s.len());
    let end = s.iter().rposition(|b| !is_space(*b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Strips surrounding ASCII whitespace and then one matching pair of double
/// quotes.
///
/// Blank input dequotes to the empty string. Anything else that is not
/// wrapped in `"` is a [`Error::MalformedValue`].
pub fn dequote(s: &[u8]) -> Result<&[u8], Error> {
    let s = trim(s);
    match s {
        [] => Ok(s),
        // a lone `"` is both the opening and the closing quote
        [b'"'] => Ok(&s[..0]),
        [b'"', inner @ .., b'"'] => Ok(inner),
        _ => Err(Error::MalformedValue {
            value: String::from_utf8_lossy(s).into_owned(),
        }),
    }
}

/// Like [`dequote`], but unquoted text is kept as-is.
fn dequote_lenient(s: &[u8]) -> &[u8] {
    dequote(s).unwrap_or_else(|_| trim(s))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Everything before the first comma, untouched.
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> Row<'a> {
    pub fn parse(line: &'a [u8]) -> Result<Self, Error> {
        let comma = line
            .iter()
            .position(|b| *b == b',')
            .ok_or_else(|| Error::MalformedRow {
                line: String::from_utf8_lossy(line).into_owned(),
            })?;

        Ok(Row {
            key: &line[..comma],
            value: dequote(&line[comma + 1..])?,
        })
    }

    pub fn to_entry(&self) -> Entry<'a> {
        if self.value.is_empty() {
            Entry::Comment(dequote_lenient(self.key))
        } else if self.key.is_empty() {
            Entry::Item(self.value)
        } else {
            Entry::String {
                name: self.key,
                value: self.value,
            }
        }
    }
}
