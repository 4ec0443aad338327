//! The XML resource fragment: bare `<string>`, `<item>` and comment lines
//! without a declaration or root element.

mod ser;
pub use ser::ToXml;

/// Text is kept as the raw bytes of the input line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Entry<'a> {
    /// Section heading, written as `<!-- text -->`.
    Comment(&'a [u8]),
    /// Unnamed array element.
    Item(&'a [u8]),
    String { name: &'a [u8], value: &'a [u8] },
}

impl Entry<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Comment(_) => "comment",
            Entry::Item(_) => "item",
            Entry::String { .. } => "string",
        }
    }
}
