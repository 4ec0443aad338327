use super::*;
use std::io::{Result, Write};

pub trait ToXml {
    fn write_xml(&self, w: impl Write) -> Result<()>;
}

// Text goes out verbatim, nothing is escaped.
impl ToXml for Entry<'_> {
    fn write_xml(&self, mut w: impl Write) -> Result<()> {
        match self {
            Entry::Comment(text) => {
                w.write_all(b"<!-- ")?;
                w.write_all(text)?;
                w.write_all(b" -->")?;
            }
            Entry::Item(value) => {
                w.write_all(b"<item>")?;
                w.write_all(value)?;
                w.write_all(b"</item>")?;
            }
            Entry::String { name, value } => {
                w.write_all(b"<string name=")?;
                w.write_all(name)?;
                w.write_all(b">")?;
                w.write_all(value)?;
                w.write_all(b"</string>")?;
            }
        }
        w.write_all(b"\n")
    }
}
