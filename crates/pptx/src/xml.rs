//! Small wrapper over the `quick-xml` event writer.
//!
//! Keeps the slide and part composers free of event plumbing and maps
//! `quick-xml` errors into our error type.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

pub(crate) fn xml_err(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

/// In-memory XML document writer.
pub(crate) struct Xml {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl Xml {
    /// Create a writer and emit the standard XML declaration.
    pub fn new() -> Result<Self> {
        let mut xml = Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        };
        xml.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(xml)
    }

    /// Open an element with the given attributes.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut el = BytesStart::new(name);
        for (key, value) in attrs {
            el.push_attribute((*key, *value));
        }
        self.writer.write_event(Event::Start(el)).map_err(xml_err)
    }

    /// Write a self-closing element with the given attributes.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut el = BytesStart::new(name);
        for (key, value) in attrs {
            el.push_attribute((*key, *value));
        }
        self.writer.write_event(Event::Empty(el)).map_err(xml_err)
    }

    /// Close an element.
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    /// Write `<name>text</name>` with the text content escaped.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name, &[])?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)?;
        self.end(name)
    }

    /// Consume the writer and return the serialized bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_content() {
        let mut xml = Xml::new().unwrap();
        xml.text_element("a:t", "Q&A <notes>").unwrap();
        let out = String::from_utf8(xml.into_bytes()).unwrap();
        assert!(out.contains("Q&amp;A &lt;notes&gt;"));
    }

    #[test]
    fn test_nested_elements() {
        let mut xml = Xml::new().unwrap();
        xml.start("p:sp", &[]).unwrap();
        xml.empty("a:off", &[("x", "0"), ("y", "0")]).unwrap();
        xml.end("p:sp").unwrap();
        let out = String::from_utf8(xml.into_bytes()).unwrap();
        assert!(out.contains("<p:sp><a:off x=\"0\" y=\"0\"/></p:sp>"));
    }
}
