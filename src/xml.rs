//! Owned XML element tree and its serialization.
//!
//! Mappers build a complete [`XmlElement`] tree before handing it to the
//! caller. Element and attribute names are prefix-qualified strings such as
//! `dc:title`; namespace declarations are plain `xmlns:*` attributes on the
//! root element. Attributes keep insertion order, so the same input always
//! serializes to the same bytes.
//!
//! # Examples
//!
//! ```ignore
//! use dnb_xmetadiss::xml::XmlElement;
//!
//! let root = XmlElement::new("dc:title")
//!     .with_attr("lang", "ger")
//!     .with_text("Titel");
//!
//! let xml = root.to_xml_string()?;
//! assert!(xml.contains(r#"<dc:title lang="ger">Titel</dc:title>"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{Cursor, Write};

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;

/// A single XML element with its attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// Prefix-qualified element name (e.g. `dc:creator`)
    pub name: String,
    /// Attributes in insertion order
    pub attributes: IndexMap<String, String>,
    /// Text content, if any
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the text content (builder style).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element (builder style).
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Set or replace an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get the text content.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All descendants (excluding `self`) with the given name, depth-first.
    #[must_use]
    pub fn descendants(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }

    /// First descendant with the given name, depth-first.
    #[must_use]
    pub fn descendant(&self, name: &str) -> Option<&XmlElement> {
        self.descendants(name).into_iter().next()
    }

    /// Serialize the tree to a compact XML string with an XML declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        self.write_document(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    /// Serialize the tree to an indented XML string with an XML declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_xml_string_pretty(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        self.write_document(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    /// Write the XML declaration followed by this element.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn write_document<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write(writer)
    }

    /// Write this element (without XML declaration) to a quick-xml writer.
    ///
    /// Use this to embed the tree into a larger document, such as an OAI-PMH
    /// `<metadata>` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

fn collect_descendants<'a>(element: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
    for child in &element.children {
        if child.name == name {
            found.push(child);
        }
        collect_descendants(child, name, found);
    }
}
