//! BXML response building.
//!
//! The Catapult API drives calls with BXML: an XML document of call-control
//! verbs (`Hangup`, `Pause`, `SpeakSentence`, ...) wrapped in a fixed
//! `<xml><Response>...</Response></xml>` envelope. This module provides the
//! [`Element`] node type and the [`BxmlResponse`] envelope serializer.
//!
//! No validation of verb names or attribute legality is performed; this is a
//! structural wrapper over caller-constructed nodes.
//!
//! # Examples
//!
//! ```
//! use catapult::bxml::{BxmlResponse, Element};
//!
//! let response = BxmlResponse::new()
//!     .verb(Element::new("Pause").attribute("duration", "10"))
//!     .verb(Element::new("Hangup"));
//!
//! assert_eq!(
//!     response.to_string(),
//!     r#"<xml><Response><Pause duration="10"/><Hangup/></Response></xml>"#
//! );
//! ```

use std::fmt;

/// An XML element node: tag name, ordered attributes, ordered children.
///
/// Attributes serialize in the order they were supplied. Empty elements
/// serialize self-closing (`<Hangup/>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The tag name.
    pub tag: String,

    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,

    /// Child nodes in insertion order.
    pub children: Vec<Node>,
}

/// A child of an [`Element`]: either a nested element or text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
}

impl Element {
    /// Creates an element with the given tag name and no attributes or
    /// children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    fn write(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"", name)?;
            escape(f, value, true)?;
            write!(f, "\"")?;
        }
        if self.children.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write(f)?,
                Node::Text(text) => escape(f, text, false)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

/// The `<xml><Response>...</Response></xml>` envelope.
///
/// Wraps an ordered sequence of verb elements. Serialization emits no XML
/// declaration and no whitespace between elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BxmlResponse {
    verbs: Vec<Element>,
}

impl BxmlResponse {
    /// Creates an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a verb element.
    pub fn verb(mut self, verb: Element) -> Self {
        self.verbs.push(verb);
        self
    }

    /// Serializes the envelope to bytes.
    pub fn to_xml(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl From<Vec<Element>> for BxmlResponse {
    fn from(verbs: Vec<Element>) -> Self {
        Self { verbs }
    }
}

impl fmt::Display for BxmlResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<xml><Response>")?;
        for verb in &self.verbs {
            verb.write(f)?;
        }
        write!(f, "</Response></xml>")
    }
}

fn escape(f: &mut fmt::Formatter<'_>, value: &str, attribute: bool) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if attribute => f.write_str("&quot;")?,
            _ => fmt::Write::write_char(f, c)?,
        }
    }
    Ok(())
}
