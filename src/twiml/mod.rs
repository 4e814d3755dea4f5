//! TwiML generation.
//!
//! Call-handling instructions are described in a constrained XML dialect
//! returned by the caller's own web endpoints. [`Element`] builds that
//! markup as a tree of tagged elements with attributes; the tag set is
//! deliberately open — any capitalized tag name can be requested, so the
//! builder keeps working as the platform grows new instruction verbs.
//!
//! Nesting uses borrow scopes: [`Element::child`] returns a mutable handle
//! onto the freshly appended child, valid until the borrow ends, after
//! which the parent can be used again.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::twiml::{Element, WOMAN};
//!
//! let mut response = Element::response();
//! response
//!     .child("Say")
//!     .body("Hello World")
//!     .attr("voice", WOMAN)
//!     .attr("loop", 3);
//!
//! assert_eq!(
//!     response.to_fragment(),
//!     r#"<Response><Say voice="woman" loop="3">Hello World</Say></Response>"#
//! );
//! ```

use std::fmt;

/// Male voice.
pub const MAN: &str = "man";
/// Female voice.
pub const WOMAN: &str = "woman";

/// US English.
pub const ENGLISH: &str = "en";
/// British English.
pub const BRITISH: &str = "en-gb";
/// Spanish.
pub const SPANISH: &str = "es";
/// French.
pub const FRENCH: &str = "fr";
/// German.
pub const GERMAN: &str = "de";

/// GET callback method.
pub const GET: &str = "GET";
/// POST callback method.
pub const POST: &str = "POST";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// An attribute value, stringified for the wire.
///
/// Booleans render as the literal words `"true"` / `"false"`; integers
/// render in decimal; strings pass through.
#[derive(Debug, Clone)]
pub struct AttrValue(String);

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self(if value { "true" } else { "false" }.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// One element of the instruction markup.
///
/// Attributes serialize in insertion order. A `sender` attribute renders on
/// the wire as `from` (the local name avoids the reserved word). Elements
/// with no body and no children serialize self-closing.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    body: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with the given tag. Any capitalized tag name the
    /// platform understands is valid.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            body: None,
            children: Vec::new(),
        }
    }

    /// Creates the `Response` document root.
    #[must_use]
    pub fn response() -> Self {
        Self::new("Response")
    }

    /// Sets an attribute. `sender` renders as `from` on the wire.
    pub fn attr(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        let name = if name == "sender" { "from" } else { name };
        self.attributes.push((name.to_string(), value.into().0));
        self
    }

    /// Sets the element's text body.
    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.body = Some(text.into());
        self
    }

    /// Appends a child with the given tag and returns a handle onto it.
    /// The handle is valid for the enclosing borrow scope; once it ends,
    /// the parent is usable again.
    pub fn child(&mut self, tag: impl Into<String>) -> &mut Self {
        self.children.push(Self::new(tag));
        let index = self.children.len() - 1;
        &mut self.children[index]
    }

    /// Appends an already-built subtree.
    pub fn push(&mut self, element: Self) -> &mut Self {
        self.children.push(element);
        self
    }

    /// Serializes the tree, prefixed with the XML declaration.
    #[must_use]
    pub fn to_xml(&self) -> String {
        format!("{XML_DECLARATION}{}", self.to_fragment())
    }

    /// Serializes the tree without the XML declaration.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.body.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(body) = &self.body {
            out.push_str(&escape_text(body));
        }
        for element in &self.children {
            element.write_into(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
