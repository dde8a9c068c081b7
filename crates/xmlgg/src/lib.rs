//! xmlgg - turn an XML document into builder source code
//!
//! The generated class rebuilds the document through a fluent chain of
//! `document(...)`, `element(...)`, `attribute(...)` and `text(...)` calls.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), xmlgg::Error> {
//! let src = xmlgg::generate(r#"<root><child foo="bar"/></root>"#, "Menu")?;
//! assert!(src.contains("public class Menu {"));
//! assert!(src.contains(r#"document("root").with(element("child").with(attribute("foo", "bar"))"#));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod lexer;

pub mod xml;
pub use xml::{
    Attribute as XmlAttribute, Config, Document as XmlDocument, Element as XmlElement,
    Node as XmlNode, Parser as XmlParser,
};

pub mod codegen;
pub use codegen::{ClassName, NamespaceResolver, NodeKind, Translator, classify};

pub mod generate;
pub use generate::{GenerateOptions, generate, generate_with_options};

/// Parse XML from string
pub fn from_xml_str(s: &str) -> Result<XmlDocument> {
    from_xml_bytes(s.as_bytes())
}

/// Parse XML from bytes
pub fn from_xml_bytes(bytes: &[u8]) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(bytes);
    parser.parse()
}

/// Parse XML with custom configuration
pub fn from_xml_str_with_config(s: &str, config: Config) -> Result<XmlDocument> {
    let mut parser = XmlParser::with_config(s.as_bytes(), config);
    parser.parse()
}
