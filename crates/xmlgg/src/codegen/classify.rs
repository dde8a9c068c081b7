//! Node kind dispatch

use crate::xml::model::{Attribute, Element, Node};

/// What the translator does with a node
#[derive(Debug, PartialEq)]
pub enum NodeKind<'a> {
    Element(&'a mut Element),
    Text(&'a str),
    Attribute(&'a Attribute),
    /// Not emitted; carries a short description for diagnostics
    Other(&'static str),
}

pub fn classify(node: &mut Node) -> NodeKind<'_> {
    match node {
        Node::Element(element) => NodeKind::Element(element),
        Node::Text(text) => NodeKind::Text(text.as_str()),
        Node::Attribute(attr) => NodeKind::Attribute(&*attr),
        Node::Comment(_) => NodeKind::Other("comment"),
        Node::ProcessingInstruction { .. } => NodeKind::Other("processing instruction"),
        Node::CData(_) => NodeKind::Other("cdata section"),
    }
}
