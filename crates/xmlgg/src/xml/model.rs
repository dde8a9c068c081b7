//! XML document tree

/// Name of the attribute that declares a namespace
pub const XMLNS: &str = "xmlns";

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub const fn new(root: Element) -> Self {
        Self { root }
    }
}

/// XML element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Qualified tag name as written, e.g. `xsl:for-each`
    pub name: String,
    /// Attributes in document order, namespace declarations included
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// XML attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// XML node
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Never produced by the parser, only by hand-built trees
    Attribute(Attribute),
    Comment(String),
    ProcessingInstruction { target: String, data: String },
    CData(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Prefix of the tag name, if it has one
    pub fn prefix(&self) -> Option<&str> {
        split_qname(&self.name).0
    }

    /// Tag name without its prefix
    pub fn local_name(&self) -> &str {
        split_qname(&self.name).1
    }

    /// Value of the attribute with exactly this name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Attributes that are not namespace declarations
    pub fn plain_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(|attr| !attr.is_namespace_declaration())
    }

    /// Remove direct text children that are empty once trimmed.
    ///
    /// Only this element's own child list is touched; calling it again is a
    /// no-op.
    pub fn prune_whitespace(&mut self) {
        self.children.retain(|child| match child {
            Node::Text(text) => !text.trim().is_empty(),
            _ => true,
        });
    }
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `xmlns` or `xmlns:<prefix>`
    pub fn is_namespace_declaration(&self) -> bool {
        self.name == XMLNS || self.declared_prefix().is_some()
    }

    /// The prefix bound by an `xmlns:<prefix>` attribute
    pub fn declared_prefix(&self) -> Option<&str> {
        self.name
            .strip_prefix(XMLNS)
            .and_then(|rest| rest.strip_prefix(':'))
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<Attribute> for Node {
    fn from(value: Attribute) -> Self {
        Self::Attribute(value)
    }
}

/// Split a qualified name at its first colon into `(prefix, local name)`
pub fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}
