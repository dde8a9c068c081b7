//! Tree-to-builder-code translation

use tracing::{debug, warn};

use crate::codegen::classify::{NodeKind, classify};
use crate::codegen::namespace::{NamespaceResolver, default_namespace};
use crate::xml::model::{Attribute, Element};

/// Written in place of a namespace URI when the prefix was never bound
pub const MISSING_URI: &str = "null";

/// Between the fragments of a `.with(...)` argument list
const SEPARATOR: &str = ", \n";

/// Walks a document tree and emits one builder call per node.
///
/// A translator owns the prefix bindings of a single document, so use a
/// fresh one per document.
#[derive(Debug, Default)]
pub struct Translator {
    resolver: NamespaceResolver,
    escape_literals: bool,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `\`, `"` and control whitespace inside emitted string literals
    pub fn with_escaping(mut self, escape_literals: bool) -> Self {
        self.escape_literals = escape_literals;
        self
    }

    pub fn resolver(&self) -> &NamespaceResolver {
        &self.resolver
    }

    /// Translate the root element into a `document(...)` expression.
    ///
    /// Whitespace-only text children are pruned from every visited element.
    pub fn translate(&mut self, root: &mut Element) -> String {
        let explicit = self.resolver.record_bindings_from(root);
        let uri_at_root = root
            .prefix()
            .and_then(|prefix| self.resolver.resolve(prefix, explicit))
            .map(str::to_string);

        // A root prefix unbound at this point is looked up again after the
        // walk, so a binding declared anywhere in the document applies to it.
        let mut tail = String::new();
        self.push_attributes(root, &mut tail);
        self.push_children(root, &mut tail);

        let default_ns = default_namespace(root).filter(|ns| !ns.trim().is_empty());
        let mut out = match (default_ns, root.prefix()) {
            (Some(uri), None) => format!(
                "document({}).withDefaultNamespace({})",
                self.literal(root.local_name()),
                self.literal(uri)
            ),
            (_, Some(prefix)) => format!(
                "document({},{})",
                self.literal(root.local_name()),
                self.namespace_call(prefix, uri_at_root.as_deref())
            ),
            (None, None) => format!("document({})", self.literal(root.local_name())),
        };
        out.push_str(&tail);
        out
    }

    fn element(&mut self, element: &mut Element) -> String {
        let explicit = self.resolver.record_bindings_from(element).map(str::to_string);

        let mut out = match element.prefix() {
            None => format!("element({})", self.literal(&element.name)),
            Some(prefix) => format!(
                "element({},{})",
                self.namespace_call(prefix, explicit.as_deref()),
                self.literal(element.local_name())
            ),
        };
        self.push_attributes(element, &mut out);
        self.push_children(element, &mut out);
        out
    }

    fn namespace_call(&self, prefix: &str, explicit: Option<&str>) -> String {
        let uri = self.resolver.resolve(prefix, explicit).unwrap_or_else(|| {
            warn!(prefix, "namespace prefix is not bound anywhere in the document");
            MISSING_URI
        });
        format!("namespace({},{})", self.literal(uri), self.literal(prefix))
    }

    fn push_attributes(&self, element: &Element, out: &mut String) {
        let fragments: Vec<String> = element
            .plain_attributes()
            .map(|attr| self.attribute(attr))
            .collect();
        push_block(out, &fragments);
    }

    fn push_children(&mut self, element: &mut Element, out: &mut String) {
        element.prune_whitespace();
        let fragments: Vec<String> = element
            .children
            .iter_mut()
            .filter_map(|child| match classify(child) {
                NodeKind::Element(child) => Some(self.element(child)),
                NodeKind::Text(text) => Some(format!("text({})", self.literal(text.trim()))),
                NodeKind::Attribute(attr) => Some(self.attribute(attr)),
                NodeKind::Other(kind) => {
                    debug!(kind, "skipping node that has no builder call");
                    None
                }
            })
            .collect();
        push_block(out, &fragments);
    }

    fn attribute(&self, attr: &Attribute) -> String {
        format!(
            "attribute({}, {})",
            self.literal(&attr.name),
            self.literal(&attr.value)
        )
    }

    fn literal(&self, value: &str) -> String {
        if self.escape_literals {
            format!("\"{}\"", escape_literal(value))
        } else {
            format!("\"{value}\"")
        }
    }
}

/// `.with(a, \nb)\n`, or nothing for an empty list
fn push_block(out: &mut String, fragments: &[String]) {
    if fragments.is_empty() {
        return;
    }
    out.push_str(".with(");
    out.push_str(&fragments.join(SEPARATOR));
    out.push_str(")\n");
}

fn escape_literal(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }
    result
}
