//! Namespace prefix bookkeeping for the translator

use indexmap::IndexMap;

use crate::xml::model::{Element, XMLNS};

/// Prefix to URI bindings collected while walking a document.
///
/// Bindings are not scoped to the subtree that declared them: once a prefix
/// has been seen in an `xmlns:<prefix>` attribute it stays resolvable for the
/// rest of the walk, sibling subtrees included. A later declaration of the same
/// prefix overwrites the earlier one.
#[derive(Clone, Debug, Default)]
pub struct NamespaceResolver {
    bindings: IndexMap<String, String>,
}

impl NamespaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store every `xmlns:<prefix>` binding carried by `element`.
    ///
    /// Returns the value of the element's bare `xmlns` attribute, if any.
    pub fn record_bindings_from<'e>(&mut self, element: &'e Element) -> Option<&'e str> {
        for attr in &element.attributes {
            if let Some(prefix) = attr.declared_prefix().filter(|p| !p.is_empty()) {
                self.bindings.insert(prefix.to_string(), attr.value.clone());
            }
        }
        element.attribute(XMLNS)
    }

    /// URI for `prefix`: `explicit` when given, otherwise the recorded binding
    pub fn resolve<'a>(&'a self, prefix: &str, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or_else(|| self.binding(prefix))
    }

    pub fn binding(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Bindings in the order their prefixes were first seen
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The element's own bare `xmlns` value, unless it contains a colon.
///
/// Default namespaces are never inherited from ancestors.
pub fn default_namespace(element: &Element) -> Option<&str> {
    element
        .attribute(XMLNS)
        .filter(|value| !value.contains(':'))
}
