//! Builder source generation

pub mod classify;
pub mod namespace;
pub mod template;
pub mod translate;

pub use classify::{NodeKind, classify};
pub use namespace::{NamespaceResolver, default_namespace};
pub use template::{ClassName, EPILOGUE, SOURCE_EXTENSION, prologue};
pub use translate::{MISSING_URI, Translator};
