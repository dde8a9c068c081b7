//! XML reading: document tree and parser

pub mod model;
pub mod parser;

pub use model::{Attribute, Document, Element, Node};
pub use parser::{Config, Parser};
