//! Low-level input navigation

pub mod cursor;

pub use cursor::{Cursor, is_xml_whitespace};
