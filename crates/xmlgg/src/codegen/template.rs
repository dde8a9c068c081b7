//! Fixed boilerplate around the translated builder expression

use crate::error::{Error, ErrorKind, Result, Span};

/// Extension of the generated source file
pub const SOURCE_EXTENSION: &str = "java";

const IMPORTS: &str = "import org.w3c.dom.Document;\n\
import org.w3c.dom.Element;\n\
import uk.co.mrmarkb.xmlbuild.*;\n\
import static uk.co.mrmarkb.xmlbuild.NamespaceUriPrefixMapping.namespace;\n\
import static uk.co.mrmarkb.xmlbuild.XmlBuilderFactory.*;\n\
import static uk.co.mrmarkb.xmlbuild.XmlRenderer.render;\n\n";

/// Closes the expression chain, the build method and the class
pub const EPILOGUE: &str = ".build();}\n}";

const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// A validated name for the generated class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassName<'a>(&'a str);

impl<'a> ClassName<'a> {
    /// Accepts identifiers made of letters, digits, `_` and `$` that do not
    /// start with a digit and are not reserved words
    pub fn new(name: &'a str) -> Result<Self> {
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
        let valid_rest = chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');

        if valid_start && valid_rest && !RESERVED_WORDS.contains(&name) {
            Ok(Self(name))
        } else {
            Err(Error::new(
                ErrorKind::InvalidClassName {
                    name: name.to_string(),
                },
                Span::empty(),
            ))
        }
    }

    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// `<ClassName>.java`
    pub fn file_name(&self) -> String {
        format!("{}.{SOURCE_EXTENSION}", self.0)
    }
}

/// Imports, class declaration and the opening of the build method
pub fn prologue(class_name: ClassName<'_>) -> String {
    format!(
        "{IMPORTS}public class {} {{\n\tpublic Document build() {{\nreturn ",
        class_name.as_str()
    )
}
