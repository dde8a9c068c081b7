//! XML to builder source generation

use tracing::{debug, instrument};

use crate::codegen::{ClassName, EPILOGUE, Translator, prologue};
use crate::error::Result;
use crate::xml::{Config, Parser};

/// Generation options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub parser: Config,
    /// Escape string literals instead of embedding them verbatim
    pub escape_literals: bool,
}

impl GenerateOptions {
    pub const fn with_parser_config(mut self, parser: Config) -> Self {
        self.parser = parser;
        self
    }

    pub const fn with_escape_literals(mut self, escape_literals: bool) -> Self {
        self.escape_literals = escape_literals;
        self
    }
}

/// Generate the source of a class named `class_name` whose `build()` method
/// reconstructs `xml`
pub fn generate(xml: &str, class_name: &str) -> Result<String> {
    generate_with_options(xml, class_name, &GenerateOptions::default())
}

/// Generate with custom options
#[instrument(skip(xml, options), fields(input_len = xml.len()))]
pub fn generate_with_options(
    xml: &str,
    class_name: &str,
    options: &GenerateOptions,
) -> Result<String> {
    let class_name = ClassName::new(class_name)?;

    let mut parser = Parser::with_config(xml.as_bytes(), options.parser);
    let mut document = parser.parse()?;
    debug!(root = %document.root.name, "parsed document");

    let mut translator = Translator::new().with_escaping(options.escape_literals);
    let body = translator.translate(&mut document.root);
    debug!(
        bindings = translator.resolver().len(),
        body_len = body.len(),
        "translated document"
    );

    let mut src = prologue(class_name);
    src.push_str(&body);
    src.push_str(EPILOGUE);
    Ok(src)
}
