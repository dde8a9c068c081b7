//! XML parser implementation

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Pos, Result};
use crate::lexer::{Cursor, is_xml_whitespace};
use crate::xml::model::{Attribute, Document, Element, Node};

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes, also the cap on an expanded text or
    /// attribute value (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// Nesting limit for entities whose replacement text references other entities
const MAX_ENTITY_DEPTH: u8 = 16;

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    /// General entities declared in the DOCTYPE internal subset
    entities: IndexMap<String, String>,
}

impl<'a> Parser<'a> {
    /// Create a new XML parser with default configuration
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new XML parser with custom configuration
    pub fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            entities: IndexMap::new(),
        }
    }

    /// Parse an XML document
    pub fn parse(&mut self) -> Result<Document> {
        let size = self.cursor.remaining().len();
        if self.config.max_size > 0 && size > self.config.max_size {
            return Err(Error::at(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                self.cursor.position(),
            ));
        }

        self.skip_bom();
        self.skip_misc(true)?;
        if self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::MissingRoot));
        }

        let root = self.parse_element(1)?;

        self.skip_misc(false)?;
        if !self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::TrailingContent));
        }

        Ok(Document { root })
    }

    fn skip_bom(&mut self) {
        if self.cursor.starts_with(b"\xEF\xBB\xBF") {
            self.cursor.advance_by(3);
        }
    }

    /// Skip whitespace, comments and processing instructions around the root
    fn skip_misc(&mut self, allow_doctype: bool) -> Result<()> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with(b"<?") {
                self.parse_processing_instruction()?;
            } else if self.cursor.starts_with(b"<!--") {
                self.parse_comment()?;
            } else if allow_doctype && self.cursor.starts_with(b"<!DOCTYPE") {
                self.parse_doctype()?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_element(&mut self, depth: u16) -> Result<Element> {
        if self.config.max_depth > 0 && depth > self.config.max_depth {
            return Err(self.error_here(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            }));
        }

        self.expect_byte(b'<')?;
        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.consume(b'/') {
            self.expect_byte(b'>')?;
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        loop {
            if self.cursor.starts_with(b"</") {
                let close_pos = self.cursor.position();
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(Error::at(
                        ErrorKind::MismatchedTag {
                            expected: name,
                            found: close_name,
                        },
                        close_pos,
                    ));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.starts_with(b"<!--") {
                let comment = self.parse_comment()?;
                children.push(Node::Comment(comment));
            } else if self.cursor.starts_with(b"<![CDATA[") {
                let data = self.parse_cdata()?;
                children.push(Node::CData(data));
            } else if self.cursor.starts_with(b"<?") {
                let (target, data) = self.parse_processing_instruction()?;
                children.push(Node::ProcessingInstruction { target, data });
            } else if self.cursor.current() == Some(b'<') {
                let child = self.parse_element(depth.saturating_add(1))?;
                children.push(Node::Element(child));
            } else if self.cursor.is_eof() {
                return Err(self.error_here(ErrorKind::UnexpectedEof));
            } else {
                children.push(Node::Text(self.parse_text()?));
            }
        }

        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    fn parse_attributes(&mut self) -> Result<Vec<Attribute>> {
        let mut attrs: Vec<Attribute> = Vec::new();

        loop {
            let had_space = self.cursor.current().is_some_and(is_xml_whitespace);
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/' | b'>') => break,
                Some(_) if !had_space => return Err(self.error_here(ErrorKind::InvalidToken)),
                Some(_) => {}
                None => return Err(self.error_here(ErrorKind::UnexpectedEof)),
            }

            let name_pos = self.cursor.position();
            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.iter().any(|attr| attr.name == name) {
                return Err(Error::at(ErrorKind::DuplicateAttribute { name }, name_pos));
            }
            attrs.push(Attribute { name, value });
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(q @ (b'"' | b'\'')) => q,
            Some(_) => return Err(self.error_here(ErrorKind::InvalidToken)),
            None => return Err(self.error_here(ErrorKind::UnexpectedEof)),
        };
        self.cursor.advance();

        let start_pos = self.cursor.position();
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = normalize_line_endings(&bytes_to_string(raw, start_pos)?);
                // attribute-value normalization: literal whitespace becomes a space
                let text = text.replace(['\t', '\n'], " ");
                return self.decode(&text, start_pos);
            }
            if b == b'<' {
                return Err(self.error_here(ErrorKind::InvalidToken));
            }
            self.cursor.advance();
        }

        Err(self.error_here(ErrorKind::UnexpectedEof))
    }

    fn parse_text(&mut self) -> Result<String> {
        let start_pos = self.cursor.position();
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = normalize_line_endings(&bytes_to_string(raw, start_pos)?);
        self.decode(&text, start_pos)
    }

    /// Expand character and entity references, bounded by `max_size`
    fn decode(&self, input: &str, pos: Pos) -> Result<String> {
        let limit = match self.config.max_size {
            0 => usize::MAX,
            max => max,
        };
        expand_entities(input, pos, &self.entities, limit, 0)
    }

    fn parse_name(&mut self) -> Result<String> {
        let start_pos = self.cursor.position();
        let start = self.cursor.pos();

        match self.cursor.current() {
            Some(first) if is_name_start(first) => self.cursor.advance(),
            Some(_) => return Err(Error::at(ErrorKind::InvalidToken, start_pos)),
            None => return Err(Error::at(ErrorKind::UnexpectedEof, start_pos)),
        }

        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        bytes_to_string(self.cursor.slice_from(start), start_pos)
    }

    fn parse_comment(&mut self) -> Result<String> {
        self.cursor.advance_by(4);
        self.take_until(b"-->")
    }

    fn parse_cdata(&mut self) -> Result<String> {
        self.cursor.advance_by(9);
        self.take_until(b"]]>")
    }

    fn parse_processing_instruction(&mut self) -> Result<(String, String)> {
        self.cursor.advance_by(2);
        let target = self.parse_name()?;
        self.cursor.skip_whitespace();
        let data = self.take_until(b"?>")?;
        Ok((target, data))
    }

    fn parse_doctype(&mut self) -> Result<()> {
        self.cursor.advance_by(9);
        let mut quote: Option<u8> = None;
        while let Some(b) = self.cursor.current() {
            self.cursor.advance();
            match (quote, b) {
                (Some(q), _) if b == q => quote = None,
                (Some(_), _) => {}
                (None, b'"' | b'\'') => quote = Some(b),
                (None, b'[') => {
                    self.parse_internal_subset()?;
                    self.cursor.skip_whitespace();
                    return self.expect_byte(b'>');
                }
                (None, b'>') => return Ok(()),
                (None, _) => {}
            }
        }
        Err(self.error_here(ErrorKind::UnexpectedEof))
    }

    /// Read markup declarations up to and including the closing `]`
    fn parse_internal_subset(&mut self) -> Result<()> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.consume(b']') {
                return Ok(());
            }
            if self.cursor.starts_with(b"<!ENTITY") {
                self.parse_entity_declaration()?;
            } else if self.cursor.starts_with(b"<!--") {
                self.parse_comment()?;
            } else if self.cursor.starts_with(b"<?") {
                self.parse_processing_instruction()?;
            } else if self.cursor.starts_with(b"<!") {
                self.skip_declaration()?;
            } else if self.cursor.consume(b'%') {
                self.take_until(b";")?;
            } else if self.cursor.is_eof() {
                return Err(self.error_here(ErrorKind::UnexpectedEof));
            } else {
                return Err(self.error_here(ErrorKind::InvalidToken));
            }
        }
    }

    /// Record an internal general entity; the first declaration of a name wins
    fn parse_entity_declaration(&mut self) -> Result<()> {
        self.cursor.advance_by(8);
        self.cursor.skip_whitespace();
        if self.cursor.consume(b'%') {
            // parameter entity
            return self.skip_declaration();
        }

        let name = self.parse_name()?;
        self.cursor.skip_whitespace();
        match self.cursor.current() {
            Some(quote @ (b'"' | b'\'')) => {
                self.cursor.advance();
                let start_pos = self.cursor.position();
                let start = self.cursor.pos();
                while self.cursor.current().is_some_and(|b| b != quote) {
                    self.cursor.advance();
                }
                if self.cursor.is_eof() {
                    return Err(self.error_here(ErrorKind::UnexpectedEof));
                }
                let value = normalize_line_endings(&bytes_to_string(
                    self.cursor.slice_from(start),
                    start_pos,
                )?);
                self.cursor.advance();
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                self.entities.entry(name).or_insert(value);
                Ok(())
            }
            // external entities are never fetched
            _ => self.skip_declaration(),
        }
    }

    /// Consume up to and including the `>` that closes a markup declaration
    fn skip_declaration(&mut self) -> Result<()> {
        let mut quote: Option<u8> = None;
        while let Some(b) = self.cursor.current() {
            self.cursor.advance();
            match (quote, b) {
                (Some(q), _) if b == q => quote = None,
                (Some(_), _) => {}
                (None, b'"' | b'\'') => quote = Some(b),
                (None, b'>') => return Ok(()),
                (None, _) => {}
            }
        }
        Err(self.error_here(ErrorKind::UnexpectedEof))
    }

    /// Consume input up to and including `pattern`, returning what came before it
    fn take_until(&mut self, pattern: &[u8]) -> Result<String> {
        let start_pos = self.cursor.position();
        let start = self.cursor.pos();
        while !self.cursor.is_eof() {
            if self.cursor.peek_bytes(pattern.len()) == Some(pattern) {
                let body = bytes_to_string(self.cursor.slice_from(start), start_pos)?;
                let body = normalize_line_endings(&body);
                self.cursor.advance_by(pattern.len());
                return Ok(body);
            }
            self.cursor.advance();
        }
        Err(self.error_here(ErrorKind::UnexpectedEof))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else if self.cursor.is_eof() {
            Err(self.error_here(ErrorKind::UnexpectedEof))
        } else {
            Err(self.error_here(ErrorKind::InvalidToken))
        }
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.cursor.position())
    }
}

fn bytes_to_string(bytes: &[u8], pos: Pos) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(ToString::to_string)
        .map_err(|_| Error::at(ErrorKind::InvalidUtf8, pos))
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':') || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

/// `\r\n` and any lone `\r` become `\n`
fn normalize_line_endings(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

fn expand_entities(
    input: &str,
    pos: Pos,
    declared: &IndexMap<String, String>,
    limit: usize,
    depth: u8,
) -> Result<String> {
    if !input.contains('&') {
        return Ok(input.to_string());
    }

    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        let (before, after) = rest.split_at(amp);
        result.push_str(before);

        let after = after.get(1..).unwrap_or_default();
        let Some(semi) = after.find(';') else {
            return Err(invalid_entity(after, pos));
        };
        let (entity, tail) = after.split_at(semi);

        match predefined_entity(entity).or_else(|| decode_numeric_entity(entity)) {
            Some(ch) => result.push(ch),
            None => match declared.get(entity) {
                Some(value) if depth < MAX_ENTITY_DEPTH => {
                    let expanded = expand_entities(value, pos, declared, limit, depth + 1)?;
                    result.push_str(&expanded);
                }
                _ => return Err(invalid_entity(entity, pos)),
            },
        }
        if result.len() > limit {
            return Err(Error::at(ErrorKind::MaxSizeExceeded { max: limit }, pos));
        }

        rest = tail.get(1..).unwrap_or_default();
    }
    result.push_str(rest);

    Ok(result)
}

fn invalid_entity(entity: &str, pos: Pos) -> Error {
    Error::at(
        ErrorKind::InvalidEntity {
            entity: entity.to_string(),
        },
        pos,
    )
}

fn predefined_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    let code = if let Some(hex) = entity.strip_prefix("#x") {
        hex.bytes()
            .all(|b| b.is_ascii_hexdigit())
            .then(|| u32::from_str_radix(hex, 16).ok())
            .flatten()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| dec.parse::<u32>().ok())
            .flatten()
    } else {
        None
    };
    code.and_then(char::from_u32).filter(|ch| is_xml_char(*ch))
}

/// The `Char` production: no NUL, no other C0 controls besides tab, LF and CR
const fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensure_eq<T: PartialEq + std::fmt::Debug>(left: T, right: T) -> Result<()> {
        if left == right {
            Ok(())
        } else {
            Err(Error::with_message(
                ErrorKind::InvalidToken,
                crate::error::Span::empty(),
                format!("assertion failed: left={left:?} right={right:?}"),
            ))
        }
    }

    fn parse(input: &str) -> Result<Document> {
        Parser::new(input.as_bytes()).parse()
    }

    #[test]
    fn test_parse_simple_element() -> Result<()> {
        let doc = parse("<root></root>")?;
        ensure_eq(doc.root.name.as_str(), "root")?;
        ensure_eq(doc.root.children.len(), 0)?;
        Ok(())
    }

    #[test]
    fn test_parse_attributes_in_order() -> Result<()> {
        let doc = parse("<root z=\"1\" a='two' xmlns:p=\"urn:p\"/>")?;
        let names: Vec<&str> = doc.root.attributes.iter().map(|a| a.name.as_str()).collect();
        ensure_eq(names, vec!["z", "a", "xmlns:p"])?;
        ensure_eq(doc.root.attribute("a"), Some("two"))?;
        Ok(())
    }

    #[test]
    fn test_parse_keeps_whitespace_text() -> Result<()> {
        let doc = parse("<root>\n  <child/>\n</root>")?;
        ensure_eq(doc.root.children.len(), 3)?;
        ensure_eq(doc.root.children.first(), Some(&Node::Text("\n  ".to_string())))?;
        Ok(())
    }

    #[test]
    fn test_parse_nested_with_text() -> Result<()> {
        let doc = parse("<root><child>a &amp; b &#x41;&#66;</child></root>")?;
        let expected = Element::new("root").with_child(Element::new("child").with_text("a & b AB"));
        ensure_eq(doc.root, expected)
    }

    #[test]
    fn test_parse_prolog_and_misc_nodes() -> Result<()> {
        let input = "<?xml version=\"1.0\"?>\n<!DOCTYPE root [<!ELEMENT root ANY>]>\n\
                     <!-- before --><root><!-- c --><?pi data?><![CDATA[<raw>]]></root>\n<!-- after -->";
        let doc = parse(input)?;
        ensure_eq(
            doc.root.children,
            vec![
                Node::Comment(" c ".to_string()),
                Node::ProcessingInstruction {
                    target: "pi".to_string(),
                    data: "data".to_string(),
                },
                Node::CData("<raw>".to_string()),
            ],
        )
    }

    #[test]
    fn test_attribute_value_normalization() -> Result<()> {
        let doc = parse("<root a=\"x\ny&#10;z\"/>")?;
        ensure_eq(doc.root.attribute("a"), Some("x y\nz"))
    }

    #[test]
    fn test_line_endings_in_text() -> Result<()> {
        let doc = parse("<root>one\r\ntwo\rthree\n</root>")?;
        ensure_eq(
            doc.root.children,
            vec![Node::Text("one\ntwo\nthree\n".to_string())],
        )
    }

    #[test]
    fn test_line_endings_in_attribute_value() -> Result<()> {
        let doc = parse("<root a=\"p\r\nq\" b='x\ry' c=\"&#13;&#10;\"/>")?;
        ensure_eq(doc.root.attribute("a"), Some("p q"))?;
        ensure_eq(doc.root.attribute("b"), Some("x y"))?;
        ensure_eq(doc.root.attribute("c"), Some("\r\n"))
    }

    #[test]
    fn test_internal_subset_entities() -> Result<()> {
        let doc = parse(
            "<!DOCTYPE root [\r\n  <!ENTITY e \"x\">\n  <!ENTITY greeting 'hi &e;'>\n  \
             <!ENTITY e \"ignored\">\n]>\n<root a=\"&greeting;\">&e;!</root>",
        )?;
        ensure_eq(doc.root.attribute("a"), Some("hi x"))?;
        ensure_eq(doc.root.children, vec![Node::Text("x!".to_string())])
    }

    #[test]
    fn test_internal_subset_skips_other_declarations() -> Result<()> {
        let doc = parse(
            "<!DOCTYPE r SYSTEM \"r.dtd\" [<!ENTITY % p \"v\">%p;<!ENTITY ext SYSTEM \"ext.xml\">\
             <!ELEMENT r ANY><!ATTLIST r a CDATA \"x>y\"><!-- c --><?pi d?>]><r/>",
        )?;
        ensure_eq(doc.root.name.as_str(), "r")?;

        let err = parse("<!DOCTYPE r [<!ENTITY ext SYSTEM \"ext.xml\">]><r>&ext;</r>").err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::InvalidEntity { entity }) if entity == "ext"
        ));
        Ok(())
    }

    #[test]
    fn test_recursive_entity_is_rejected() {
        let err = parse("<!DOCTYPE r [<!ENTITY a \"&b;\"><!ENTITY b \"&a;\">]><r>&a;</r>").err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::InvalidEntity { .. })
        ));
    }

    #[test]
    fn test_entity_expansion_is_bounded() {
        let input = "<!DOCTYPE r [<!ENTITY a \"aaaaaaaaaa\">\
                     <!ENTITY b \"&a;&a;&a;&a;&a;&a;&a;&a;&a;&a;\">\
                     <!ENTITY c \"&b;&b;&b;&b;&b;&b;&b;&b;&b;&b;\">]><r>&c;</r>";
        let mut parser = Parser::with_config(input.as_bytes(), Config::new(0, 200));
        assert_eq!(
            parser.parse().err().map(|err| err.kind().clone()),
            Some(ErrorKind::MaxSizeExceeded { max: 200 })
        );
    }

    #[test]
    fn test_character_references_must_be_xml_chars() -> Result<()> {
        for bad in ["#0", "#x1", "#xD800", "#xFFFE", "#+65", "#x", "#"] {
            let err = parse(&format!("<a>&{bad};</a>")).err();
            assert!(
                matches!(
                    err.as_ref().map(Error::kind),
                    Some(ErrorKind::InvalidEntity { entity }) if entity == bad
                ),
                "&{bad}; should be rejected"
            );
        }

        let doc = parse("<a>&#9;&#x10000;</a>")?;
        ensure_eq(doc.root.children, vec![Node::Text("\t\u{10000}".to_string())])
    }

    #[test]
    fn test_mismatched_tag() {
        let err = parse("<a><b></a></b>").err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::MismatchedTag { expected, found }) if expected == "b" && found == "a"
        ));
    }

    #[test]
    fn test_duplicate_attribute() {
        let err = parse("<a x='1' x='2'/>").err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::DuplicateAttribute { name }) if name == "x"
        ));
    }

    #[test]
    fn test_invalid_entity() {
        let err = parse("<a>&nbsp;</a>").err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::InvalidEntity { entity }) if entity == "nbsp"
        ));
    }

    #[test]
    fn test_structural_errors() {
        let kind = |input: &str| parse(input).err().map(|err| err.kind().clone());
        assert_eq!(kind(""), Some(ErrorKind::MissingRoot));
        assert_eq!(kind("<!-- only -->"), Some(ErrorKind::MissingRoot));
        assert_eq!(kind("<a>"), Some(ErrorKind::UnexpectedEof));
        assert_eq!(kind("<a/><b/>"), Some(ErrorKind::TrailingContent));
        assert_eq!(kind("<a x='1'y='2'/>"), Some(ErrorKind::InvalidToken));
        assert_eq!(kind("<1a/>"), Some(ErrorKind::InvalidToken));
    }

    #[test]
    fn test_max_depth() {
        let mut parser = Parser::with_config(b"<a><b><c/></b></a>", Config::new(2, 0));
        assert_eq!(
            parser.parse().err().map(|err| err.kind().clone()),
            Some(ErrorKind::MaxDepthExceeded { max: 2 })
        );

        let mut parser = Parser::with_config(b"<a><b/></a>", Config::new(2, 0));
        assert!(parser.parse().is_ok());
    }

    #[test]
    fn test_max_size() {
        let mut parser = Parser::with_config(b"<root></root>", Config::new(0, 4));
        assert_eq!(
            parser.parse().err().map(|err| err.kind().clone()),
            Some(ErrorKind::MaxSizeExceeded { max: 4 })
        );
    }

    #[test]
    fn test_error_position() {
        let err = parse("<root>\n  <child>\n</root>").err();
        let span = err.map(|err| err.span());
        assert_eq!(span.map(|span| span.start.line), Some(3));
    }
}
