use std::fs;
use xmlgg::generate;

fn balanced(src: &str) -> bool {
    src.matches('(').count() == src.matches(')').count()
}

#[test]
fn test_valid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let valid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/valid");
    for entry in fs::read_dir(valid_dir)? {
        let entry = entry?;
        let path = entry.path();
        let content = fs::read_to_string(&path)?;
        let src = match generate(&content, "Fixture") {
            Ok(src) => src,
            Err(err) => {
                return Err(std::io::Error::other(format!(
                    "Failed to translate valid file {path:?}: {err}"
                ))
                .into());
            }
        };
        if !balanced(&src) || src.contains("text(\"\")") || !src.ends_with(".build();}\n}") {
            return Err(
                std::io::Error::other(format!("Malformed output for {path:?}:\n{src}")).into(),
            );
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let invalid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid");
    for entry in fs::read_dir(invalid_dir)? {
        let entry = entry?;
        let path = entry.path();
        let content = fs::read_to_string(&path)?;
        if generate(&content, "Fixture").is_ok() {
            return Err(std::io::Error::other(format!(
                "Should fail to translate invalid file: {path:?}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_stylesheet_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/valid/breakfast_menu.xsl"
    );
    let src = generate(&fs::read_to_string(path)?, "Menu")?;
    assert!(src.contains("return document(\"html\").with(attribute(\"xsl:version\", \"1.0\"))"));
    assert!(src.contains(
        "element(namespace(\"http://www.w3.org/1999/XSL/Transform\",\"xsl\"),\"for-each\")"
    ));
    assert!(src.contains("text(\"(calories per serving)\")"));
    assert!(src.contains("text(\"-\")"));
    assert!(!src.contains("XMLSpy"));
    Ok(())
}

#[test]
fn test_soap_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/valid/soap_envelope.xml"
    );
    let src = generate(&fs::read_to_string(path)?, "Envelope")?;
    assert!(src.contains(
        "return document(\"Envelope\",namespace(\"http://www.w3.org/2003/05/soap-envelope\",\"s\"))"
    ));
    assert!(src.contains("attribute(\"s:mustUnderstand\", \"true\")"));
    assert!(src.contains(
        "element(namespace(\"http://www.w3.org/2003/05/soap-envelope\",\"s\"),\"Body\")"
    ));
    Ok(())
}

#[test]
fn test_entity_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/valid/internal_entities.xml"
    );
    let src = generate(&fs::read_to_string(path)?, "Catalog")?;
    assert!(src.contains("document(\"catalog\").with(attribute(\"owner\", \"O'Reilly Media\"))"));
    assert!(src.contains("element(\"rights\").with(text(\"\u{a9} 2024 O'Reilly Media\"))"));
    assert!(!src.contains('\r'));
    Ok(())
}
