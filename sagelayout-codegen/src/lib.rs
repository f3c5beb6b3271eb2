//! # SageLayout Codegen
//!
//! C++ layout declaration generation from XSD record schemas.
//!
//! This crate provides:
//! - Schema-to-C++ type mapping with caller override hooks
//! - Padding-minimizing field packing by alignment class
//! - Enumeration and chunked bit-flag synthesis
//! - Struct declaration emission with inheritance

pub mod cpp;
pub mod enums;
pub mod error;
pub mod fields;
pub mod generator;
pub mod pack;
pub mod types;

pub use error::CodegenError;
pub use fields::{CodegenOptions, FieldDescriptor, FieldOverrides};
pub use generator::Generator;
pub use types::{AlignmentHook, TypeMapHook};

/// Generates C++ declarations from an XSD schema string.
///
/// # Arguments
/// * `xml` - XSD schema content
///
/// # Returns
/// Generated C++ declaration text.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    generate_from_xml_with(xml, &CodegenOptions::default())
}

/// Generates C++ declarations from an XSD schema string with caller
/// extension points.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml_with(
    xml: &str,
    options: &CodegenOptions<'_>,
) -> Result<String, CodegenError> {
    let doc = sagelayout_schema::parse_schema(xml)?;
    Generator::new(&doc, options).generate()
}

/// Generates C++ declarations from an XSD schema file.
///
/// # Arguments
/// * `path` - Path to the XSD schema file
///
/// # Returns
/// Generated C++ declaration text.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generate_from_xml() {
        let xml = r#"<schema>
            <complexType name="Point">
                <element name="X" type="SageReal"/>
                <element name="Y" type="SageReal"/>
            </complexType>
        </schema>"#;

        let output = generate_from_xml(xml).expect("generation failed");
        assert!(output.contains("struct Point {"));
        assert!(output.contains("  float X;"));
    }

    #[test]
    fn test_generate_from_file() {
        let xml = r#"<schema>
            <complexType name="Point">
                <element name="X" type="SageReal"/>
            </complexType>
        </schema>"#;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(xml.as_bytes()).expect("write");

        let output = generate_from_file(file.path()).expect("generation failed");
        assert!(output.contains("struct Point {"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let err = generate_from_file(std::path::Path::new("/nonexistent/schema.xsd"));
        assert!(matches!(err, Err(CodegenError::Io(_))));
    }
}
