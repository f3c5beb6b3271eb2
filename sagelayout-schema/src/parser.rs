//! XSD record-schema parser.
//!
//! This module parses the restricted XSD subset used by SAGE record
//! schemas into the document model. Tag and attribute names are matched
//! on their local part, so `xs:element` and `element` are equivalent.
//! Unknown elements and attributes are skipped: well-formedness
//! validation is out of scope here.

use crate::error::ParseError;
use crate::types::{AttributeDef, ComplexTypeDef, ElementDef, SchemaDoc, SimpleTypeDef};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses a schema document from a string.
///
/// # Arguments
/// * `xml` - XSD schema content
///
/// # Returns
/// Parsed schema document or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or a type declaration
/// is missing its `name` attribute.
pub fn parse_schema(xml: &str) -> Result<SchemaDoc, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut doc = SchemaDoc::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match local(name) {
                    "simpleType" => {
                        let simple = parse_simple_type(&mut reader, e)?;
                        doc.simple_types.push(simple);
                    }
                    "complexType" => {
                        let complex = parse_complex_type(&mut reader, e)?;
                        doc.complex_types.push(complex);
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match local(name) {
                    "simpleType" => {
                        let name = required_attr(e, "simpleType", "name")?;
                        doc.simple_types.push(SimpleTypeDef::new(name));
                    }
                    "complexType" => {
                        let name = required_attr(e, "complexType", "name")?;
                        doc.complex_types.push(ComplexTypeDef::new(name));
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(doc)
}

/// Strips a namespace prefix from a tag or attribute name.
fn local(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

/// Reads a required attribute by local name.
fn required_attr(e: &BytesStart<'_>, element: &str, attribute: &str) -> Result<String, ParseError> {
    optional_attr(e, attribute)?.ok_or_else(|| ParseError::missing_attr(element, attribute))
}

/// Reads an optional attribute by local name.
fn optional_attr(e: &BytesStart<'_>, attribute: &str) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if local(key) == attribute {
            return Ok(Some(std::str::from_utf8(&attr.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Reads the vendor pass-by-value marker.
fn pass_by_value(e: &BytesStart<'_>) -> Result<bool, ParseError> {
    Ok(optional_attr(e, "passByValue")?.as_deref() == Some("true"))
}

/// Parses a simple type declaration, consuming its end tag.
fn parse_simple_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<SimpleTypeDef, ParseError> {
    let name = required_attr(e, "simpleType", "name")?;
    let mut simple = SimpleTypeDef::new(name);

    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?.to_string();
                parse_simple_child(e, local(&tag), &mut simple)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?.to_string();
                parse_simple_child(e, local(&tag), &mut simple)?;
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(simple)
}

/// Records one child node of a simple type declaration.
fn parse_simple_child(
    e: &BytesStart<'_>,
    tag: &str,
    simple: &mut SimpleTypeDef,
) -> Result<(), ParseError> {
    match tag {
        "enumeration" => {
            let value = required_attr(e, "enumeration", "value")?;
            simple.enum_values.push(value);
        }
        "list" => {
            simple.list_item_type = Some(required_attr(e, "list", "itemType")?);
        }
        _ => {}
    }
    Ok(())
}

/// Parses a complex (record) type declaration, consuming its end tag.
///
/// Members may sit at any nesting depth below the declaration
/// (`sequence`, `complexContent/extension`); intermediate wrappers are
/// skipped and only `extension`, `element` and `attribute` nodes are
/// recorded.
fn parse_complex_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<ComplexTypeDef, ParseError> {
    let name = required_attr(e, "complexType", "name")?;
    let mut complex = ComplexTypeDef::new(name);

    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?.to_string();
                parse_complex_child(e, local(&tag), &mut complex)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?.to_string();
                parse_complex_child(e, local(&tag), &mut complex)?;
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(complex)
}

/// Records one child node of a complex type declaration.
fn parse_complex_child(
    e: &BytesStart<'_>,
    tag: &str,
    complex: &mut ComplexTypeDef,
) -> Result<(), ParseError> {
    match tag {
        "extension" => {
            complex.base_type = Some(required_attr(e, "extension", "base")?);
        }
        "element" => {
            complex.elements.push(ElementDef {
                name: required_attr(e, "element", "name")?,
                type_name: required_attr(e, "element", "type")?,
                min_occurs: optional_attr(e, "minOccurs")?,
                max_occurs: optional_attr(e, "maxOccurs")?,
                pass_by_value: pass_by_value(e)?,
            });
        }
        "attribute" => {
            complex.attributes.push(AttributeDef {
                name: required_attr(e, "attribute", "name")?,
                type_name: required_attr(e, "attribute", "type")?,
                use_attr: optional_attr(e, "use")?,
                pass_by_value: pass_by_value(e)?,
            });
        }
        _ => {}
    }
    Ok(())
}
