//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use sagelayout::prelude::*;
//! ```

// Schema types
pub use sagelayout_schema::{
    AttributeDef, ComplexTypeDef, ElementDef, ParseError, SchemaDoc, SimpleTypeDef, parse_schema,
};

// Generation types
pub use sagelayout_codegen::{
    CodegenError, CodegenOptions, FieldDescriptor, FieldOverrides, Generator, generate_from_file,
    generate_from_xml, generate_from_xml_with,
};
