//! # SageLayout
//!
//! C++ layout declaration generator for SAGE XSD record schemas.
//!
//! SageLayout translates a declarative XML record schema into
//! memory-layout-oriented C++ type declarations, for build pipelines
//! that keep a binary serialization format in sync with a
//! schema-of-record.
//!
//! ## Quick Start
//!
//! ```
//! use sagelayout::prelude::*;
//!
//! let xml = r#"<schema>
//!     <complexType name="Point">
//!         <element name="X" type="SageReal"/>
//!         <element name="Y" type="SageReal"/>
//!     </complexType>
//! </schema>"#;
//!
//! let cpp = generate_from_xml(xml).unwrap();
//! assert!(cpp.contains("struct Point {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XSD subset parsing and the schema document model
//! - [`codegen`] - Type mapping, field packing, enum/flag synthesis and
//!   C++ emission

pub mod prelude;

/// Schema parsing and document model.
pub mod schema {
    pub use sagelayout_schema::*;
}

/// C++ declaration generation.
pub mod codegen {
    pub use sagelayout_codegen::*;
}

// Re-export commonly used items at the crate root
pub use sagelayout_codegen::{
    CodegenError, CodegenOptions, FieldDescriptor, FieldOverrides, Generator, generate_from_file,
    generate_from_xml, generate_from_xml_with,
};
pub use sagelayout_schema::{ParseError, SchemaDoc, parse_schema};
