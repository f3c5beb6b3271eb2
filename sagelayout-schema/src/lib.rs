//! # SageLayout Schema
//!
//! XSD record-schema parser and document model.
//!
//! This crate provides:
//! - Parsing of the restricted XSD subset used by SAGE record schemas
//! - Owned document model (simple types, record types, members)
//! - Document-order preservation for deterministic downstream generation

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::parse_schema;
pub use types::{AttributeDef, ComplexTypeDef, ElementDef, SchemaDoc, SimpleTypeDef};
