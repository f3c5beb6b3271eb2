//! Schema document model.
//!
//! This module contains the data structures representing the parsed XSD
//! subset: simple types (enumerations and flag lists) and complex types
//! (record types with element and attribute members). All collections
//! preserve schema document order, which downstream generation relies on.

/// Complete parsed schema document.
#[derive(Debug, Clone, Default)]
pub struct SchemaDoc {
    /// Simple type declarations in document order.
    pub simple_types: Vec<SimpleTypeDef>,
    /// Complex (record) type declarations in document order.
    pub complex_types: Vec<ComplexTypeDef>,
}

impl SchemaDoc {
    /// Creates a new empty schema document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a simple type by name.
    #[must_use]
    pub fn get_simple_type(&self, name: &str) -> Option<&SimpleTypeDef> {
        self.simple_types.iter().find(|t| t.name == name)
    }

    /// Looks up a complex type by name.
    #[must_use]
    pub fn get_complex_type(&self, name: &str) -> Option<&ComplexTypeDef> {
        self.complex_types.iter().find(|t| t.name == name)
    }
}

/// Simple type declaration.
///
/// A simple type either carries enumeration literals (a restriction with
/// `enumeration` facets), declares itself as a list over an item type, or
/// is a plain alias the generator passes through untouched.
#[derive(Debug, Clone)]
pub struct SimpleTypeDef {
    /// Type name.
    pub name: String,
    /// Enumeration literals in declared order (empty when not an enumeration).
    pub enum_values: Vec<String>,
    /// Item type when declared as `<list itemType="..."/>`.
    pub list_item_type: Option<String>,
}

impl SimpleTypeDef {
    /// Creates a new simple type declaration.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            enum_values: Vec::new(),
            list_item_type: None,
        }
    }

    /// Returns true if this type declares at least one enumeration literal.
    #[must_use]
    pub fn is_enumeration(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

/// Complex (record) type declaration.
#[derive(Debug, Clone)]
pub struct ComplexTypeDef {
    /// Record type name.
    pub name: String,
    /// Base type name when declared via `<extension base="..."/>`.
    pub base_type: Option<String>,
    /// Body members (`element` children) in declared order.
    pub elements: Vec<ElementDef>,
    /// Attribute members (`attribute` children) in declared order.
    pub attributes: Vec<AttributeDef>,
}

impl ComplexTypeDef {
    /// Creates a new record type declaration.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            base_type: None,
            elements: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

/// Body member declaration.
#[derive(Debug, Clone)]
pub struct ElementDef {
    /// Member name.
    pub name: String,
    /// Referenced type name, as spelled in the schema.
    pub type_name: String,
    /// Raw `minOccurs` marker, if present.
    pub min_occurs: Option<String>,
    /// Raw `maxOccurs` marker, if present.
    pub max_occurs: Option<String>,
    /// Vendor pass-by-value marker.
    pub pass_by_value: bool,
}

/// Attribute member declaration.
#[derive(Debug, Clone)]
pub struct AttributeDef {
    /// Member name.
    pub name: String,
    /// Referenced type name, as spelled in the schema.
    pub type_name: String,
    /// Raw `use` marker ("optional" / "required"), if present.
    pub use_attr: Option<String>,
    /// Vendor pass-by-value marker.
    pub pass_by_value: bool,
}
