//! Field descriptor extraction.
//!
//! Walks one record type's members (body members first, then attribute
//! members, sharing one running declaration counter) and produces the
//! ordered field descriptors the packer and emitter consume.

use crate::error::CodegenError;
use crate::types::{AlignmentHook, DATA_LIST, TypeMapHook, alignment_class, map_field_type};
use sagelayout_schema::ComplexTypeDef;
use std::collections::HashMap;

/// A single field of a record type, fully resolved.
///
/// Descriptors are created once per member and never mutated. At most
/// one of `is_optional` / `is_list` is true: a member declared both
/// unbounded and optional becomes a plain list, list-ness wins at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Final C++ type, wrappers applied.
    pub resolved_type: String,
    /// True for attribute members, false for body members.
    pub is_attribute: bool,
    /// True when declared optional and not marked pass-by-value.
    pub is_optional: bool,
    /// True when declared with unbounded cardinality.
    pub is_list: bool,
    /// Alignment class of the resolved type.
    pub alignment_class: u8,
    /// Position within the owning record type, body members first.
    pub order: u32,
}

/// Per-(record, member) table fully replacing automatic classification.
///
/// An override supplies a pre-built descriptor used verbatim; the
/// extractor's running counter still advances past the overridden slot.
#[derive(Debug, Clone, Default)]
pub struct FieldOverrides {
    entries: HashMap<(String, String), FieldDescriptor>,
}

impl FieldOverrides {
    /// Creates an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override for the named member of the named record.
    pub fn insert(
        &mut self,
        record: impl Into<String>,
        member: impl Into<String>,
        field: FieldDescriptor,
    ) {
        self.entries.insert((record.into(), member.into()), field);
    }

    /// Looks up an override.
    #[must_use]
    pub fn get(&self, record: &str, member: &str) -> Option<&FieldDescriptor> {
        self.entries
            .get(&(record.to_string(), member.to_string()))
    }

    /// Returns true if no overrides are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Caller-supplied extension points for one generation run.
#[derive(Default)]
pub struct CodegenOptions<'a> {
    /// Field type mapping hook, consulted before the builtin table.
    pub type_hook: Option<TypeMapHook<'a>>,
    /// Alignment class hook, consulted before the builtin table.
    pub alignment_hook: Option<AlignmentHook<'a>>,
    /// Per-member descriptor overrides.
    pub field_overrides: FieldOverrides,
}

/// Extracts the field descriptors of one record type in declaration
/// order, body members numbered before attribute members.
///
/// # Errors
/// Returns [`CodegenError::UnsupportedCardinality`] when a body member
/// declares a `maxOccurs` marker other than `"1"` or `"unbounded"`.
pub fn extract_fields(
    record: &ComplexTypeDef,
    options: &CodegenOptions<'_>,
) -> Result<Vec<FieldDescriptor>, CodegenError> {
    let mut fields = Vec::with_capacity(record.elements.len() + record.attributes.len());
    let mut order: u32 = 0;

    for element in &record.elements {
        if let Some(field) = options.field_overrides.get(&record.name, &element.name) {
            fields.push(field.clone());
            order += 1;
            continue;
        }

        let is_list = element.max_occurs.as_deref() == Some("unbounded");
        if let Some(max) = element.max_occurs.as_deref()
            && max != "1"
            && max != "unbounded"
        {
            return Err(CodegenError::unsupported_cardinality(
                &record.name,
                &element.type_name,
                &element.name,
            ));
        }
        let is_optional =
            !is_list && element.min_occurs.as_deref() == Some("0") && !element.pass_by_value;

        fields.push(build_field(
            &element.name,
            &element.type_name,
            false,
            is_optional,
            is_list,
            order,
            options,
        ));
        order += 1;
    }

    for attribute in &record.attributes {
        if let Some(field) = options.field_overrides.get(&record.name, &attribute.name) {
            fields.push(field.clone());
            order += 1;
            continue;
        }

        let is_optional =
            attribute.use_attr.as_deref() == Some("optional") && !attribute.pass_by_value;

        fields.push(build_field(
            &attribute.name,
            &attribute.type_name,
            true,
            is_optional,
            false,
            order,
            options,
        ));
        order += 1;
    }

    Ok(fields)
}

/// Resolves one member into a descriptor, applying the wrapper mapping
/// pass for lists and optionals.
fn build_field(
    name: &str,
    type_name: &str,
    is_attribute: bool,
    is_optional: bool,
    is_list: bool,
    order: u32,
    options: &CodegenOptions<'_>,
) -> FieldDescriptor {
    let mapped = map_field_type(type_name, options.type_hook);
    let resolved_type = if is_list {
        map_field_type(&format!("{DATA_LIST}<{mapped}>"), options.type_hook)
    } else if is_optional {
        map_field_type(&format!("{mapped}*"), options.type_hook)
    } else {
        mapped
    };
    let alignment_class = alignment_class(&resolved_type, options.alignment_hook);

    FieldDescriptor {
        name: name.to_string(),
        resolved_type,
        is_attribute,
        is_optional,
        is_list,
        alignment_class,
        order,
    }
}
