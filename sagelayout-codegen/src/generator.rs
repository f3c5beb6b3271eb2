//! Whole-document generation.
//!
//! The generator owns the per-run tables and drives the pipeline:
//! synthesize the enum and flag-set tables from every simple type, then
//! extract, pack and emit every record type in document order, noting
//! which auxiliary containers were used along the way. The final text is
//! the fixed-order concatenation of the non-empty sections.

use crate::cpp::{AuxUsage, EnumEmitter, emit_struct};
use crate::enums::collect_tables;
use crate::error::CodegenError;
use crate::fields::{CodegenOptions, extract_fields};
use crate::pack::pack_fields;
use sagelayout_schema::SchemaDoc;

/// C++ declaration generator for one schema document.
pub struct Generator<'a> {
    doc: &'a SchemaDoc,
    options: &'a CodegenOptions<'a>,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a parsed document.
    #[must_use]
    pub fn new(doc: &'a SchemaDoc, options: &'a CodegenOptions<'a>) -> Self {
        Self { doc, options }
    }

    /// Generates the complete declaration text.
    ///
    /// Output order: auxiliary container declarations, enumerations,
    /// flag sets, then one struct per record type in document order.
    /// Empty sections are omitted entirely.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnsupportedCardinality`] when any member
    /// of any record type declares an unsupported occurrence count; no
    /// partial output is produced.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let tables = collect_tables(self.doc);

        let mut usage = AuxUsage::default();
        let mut structs = Vec::with_capacity(self.doc.complex_types.len());
        for record in &self.doc.complex_types {
            let mut fields = extract_fields(record, self.options)?;
            pack_fields(&mut fields);
            for field in &fields {
                usage.note(&field.resolved_type);
            }
            structs.push(emit_struct(
                &record.name,
                record.base_type.as_deref(),
                &fields,
            ));
        }

        let emitter = EnumEmitter::new(&tables);
        let mut declarations: Vec<String> = Vec::new();
        declarations.extend(usage.emit().iter().map(|d| (*d).to_string()));
        declarations.extend(emitter.emit_enums());
        declarations.extend(emitter.emit_flag_sets());
        declarations.extend(structs);

        Ok(declarations.join("\n\n"))
    }
}
