//! Enum and flag-set declaration rendering.

use crate::enums::{EnumTables, FLAG_CHUNK_BITS, FlagSetDef};

/// Renders the synthesized enumerations and flag sets as C++.
pub struct EnumEmitter<'a> {
    tables: &'a EnumTables,
}

impl<'a> EnumEmitter<'a> {
    /// Creates a new emitter over the run's tables.
    #[must_use]
    pub fn new(tables: &'a EnumTables) -> Self {
        Self { tables }
    }

    /// Emits every enumeration declaration, one per table entry.
    #[must_use]
    pub fn emit_enums(&self) -> Vec<String> {
        self.tables
            .enums
            .iter()
            .map(|def| {
                let mut out = format!("enum {} {{\n", def.name);
                for (index, value) in def.values.iter().enumerate() {
                    out.push_str(&format!("  {}_{} = {},\n", def.name, value, index));
                }
                out.push_str("};");
                out
            })
            .collect()
    }

    /// Emits every flag-set declaration group, one per table entry.
    ///
    /// A set that fits 32 bits is a single enum of shifted masks; a
    /// wider set becomes an offsets enum, one mask enum per 32-bit
    /// chunk, and the composite holding one `uint` per chunk.
    #[must_use]
    pub fn emit_flag_sets(&self) -> Vec<String> {
        self.tables
            .flag_sets
            .iter()
            .flat_map(|def| {
                if def.is_chunked() {
                    emit_chunked_flag_set(def)
                } else {
                    vec![emit_small_flag_set(def)]
                }
            })
            .collect()
    }
}

fn emit_small_flag_set(def: &FlagSetDef) -> String {
    let mut out = format!("enum {} {{\n", def.name);
    for (index, value) in def.values.iter().enumerate() {
        out.push_str(&format!("  {}_{} = 1 << {},\n", def.name, value, index));
    }
    out.push_str("};");
    out
}

fn emit_chunked_flag_set(def: &FlagSetDef) -> Vec<String> {
    let mut decls = Vec::with_capacity(def.chunk_count() + 2);

    // Chunk-relative bit index of every value.
    let mut offsets = format!("enum {}BitOffsets {{\n", def.name);
    for (index, value) in def.values.iter().enumerate() {
        offsets.push_str(&format!(
            "  {}_{}_BitOffset = {},\n",
            def.name,
            value,
            index % FLAG_CHUNK_BITS
        ));
    }
    offsets.push_str("};");
    decls.push(offsets);

    for chunk in 0..def.chunk_count() {
        let mut masks = format!("enum {}Flags{} {{\n", def.name, chunk);
        let start = chunk * FLAG_CHUNK_BITS;
        for (index, value) in def.values.iter().enumerate().skip(start).take(FLAG_CHUNK_BITS) {
            masks.push_str(&format!(
                "  {}_{}_Flag = 1 << {},\n",
                def.name,
                value,
                index % FLAG_CHUNK_BITS
            ));
        }
        masks.push_str("};");
        decls.push(masks);
    }

    let mut composite = format!("struct {} {{\n", def.name);
    for chunk in 0..def.chunk_count() {
        composite.push_str(&format!("  uint Flags{chunk};\n"));
    }
    composite.push_str("};");
    decls.push(composite);

    decls
}
