//! Enumeration and flag-set synthesis.
//!
//! Two passes over the simple type declarations, strictly in document
//! order. Pass one records every enumeration into the enum table; pass
//! two records every list-over-enumeration simple type into the flag-set
//! table, sharing the referenced enumeration's value list. A flag set
//! therefore requires its target enumeration to be declared earlier in
//! the document. Both tables are write-once per key and live only for
//! one generation run.

use sagelayout_schema::SchemaDoc;
use std::collections::HashSet;

/// Bit width of one flag-set chunk. No single target scalar holds more
/// than 32 independent flags.
pub const FLAG_CHUNK_BITS: usize = 32;

/// One synthesized enumeration.
#[derive(Debug, Clone)]
pub struct EnumDef {
    /// Enumeration type name.
    pub name: String,
    /// Literal value names in declared order.
    pub values: Vec<String>,
}

/// One synthesized flag-set type.
#[derive(Debug, Clone)]
pub struct FlagSetDef {
    /// Flag-set type name.
    pub name: String,
    /// Literal value names, shared with the referenced enumeration.
    pub values: Vec<String>,
}

impl FlagSetDef {
    /// Returns true when the set does not fit a single 32-bit scalar.
    #[must_use]
    pub fn is_chunked(&self) -> bool {
        self.values.len() >= FLAG_CHUNK_BITS
    }

    /// Number of 32-bit chunks needed to hold every flag.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.values.len().div_ceil(FLAG_CHUNK_BITS)
    }
}

/// Run-scoped enumeration and flag-set tables.
#[derive(Debug, Clone, Default)]
pub struct EnumTables {
    /// Enumerations in document order.
    pub enums: Vec<EnumDef>,
    /// Flag sets in document order.
    pub flag_sets: Vec<FlagSetDef>,
}

impl EnumTables {
    /// Looks up an enumeration by name.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }
}

/// Builds both tables from a schema document.
#[must_use]
pub fn collect_tables(doc: &SchemaDoc) -> EnumTables {
    let mut tables = EnumTables::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for simple in &doc.simple_types {
        if simple.is_enumeration() && seen.insert(&simple.name) {
            tables.enums.push(EnumDef {
                name: simple.name.clone(),
                values: simple.enum_values.clone(),
            });
        }
    }

    let mut seen_sets: HashSet<&str> = HashSet::new();
    for simple in &doc.simple_types {
        if let Some(item) = &simple.list_item_type
            && let Some(target) = tables.get_enum(item).cloned()
            && seen_sets.insert(&simple.name)
        {
            tables.flag_sets.push(FlagSetDef {
                name: simple.name.clone(),
                values: target.values,
            });
        }
    }

    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagelayout_schema::SimpleTypeDef;

    fn enum_type(name: &str, values: &[&str]) -> SimpleTypeDef {
        let mut st = SimpleTypeDef::new(name.to_string());
        st.enum_values = values.iter().map(|v| v.to_string()).collect();
        st
    }

    fn list_type(name: &str, item: &str) -> SimpleTypeDef {
        let mut st = SimpleTypeDef::new(name.to_string());
        st.list_item_type = Some(item.to_string());
        st
    }

    #[test]
    fn test_enum_and_flag_set_collection() {
        let mut doc = SchemaDoc::new();
        doc.simple_types
            .push(enum_type("Veterancy", &["REGULAR", "VETERAN", "ELITE"]));
        doc.simple_types
            .push(list_type("VeterancyFlags", "Veterancy"));

        let tables = collect_tables(&doc);
        assert_eq!(tables.enums.len(), 1);
        assert_eq!(tables.flag_sets.len(), 1);
        assert_eq!(tables.flag_sets[0].name, "VeterancyFlags");
        assert_eq!(
            tables.flag_sets[0].values,
            vec!["REGULAR", "VETERAN", "ELITE"]
        );
    }

    #[test]
    fn test_list_over_non_enum_is_ignored() {
        let mut doc = SchemaDoc::new();
        doc.simple_types.push(list_type("Names", "xs:string"));

        let tables = collect_tables(&doc);
        assert!(tables.flag_sets.is_empty());
    }

    #[test]
    fn test_tables_are_write_once_per_key() {
        let mut doc = SchemaDoc::new();
        doc.simple_types.push(enum_type("Kind", &["A", "B"]));
        doc.simple_types.push(enum_type("Kind", &["C"]));

        let tables = collect_tables(&doc);
        assert_eq!(tables.enums.len(), 1);
        assert_eq!(tables.enums[0].values, vec!["A", "B"]);
    }

    #[test]
    fn test_chunking_thresholds() {
        let small = FlagSetDef {
            name: "Small".to_string(),
            values: (0..31).map(|i| format!("V{i}")).collect(),
        };
        assert!(!small.is_chunked());
        assert_eq!(small.chunk_count(), 1);

        let exact = FlagSetDef {
            name: "Exact".to_string(),
            values: (0..32).map(|i| format!("V{i}")).collect(),
        };
        assert!(exact.is_chunked());
        assert_eq!(exact.chunk_count(), 1);

        let wide = FlagSetDef {
            name: "Wide".to_string(),
            values: (0..35).map(|i| format!("V{i}")).collect(),
        };
        assert!(wide.is_chunked());
        assert_eq!(wide.chunk_count(), 2);
    }
}
