//! Struct declaration rendering.

use crate::fields::FieldDescriptor;

/// Renders one record type as a C++ struct declaration.
///
/// Fields are written exactly in the order given; the packed order is
/// the layout contract and must not be re-sorted here.
#[must_use]
pub fn emit_struct(name: &str, base_type: Option<&str>, fields: &[FieldDescriptor]) -> String {
    let mut out = format!("struct {name}");
    if let Some(base) = base_type {
        out.push_str(&format!(" : {base}"));
    }
    out.push_str(" {\n");

    for field in fields {
        out.push_str(&format!("  {} {};\n", field.resolved_type, field.name));
    }

    out.push_str("};");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, resolved_type: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            resolved_type: resolved_type.to_string(),
            is_attribute: false,
            is_optional: false,
            is_list: false,
            alignment_class: 4,
            order: 0,
        }
    }

    #[test]
    fn test_struct_without_base() {
        let fields = vec![field("Speed", "float"), field("Alive", "bool")];
        let out = emit_struct("Unit", None, &fields);

        let expected = "struct Unit {\n\
                        \x20 float Speed;\n\
                        \x20 bool Alive;\n\
                        };";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_struct_with_base() {
        let out = emit_struct("Unit", Some("GameObject"), &[]);
        assert_eq!(out, "struct Unit : GameObject {\n};");
    }

    #[test]
    fn test_field_order_is_preserved_verbatim() {
        // Deliberately not in packed order; the emitter must not care.
        let fields = vec![field("B", "bool"), field("A", "float")];
        let out = emit_struct("T", None, &fields);
        let b_pos = out.find("bool B;").unwrap();
        let a_pos = out.find("float A;").unwrap();
        assert!(b_pos < a_pos);
    }
}
