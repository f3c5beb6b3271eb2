//! Schema-to-C++ type mapping and alignment classification.
//!
//! Both functions consult an optional caller hook before their builtin
//! table; a hook returning `None` falls through to builtin behavior.
//! Unrecognized schema type names pass through unchanged, since they are
//! assumed to be other schema-local declarations resolved elsewhere.

/// Caller hook overriding the builtin field type table.
pub type TypeMapHook<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Caller hook overriding the builtin alignment class table.
pub type AlignmentHook<'a> = &'a dyn Fn(&str) -> Option<u8>;

/// C++ spelling of the dynamic list container, parameterized over its
/// item type by the caller.
pub const DATA_LIST: &str = "SageBinaryDataList";

/// C++ spelling of the length-prefixed string container.
pub const BINARY_STRING: &str = "SageBinaryString";

/// C++ spelling of the interned-string handle.
pub const STRING_HANDLE: &str = "SageStringHandle";

/// C++ spelling of the string list container.
pub const STRING_LIST: &str = "SageBinaryStringList";

/// Maps a schema type name to its C++ type.
///
/// The mapper is also applied to the synthesized wrapper spellings
/// (`SageBinaryDataList<T>`, `T*`) after wrapping, which is how a list
/// of strings collapses to [`STRING_LIST`] and how a hook can
/// special-case wrapped types.
#[must_use]
pub fn map_field_type(name: &str, hook: Option<TypeMapHook<'_>>) -> String {
    if let Some(hook) = hook
        && let Some(mapped) = hook(name)
    {
        return mapped;
    }
    match name {
        "SageReal" | "Percentage" | "Angle" | "Time" => "float".to_string(),
        "SageInt" => "int".to_string(),
        "SageUnsignedInt" => "uint".to_string(),
        "SageBool" | "xs:boolean" => "bool".to_string(),
        "xs:string" => BINARY_STRING.to_string(),
        "SageBinaryDataList<SageBinaryString>" => STRING_LIST.to_string(),
        _ => name.to_string(),
    }
}

/// Classifies a C++ type into its alignment class.
///
/// The class is an ordinal used only to order fields for padding
/// minimization, not a byte size. Pointers, composites, floats and
/// 32-bit integers all share the widest class.
#[must_use]
pub fn alignment_class(cpp_type: &str, hook: Option<AlignmentHook<'_>>) -> u8 {
    if let Some(hook) = hook
        && let Some(class) = hook(cpp_type)
    {
        return class;
    }
    match cpp_type {
        "short" | "ushort" => 2,
        "bool" => 1,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scalar_mapping() {
        assert_eq!(map_field_type("SageReal", None), "float");
        assert_eq!(map_field_type("Percentage", None), "float");
        assert_eq!(map_field_type("Angle", None), "float");
        assert_eq!(map_field_type("Time", None), "float");
        assert_eq!(map_field_type("SageInt", None), "int");
        assert_eq!(map_field_type("SageUnsignedInt", None), "uint");
        assert_eq!(map_field_type("SageBool", None), "bool");
        assert_eq!(map_field_type("xs:boolean", None), "bool");
        assert_eq!(map_field_type("xs:string", None), "SageBinaryString");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(map_field_type("WeaponTemplate", None), "WeaponTemplate");
        assert_eq!(map_field_type("Veterancy", None), "Veterancy");
    }

    #[test]
    fn test_string_list_collapse() {
        assert_eq!(
            map_field_type("SageBinaryDataList<SageBinaryString>", None),
            "SageBinaryStringList"
        );
    }

    #[test]
    fn test_hook_wins_over_builtin() {
        let hook = |name: &str| (name == "SageInt").then(|| "int64".to_string());
        assert_eq!(map_field_type("SageInt", Some(&hook)), "int64");
        assert_eq!(map_field_type("SageReal", Some(&hook)), "float");
    }

    #[test]
    fn test_alignment_classes() {
        assert_eq!(alignment_class("short", None), 2);
        assert_eq!(alignment_class("ushort", None), 2);
        assert_eq!(alignment_class("bool", None), 1);
        assert_eq!(alignment_class("float", None), 4);
        assert_eq!(alignment_class("int*", None), 4);
        assert_eq!(alignment_class("SageBinaryString", None), 4);
    }

    #[test]
    fn test_alignment_hook_wins() {
        let hook = |cpp: &str| (cpp == "bool").then_some(4u8);
        assert_eq!(alignment_class("bool", Some(&hook)), 4);
        assert_eq!(alignment_class("short", Some(&hook)), 2);
    }
}
