//! Auxiliary container declarations.
//!
//! These declarations are emitted at the top of the output, each one
//! only when some field's resolved type actually referenced it.

use crate::types::{BINARY_STRING, DATA_LIST, STRING_HANDLE, STRING_LIST};

/// Declaration of the generic dynamic list container.
pub const DATA_LIST_DECL: &str = "template <typename T>\nstruct SageBinaryDataList {\n  uint Count;\n  T* Items;\n};";

/// Declaration of the length-prefixed string container.
pub const BINARY_STRING_DECL: &str =
    "struct SageBinaryString {\n  uint Length;\n  char* Data;\n};";

/// Declaration of the interned-string handle.
pub const STRING_HANDLE_DECL: &str = "struct SageStringHandle {\n  uint Index;\n};";

/// Declaration of the string list container.
pub const STRING_LIST_DECL: &str =
    "struct SageBinaryStringList {\n  uint Count;\n  SageBinaryString* Items;\n};";

/// Which auxiliary containers a generation run actually used.
///
/// The four flags are detected independently from each field's resolved
/// type text; the string-list spelling is matched first so it does not
/// also count as a plain list or plain string use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuxUsage {
    /// Some field used the dynamic list container.
    pub data_list: bool,
    /// Some field used the length-prefixed string.
    pub binary_string: bool,
    /// Some field used the interned-string handle.
    pub string_handle: bool,
    /// Some field used the string list container.
    pub string_list: bool,
}

impl AuxUsage {
    /// Records the auxiliary containers referenced by one resolved type.
    pub fn note(&mut self, resolved_type: &str) {
        let mut rest = resolved_type.to_string();
        if rest.contains(STRING_LIST) {
            self.string_list = true;
            rest = rest.replace(STRING_LIST, "");
        }
        if rest.contains(&format!("{DATA_LIST}<")) {
            self.data_list = true;
        }
        if rest.contains(STRING_HANDLE) {
            self.string_handle = true;
        }
        if rest.contains(BINARY_STRING) {
            self.binary_string = true;
        }
    }

    /// Emits the used container declarations in fixed order.
    ///
    /// The string list stores `SageBinaryString` items, so its use also
    /// pulls in the string declaration.
    #[must_use]
    pub fn emit(&self) -> Vec<&'static str> {
        let mut decls = Vec::new();
        if self.data_list {
            decls.push(DATA_LIST_DECL);
        }
        if self.binary_string || self.string_list {
            decls.push(BINARY_STRING_DECL);
        }
        if self.string_handle {
            decls.push(STRING_HANDLE_DECL);
        }
        if self.string_list {
            decls.push(STRING_LIST_DECL);
        }
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_used_emits_nothing() {
        let usage = AuxUsage::default();
        assert!(usage.emit().is_empty());
    }

    #[test]
    fn test_note_plain_list() {
        let mut usage = AuxUsage::default();
        usage.note("SageBinaryDataList<WeaponTemplate>");
        assert!(usage.data_list);
        assert!(!usage.binary_string);
        assert!(!usage.string_list);
    }

    #[test]
    fn test_note_string_list_does_not_count_as_plain() {
        let mut usage = AuxUsage::default();
        usage.note("SageBinaryStringList");
        assert!(usage.string_list);
        assert!(!usage.data_list);
        assert!(!usage.binary_string);
        // Emission still declares the item type it stores.
        let decls = usage.emit();
        assert_eq!(decls, vec![BINARY_STRING_DECL, STRING_LIST_DECL]);
    }

    #[test]
    fn test_note_string_and_handle() {
        let mut usage = AuxUsage::default();
        usage.note("SageBinaryString*");
        usage.note("SageStringHandle");
        assert!(usage.binary_string);
        assert!(usage.string_handle);

        let decls = usage.emit();
        assert_eq!(decls, vec![BINARY_STRING_DECL, STRING_HANDLE_DECL]);
    }

    #[test]
    fn test_fixed_emission_order() {
        let usage = AuxUsage {
            data_list: true,
            binary_string: true,
            string_handle: true,
            string_list: true,
        };
        let decls = usage.emit();
        assert_eq!(
            decls,
            vec![
                DATA_LIST_DECL,
                BINARY_STRING_DECL,
                STRING_HANDLE_DECL,
                STRING_LIST_DECL
            ]
        );
    }
}
