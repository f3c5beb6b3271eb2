//! C++ declaration rendering modules.

pub mod containers;
pub mod enums;
pub mod structs;

pub use containers::AuxUsage;
pub use enums::EnumEmitter;
pub use structs::emit_struct;
