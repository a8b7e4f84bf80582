//! Kind catalog, type descriptors, and prebuilt scalar descriptors.

pub mod builtin_types;
pub mod descriptor;
pub mod kind;

pub use builtin_types::{builtin_descriptor, FLOAT64_DTYPE, UINT32_DTYPE, UINT64_DTYPE};
pub use descriptor::TypeDescriptor;
pub use kind::{
    size_of_type_id, type_id_to_name, type_name_to_id, KindId, TypeKind, EMPTY_ID, EMPTY_NAME,
    FLOAT64_ID, LIST_ID, NODE_ID, UINT32_ID, UINT64_ID,
};
