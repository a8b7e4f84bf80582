//! Prebuilt descriptors for the scalar kinds.
//!
//! Each describes a single element at offset 0 with its canonical width.

use super::descriptor::TypeDescriptor;
use super::kind::TypeKind;

/// Single `uint32` element.
pub const UINT32_DTYPE: TypeDescriptor = builtin(TypeKind::Uint32);

/// Single `uint64` element.
pub const UINT64_DTYPE: TypeDescriptor = builtin(TypeKind::Uint64);

/// Single `float64` element.
pub const FLOAT64_DTYPE: TypeDescriptor = builtin(TypeKind::Float64);

const fn builtin(kind: TypeKind) -> TypeDescriptor {
    TypeDescriptor::new(kind.id(), 1, 0, 0, kind.size())
}

/// Returns the prebuilt descriptor for a scalar kind.
///
/// # Example
/// ```
/// use dtype_core::types::{builtin_descriptor, TypeKind, UINT32_DTYPE};
/// assert_eq!(builtin_descriptor(TypeKind::Uint32), Some(UINT32_DTYPE));
/// assert_eq!(builtin_descriptor(TypeKind::Node), None);
/// ```
pub fn builtin_descriptor(kind: TypeKind) -> Option<TypeDescriptor> {
    match kind {
        TypeKind::Uint32 => Some(UINT32_DTYPE),
        TypeKind::Uint64 => Some(UINT64_DTYPE),
        TypeKind::Float64 => Some(FLOAT64_DTYPE),
        TypeKind::Empty | TypeKind::Node | TypeKind::List => None,
    }
}
