use std::fmt;

use super::kind::{size_of_type_id, type_name_to_id, KindId, TypeKind, EMPTY_ID};

/// Describes how to read a region of an externally owned buffer as typed,
/// possibly strided data.
///
/// A descriptor never owns the bytes it describes. Element `i` starts at
/// byte [`element_index(i)`](Self::element_index) relative to the buffer base.
///
/// # Invariants
///
/// - Name lookups always succeed; unknown names become the empty kind.
/// - `element_bytes` is not checked against the kind when set through
///   [`TypeDescriptor::new`] or [`TypeDescriptor::reset`].
/// - Every query is total and never panics, whatever the field values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    id: KindId,
    num_elements: u64,
    offset: i64,
    stride: i64,
    element_bytes: u64,
}

impl TypeDescriptor {
    /// Creates a descriptor from a raw kind id and explicit geometry.
    ///
    /// # Arguments
    /// * `id` - Kind id, not validated against the catalog
    /// * `num_elements` - Number of logical elements
    /// * `offset` - Byte position of element 0
    /// * `stride` - Byte distance between consecutive elements
    /// * `element_bytes` - Byte width of one element
    pub const fn new(
        id: KindId,
        num_elements: u64,
        offset: i64,
        stride: i64,
        element_bytes: u64,
    ) -> Self {
        Self {
            id,
            num_elements,
            offset,
            stride,
            element_bytes,
        }
    }

    /// Creates a descriptor from a kind name and explicit geometry.
    ///
    /// Unresolved names silently produce an empty-kind descriptor that
    /// still carries the given geometry.
    pub fn from_name(
        dtype_name: &str,
        num_elements: u64,
        offset: i64,
        stride: i64,
        element_bytes: u64,
    ) -> Self {
        Self::new(
            type_name_to_id(dtype_name),
            num_elements,
            offset,
            stride,
            element_bytes,
        )
    }

    /// Creates a descriptor for a kind id with all geometry zeroed.
    pub const fn from_id(id: KindId) -> Self {
        Self::new(id, 0, 0, 0, 0)
    }

    /// Creates a contiguous descriptor of `num_elements` values of `kind`,
    /// starting at offset 0 with stride equal to the canonical width.
    pub const fn scalar(kind: TypeKind, num_elements: u64) -> Self {
        let width = kind.size();
        Self::new(kind.id(), num_elements, 0, width as i64, width)
    }

    /// Overwrites every field with the values of `other`.
    pub fn reset_from(&mut self, other: &TypeDescriptor) {
        *self = *other;
    }

    /// Switches to kind `id` and zeroes the geometry.
    pub fn reset_id(&mut self, id: KindId) {
        *self = Self::from_id(id);
    }

    /// Overwrites all five fields.
    pub fn reset(
        &mut self,
        id: KindId,
        num_elements: u64,
        offset: i64,
        stride: i64,
        element_bytes: u64,
    ) {
        *self = Self::new(id, num_elements, offset, stride, element_bytes);
    }

    /// Returns the raw kind id.
    pub const fn id(&self) -> KindId {
        self.id
    }

    /// Returns the catalog kind, or `None` for an unrecognized id.
    pub const fn kind(&self) -> Option<TypeKind> {
        TypeKind::from_id(self.id)
    }

    /// Returns the number of logical elements.
    pub const fn number_of_elements(&self) -> u64 {
        self.num_elements
    }

    /// Returns the byte position of element 0.
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Returns the byte distance between consecutive elements.
    pub const fn stride(&self) -> i64 {
        self.stride
    }

    /// Returns the byte width of one element.
    pub const fn element_bytes(&self) -> u64 {
        self.element_bytes
    }

    /// Returns `true` if this descriptor denotes the empty kind.
    pub const fn is_empty(&self) -> bool {
        self.id == EMPTY_ID
    }

    /// Returns `true` if this descriptor denotes a leaf numeric kind.
    pub const fn is_scalar(&self) -> bool {
        match self.kind() {
            Some(kind) => kind.is_scalar(),
            None => false,
        }
    }

    /// Returns the canonical element width of this descriptor's kind,
    /// regardless of the stored `element_bytes`.
    pub fn canonical_element_bytes(&self) -> u64 {
        size_of_type_id(self.id)
    }

    /// Returns the byte address of element `idx`: `offset + stride * idx`.
    ///
    /// `idx` is not checked against the element count. Arithmetic wraps on
    /// overflow.
    pub const fn element_index(&self, idx: u64) -> i64 {
        self.offset
            .wrapping_add(self.stride.wrapping_mul(idx as i64))
    }

    /// Returns the number of bytes covered by the elements themselves:
    /// `element_bytes * number_of_elements`.
    pub const fn total_bytes(&self) -> u64 {
        self.element_bytes.wrapping_mul(self.num_elements)
    }

    /// Iterates over the byte address of every element in order.
    pub fn element_indices(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.num_elements).map(move |idx| self.element_index(idx))
    }
}

impl From<TypeKind> for TypeDescriptor {
    fn from(kind: TypeKind) -> Self {
        Self::from_id(kind.id())
    }
}

/// Formats the descriptor as its schema text.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_schema(f)
    }
}
