//! Kind catalog, name translation, and canonical element widths.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw numeric kind tag stored in a descriptor.
///
/// Values outside the catalog are representable; every lookup on them
/// degrades to a sentinel instead of failing.
pub type KindId = i64;

/// Kind id of [`TypeKind::Empty`].
pub const EMPTY_ID: KindId = 0;
/// Kind id of [`TypeKind::Node`].
pub const NODE_ID: KindId = 1;
/// Kind id of [`TypeKind::List`].
pub const LIST_ID: KindId = 2;
/// Kind id of [`TypeKind::Uint32`].
pub const UINT32_ID: KindId = 3;
/// Kind id of [`TypeKind::Uint64`].
pub const UINT64_ID: KindId = 4;
/// Kind id of [`TypeKind::Float64`].
pub const FLOAT64_ID: KindId = 5;

/// Name used for empty descriptors and for any unresolved id.
pub const EMPTY_NAME: &str = "[empty]";

/// Closed catalog of kinds a descriptor can denote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// No data
    #[default]
    Empty,
    /// Hierarchical container (structural, no scalar width)
    Node,
    /// Homogeneous ordered composite (structural, no scalar width)
    List,
    /// 32-bit unsigned integer
    Uint32,
    /// 64-bit unsigned integer
    Uint64,
    /// 64-bit floating point number
    Float64,
}

impl TypeKind {
    /// Every catalog kind, in id order.
    pub const ALL: [TypeKind; 6] = [
        TypeKind::Empty,
        TypeKind::Node,
        TypeKind::List,
        TypeKind::Uint32,
        TypeKind::Uint64,
        TypeKind::Float64,
    ];

    /// Returns the numeric id of this kind.
    pub const fn id(self) -> KindId {
        match self {
            TypeKind::Empty => EMPTY_ID,
            TypeKind::Node => NODE_ID,
            TypeKind::List => LIST_ID,
            TypeKind::Uint32 => UINT32_ID,
            TypeKind::Uint64 => UINT64_ID,
            TypeKind::Float64 => FLOAT64_ID,
        }
    }

    /// Looks up the catalog kind for a raw id.
    pub const fn from_id(id: KindId) -> Option<TypeKind> {
        match id {
            EMPTY_ID => Some(TypeKind::Empty),
            NODE_ID => Some(TypeKind::Node),
            LIST_ID => Some(TypeKind::List),
            UINT32_ID => Some(TypeKind::Uint32),
            UINT64_ID => Some(TypeKind::Uint64),
            FLOAT64_ID => Some(TypeKind::Float64),
            _ => None,
        }
    }

    /// Returns the external (schema) name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Empty => EMPTY_NAME,
            TypeKind::Node => "Node",
            TypeKind::List => "List",
            TypeKind::Uint32 => "uint32",
            TypeKind::Uint64 => "uint64",
            TypeKind::Float64 => "float64",
        }
    }

    /// Looks up a catalog kind by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<TypeKind> {
        TypeKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the canonical byte width of one element.
    ///
    /// Structural kinds carry no intrinsic width and report 0.
    pub const fn size(self) -> u64 {
        match self {
            TypeKind::Uint32 => std::mem::size_of::<u32>() as u64,
            TypeKind::Uint64 => std::mem::size_of::<u64>() as u64,
            TypeKind::Float64 => std::mem::size_of::<f64>() as u64,
            TypeKind::Empty | TypeKind::Node | TypeKind::List => 0,
        }
    }

    /// Returns `true` for leaf numeric kinds.
    pub const fn is_scalar(self) -> bool {
        matches!(self, TypeKind::Uint32 | TypeKind::Uint64 | TypeKind::Float64)
    }

    /// Returns `true` for composite kinds (`Node`, `List`).
    pub const fn is_structural(self) -> bool {
        matches!(self, TypeKind::Node | TypeKind::List)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsing never fails: unrecognized names resolve to [`TypeKind::Empty`].
impl FromStr for TypeKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeKind::from_id(type_name_to_id(s)).unwrap_or_default())
    }
}

/// Serialized as its catalog name.
impl Serialize for TypeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Deserialized from a name; unknown names become [`TypeKind::Empty`].
impl<'de> Deserialize<'de> for TypeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TypeKind::from_id(type_name_to_id(&name)).unwrap_or_default())
    }
}

impl From<TypeKind> for KindId {
    fn from(kind: TypeKind) -> Self {
        kind.id()
    }
}

/// Resolves a kind name to its id.
///
/// Matching is exact and case-sensitive. Anything outside the catalog
/// resolves to [`EMPTY_ID`].
pub fn type_name_to_id(name: &str) -> KindId {
    match TypeKind::from_name(name) {
        Some(kind) => kind.id(),
        None => {
            tracing::trace!("unrecognized dtype name {:?}, using {}", name, EMPTY_NAME);
            EMPTY_ID
        }
    }
}

/// Resolves a kind id to its name; unknown ids yield `"[empty]"`.
pub fn type_id_to_name(id: KindId) -> &'static str {
    match TypeKind::from_id(id) {
        Some(kind) => kind.name(),
        None => EMPTY_NAME,
    }
}

/// Returns the canonical element width for a kind id; unknown ids yield 0.
pub fn size_of_type_id(id: KindId) -> u64 {
    TypeKind::from_id(id).map_or(0, TypeKind::size)
}
