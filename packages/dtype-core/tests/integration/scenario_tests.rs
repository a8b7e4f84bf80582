//! End-to-end descriptor scenarios through the public API.

use ntest::timeout;

use dtype_core::types::{
    builtin_descriptor, type_id_to_name, type_name_to_id, TypeDescriptor, TypeKind, EMPTY_ID,
    FLOAT64_DTYPE, LIST_ID, NODE_ID, UINT32_ID,
};
use dtype_core::{SchemaConfig, SchemaError};

/// Strided uint32 view: 10 elements, contiguous.
#[timeout(1000)]
#[test]
fn test_uint32_scenario() {
    let dtype = TypeDescriptor::from_name("uint32", 10, 0, 4, 4);
    assert_eq!(dtype.total_bytes(), 40);
    assert_eq!(dtype.element_index(3), 12);
    assert_eq!(
        dtype.schema(),
        r#"{"dtype":"uint32", "length":10, "offset":0, "stride":4, "element_bytes":4}"#
    );
}

#[timeout(1000)]
#[test]
fn test_bogus_name_scenario() {
    let dtype = TypeDescriptor::from_name("bogus", 1, 0, 0, 0);
    assert_eq!(dtype.id(), EMPTY_ID);
    assert_eq!(dtype.schema(), r#"{"dtype":"[empty]"}"#);
}

#[timeout(1000)]
#[test]
fn test_structural_schema_scenario() {
    for id in [NODE_ID, LIST_ID] {
        let bare = TypeDescriptor::from_id(id);
        let with_geometry = TypeDescriptor::new(id, 4, 16, 32, 8);
        assert_eq!(bare.schema(), r#"{"dtype":"[unknown]"}"#);
        assert_eq!(with_geometry.schema(), r#"{"dtype":"[unknown]"}"#);
    }
}

#[timeout(1000)]
#[test]
fn test_default_scenario() {
    let dtype = TypeDescriptor::default();
    assert_eq!(dtype.total_bytes(), 0);
    assert_eq!(dtype.element_index(5), 0);
}

/// Interleaved record layout: two views into one buffer of
/// `{ id: u32, pad: u32, value: f64 }` records.
#[timeout(1000)]
#[test]
fn test_interleaved_views_share_buffer() {
    let ids = TypeDescriptor::from_name("uint32", 3, 0, 16, 4);
    let values = TypeDescriptor::from_name("float64", 3, 8, 16, 8);

    let mut buffer = vec![0u8; 48];
    for i in 0..3u64 {
        let id_at = ids.element_index(i) as usize;
        let value_at = values.element_index(i) as usize;
        buffer[id_at..id_at + 4].copy_from_slice(&(i as u32 + 1).to_le_bytes());
        buffer[value_at..value_at + 8].copy_from_slice(&(i as f64 * 0.5).to_le_bytes());
    }

    let at = values.element_index(2) as usize;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&buffer[at..at + 8]);
    assert_eq!(f64::from_le_bytes(raw), 1.0);

    let at = ids.element_index(1) as usize;
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buffer[at..at + 4]);
    assert_eq!(u32::from_le_bytes(raw), 2);

    // Element bytes exclude the padding between records.
    assert_eq!(ids.total_bytes() + values.total_bytes(), 36);
}

#[timeout(1000)]
#[test]
fn test_reset_reuses_descriptor() {
    let mut dtype = FLOAT64_DTYPE;
    dtype.reset(UINT32_ID, 8, 4, 8, 4);
    assert_eq!(dtype.kind(), Some(TypeKind::Uint32));
    assert_eq!(dtype.element_indices().last(), Some(60));

    dtype.reset_id(NODE_ID);
    assert_eq!(dtype.total_bytes(), 0);

    dtype.reset_from(&FLOAT64_DTYPE);
    assert_eq!(dtype, FLOAT64_DTYPE);
    // The builtin constant is untouched.
    assert_eq!(FLOAT64_DTYPE.kind(), Some(TypeKind::Float64));
}

#[timeout(1000)]
#[test]
fn test_catalog_names() {
    let names = ["[empty]", "Node", "List", "uint32", "uint64", "float64"];
    for (id, name) in names.iter().enumerate() {
        assert_eq!(type_name_to_id(name), id as i64);
        assert_eq!(type_id_to_name(id as i64), *name);
    }
}

#[timeout(1000)]
#[test]
fn test_schema_text_round_trip_through_builtins() {
    for kind in TypeKind::ALL {
        if let Some(dtype) = builtin_descriptor(kind) {
            let parsed = TypeDescriptor::from_schema_with(&dtype.schema(), &SchemaConfig::strict())
                .unwrap();
            assert_eq!(parsed, dtype);
        }
    }
}

#[test]
fn test_strict_parse_rejects_unknown() -> anyhow::Result<()> {
    let lenient = TypeDescriptor::from_schema(r#"{"dtype":"[unknown]"}"#)?;
    assert!(lenient.is_empty());

    let strict = TypeDescriptor::from_schema_with(r#"{"dtype":"[unknown]"}"#, &SchemaConfig::strict());
    assert_eq!(
        strict,
        Err(SchemaError::UnknownDtype {
            name: "[unknown]".to_string()
        })
    );
    Ok(())
}
