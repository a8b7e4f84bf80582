//! Properties that hold for arbitrary field combinations.

use proptest::prelude::*;

use dtype_core::types::{size_of_type_id, type_id_to_name, type_name_to_id, TypeDescriptor, EMPTY_ID};

fn descriptor() -> impl Strategy<Value = TypeDescriptor> {
    (
        -2i64..8,
        any::<u64>(),
        any::<i64>(),
        any::<i64>(),
        any::<u64>(),
    )
        .prop_map(|(id, count, offset, stride, bytes)| {
            TypeDescriptor::new(id, count, offset, stride, bytes)
        })
}

proptest! {
    #[test]
    fn element_index_is_affine(dtype in descriptor(), idx in 0u64..1 << 32) {
        let step = dtype.element_index(idx + 1).wrapping_sub(dtype.element_index(idx));
        prop_assert_eq!(step, dtype.stride());
    }

    #[test]
    fn total_bytes_is_product(dtype in descriptor()) {
        prop_assert_eq!(
            dtype.total_bytes(),
            dtype.element_bytes().wrapping_mul(dtype.number_of_elements())
        );
    }

    #[test]
    fn zero_count_or_width_has_no_bytes(id in -2i64..8, n in any::<u64>(), bytes in any::<u64>()) {
        prop_assert_eq!(TypeDescriptor::new(id, 0, 0, 0, bytes).total_bytes(), 0);
        prop_assert_eq!(TypeDescriptor::new(id, n, 0, 0, 0).total_bytes(), 0);
    }

    #[test]
    fn reset_from_copies_all_fields(mut target in descriptor(), source in descriptor()) {
        target.reset_from(&source);
        prop_assert_eq!(target.id(), source.id());
        prop_assert_eq!(target.number_of_elements(), source.number_of_elements());
        prop_assert_eq!(target.offset(), source.offset());
        prop_assert_eq!(target.stride(), source.stride());
        prop_assert_eq!(target.element_bytes(), source.element_bytes());
    }

    #[test]
    fn unknown_ids_degrade(id in any::<i64>().prop_filter("catalog id", |id| !(0..6).contains(id))) {
        prop_assert_eq!(type_id_to_name(id), "[empty]");
        prop_assert_eq!(size_of_type_id(id), 0);
        prop_assert_eq!(TypeDescriptor::from_id(id).schema(), r#"{"dtype":"[unknown]"}"#);
    }

    #[test]
    fn unknown_names_degrade(name in "[a-zA-Z0-9_]{0,12}") {
        let id = type_name_to_id(&name);
        let catalog = ["Node", "List", "uint32", "uint64", "float64"];
        if !catalog.contains(&name.as_str()) {
            prop_assert_eq!(id, EMPTY_ID);
        }
        prop_assert_eq!(type_name_to_id(type_id_to_name(id)), id);
    }

    #[test]
    fn scalar_schema_parses_back(kind_id in 3i64..6, dtype in descriptor()) {
        let mut scalar = dtype;
        scalar.reset(
            kind_id,
            dtype.number_of_elements(),
            dtype.offset(),
            dtype.stride(),
            dtype.element_bytes(),
        );
        prop_assert_eq!(TypeDescriptor::from_schema(&scalar.schema()), Ok(scalar));
    }
}
