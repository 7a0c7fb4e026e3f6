//! Property tests for the nullable-wrapper algebra.

use proptest::prelude::*;

use prism_reflect::{TypeKind, Value};

fn value_kind() -> impl Strategy<Value = TypeKind> {
    prop_oneof![
        Just(TypeKind::Bool),
        Just(TypeKind::I8),
        Just(TypeKind::I16),
        Just(TypeKind::I32),
        Just(TypeKind::I64),
        Just(TypeKind::U8),
        Just(TypeKind::U16),
        Just(TypeKind::U32),
        Just(TypeKind::U64),
        Just(TypeKind::F32),
        Just(TypeKind::F64),
        Just(TypeKind::Decimal),
    ]
}

fn reference_kind() -> impl Strategy<Value = TypeKind> {
    prop_oneof![
        Just(TypeKind::String),
        Just(TypeKind::Bytes),
        Just(TypeKind::Array),
        Just(TypeKind::Object),
    ]
}

proptest! {
    #[test]
    fn wrapping_a_value_kind_is_nullable(kind in value_kind()) {
        let wrapped = kind.nullable();
        prop_assert!(wrapped.is_nullable());
    }

    #[test]
    fn nullable_is_idempotent(kind in prop_oneof![value_kind(), reference_kind()]) {
        let once = kind.nullable();
        let twice = once.clone().nullable();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn underlying_inverts_nullable(kind in value_kind()) {
        let wrapped = kind.clone().nullable();
        prop_assert_eq!(wrapped.underlying(), Some(&kind));
    }

    #[test]
    fn reference_kinds_never_wrap(kind in reference_kind()) {
        prop_assert_eq!(kind.clone().nullable(), kind.clone());
        prop_assert!(!kind.is_nullable());
        prop_assert_eq!(kind.underlying(), None);
    }

    #[test]
    fn bare_value_kinds_have_no_underlying(kind in value_kind()) {
        prop_assert_eq!(kind.underlying(), None);
    }

    #[test]
    fn wrapped_default_is_null(kind in value_kind()) {
        // The wrapper's default is its absent state, never the inner zero.
        prop_assert_eq!(kind.clone().nullable().default_value(), Value::Null);
        // While the bare value kind always has a concrete zero-ish default.
        prop_assert!(!kind.default_value().is_null());
    }

    #[test]
    fn numeric_never_survives_wrapping(kind in value_kind()) {
        prop_assert!(!kind.nullable().is_numeric());
    }
}
