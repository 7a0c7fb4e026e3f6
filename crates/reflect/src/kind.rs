//! Type kinds and the nullable-wrapper algebra.
//!
//! `TypeKind` is the closed universe of kinds the introspection helpers
//! reason about: the fixed scalar value kinds, the reference kinds, and the
//! `Optional` wrapper that gives a value kind an explicit absent state.
//!
//! Quick example:
//! ```rust
//! use prism_reflect::TypeKind;
//!
//! assert!(TypeKind::I32.is_numeric());
//! let wrapped = TypeKind::I32.nullable();
//! assert!(wrapped.is_nullable());
//! assert_eq!(wrapped.underlying(), Some(&TypeKind::I32));
//! // Reference kinds are already nullable; wrapping is a no-op.
//! assert_eq!(TypeKind::String.nullable(), TypeKind::String);
//! ```

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The kind of a type known to the introspection registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    String,
    Bytes,
    Array,
    Object,
    /// A value kind augmented with an explicit present/absent state.
    Optional(Box<TypeKind>),
}

impl TypeKind {
    /// The fixed set of numeric kinds.
    #[must_use]
    pub fn numeric_kinds() -> [Self; 11] {
        [
            Self::I8,
            Self::I16,
            Self::I32,
            Self::I64,
            Self::U8,
            Self::U16,
            Self::U32,
            Self::U64,
            Self::F32,
            Self::F64,
            Self::Decimal,
        ]
    }

    /// Check if this kind is numeric.
    ///
    /// True only for the fixed integer, floating-point and decimal kinds.
    /// `Optional` over a numeric kind is not itself numeric.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::F32
                | Self::F64
                | Self::Decimal
        )
    }

    /// Check if this kind is one of the integer kinds.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    /// Check if instances of this kind are accessed via a shared reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::String | Self::Bytes | Self::Array | Self::Object)
    }

    /// Check if instances of this kind are copied by value.
    ///
    /// `Optional` counts as a value kind (it wraps one).
    #[must_use]
    pub const fn is_value(&self) -> bool {
        !self.is_reference()
    }

    /// Nullable-wrap this kind.
    ///
    /// A value kind that is not already wrapped becomes `Optional(kind)`.
    /// Reference kinds are already nullable and already-wrapped kinds stay
    /// as they are, so the operation is idempotent.
    #[must_use]
    pub fn nullable(self) -> Self {
        if self.is_reference() || matches!(self, Self::Optional(_)) {
            self
        } else {
            Self::Optional(Box::new(self))
        }
    }

    /// The underlying kind of a nullable-wrapped value kind.
    ///
    /// Returns `None` for reference kinds and for value kinds that are not
    /// wrapped — there is no underlying type to report.
    #[must_use]
    pub fn underlying(&self) -> Option<&TypeKind> {
        match self {
            Self::Optional(inner) if inner.is_value() => Some(inner),
            _ => None,
        }
    }

    /// Check if this kind is the nullable wrapper over a value kind.
    ///
    /// Reference kinds allow null but are not *nullable-wrapped*; they
    /// return `false`, as does any bare value kind.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Optional(inner) if inner.is_value())
    }

    /// The default value for this kind.
    ///
    /// Numeric kinds default to zero and `Bool` to `false`. Reference kinds
    /// default to `Null`. An `Optional` defaults to its absent state
    /// (`Null`), not the inner kind's zero.
    #[must_use]
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I8
            | Self::I16
            | Self::I32
            | Self::I64
            | Self::U8
            | Self::U16
            | Self::U32
            | Self::U64 => Value::Integer(0),
            Self::F32 | Self::F64 => Value::Float(0.0),
            Self::Decimal => Value::Decimal(rust_decimal::Decimal::ZERO),
            Self::String | Self::Bytes | Self::Array | Self::Object | Self::Optional(_) => {
                Value::Null
            }
        }
    }

    /// Inclusive bounds for the integer kinds, in the `i64` domain.
    ///
    /// `U64` is capped at `i64::MAX`: larger values cannot be carried by
    /// [`Value::Integer`] and are treated as out of range.
    #[must_use]
    pub const fn integer_bounds(&self) -> Option<(i64, i64)> {
        match self {
            Self::I8 => Some((i8::MIN as i64, i8::MAX as i64)),
            Self::I16 => Some((i16::MIN as i64, i16::MAX as i64)),
            Self::I32 => Some((i32::MIN as i64, i32::MAX as i64)),
            Self::I64 => Some((i64::MIN, i64::MAX)),
            Self::U8 => Some((0, u8::MAX as i64)),
            Self::U16 => Some((0, u16::MAX as i64)),
            Self::U32 => Some((0, u32::MAX as i64)),
            Self::U64 => Some((0, i64::MAX)),
            _ => None,
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Decimal => f.write_str("decimal"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::Array => f.write_str("array"),
            Self::Object => f.write_str("object"),
            Self::Optional(inner) => write!(f, "optional<{inner}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_classification() {
        for kind in TypeKind::numeric_kinds() {
            assert!(kind.is_numeric(), "{kind} should be numeric");
        }

        assert!(!TypeKind::Bool.is_numeric());
        assert!(!TypeKind::String.is_numeric());
        assert!(!TypeKind::Object.is_numeric());
        // A nullable-wrapped numeric is not itself numeric.
        assert!(!TypeKind::I32.nullable().is_numeric());
    }

    #[test]
    fn value_vs_reference() {
        assert!(TypeKind::Bool.is_value());
        assert!(TypeKind::Decimal.is_value());
        assert!(TypeKind::I32.nullable().is_value());

        assert!(TypeKind::String.is_reference());
        assert!(TypeKind::Bytes.is_reference());
        assert!(TypeKind::Array.is_reference());
        assert!(TypeKind::Object.is_reference());
    }

    #[test]
    fn nullable_wraps_value_kinds() {
        let wrapped = TypeKind::I32.nullable();
        assert_eq!(wrapped, TypeKind::Optional(Box::new(TypeKind::I32)));
        assert!(wrapped.is_nullable());
    }

    #[test]
    fn nullable_is_idempotent() {
        let once = TypeKind::I32.nullable();
        let twice = once.clone().nullable();
        assert_eq!(once, twice);
    }

    #[test]
    fn nullable_leaves_reference_kinds_alone() {
        assert_eq!(TypeKind::String.nullable(), TypeKind::String);
        assert_eq!(TypeKind::Object.nullable(), TypeKind::Object);
    }

    #[test]
    fn underlying_round_trips() {
        for kind in TypeKind::numeric_kinds() {
            let wrapped = kind.clone().nullable();
            assert_eq!(wrapped.underlying(), Some(&kind));
        }
    }

    #[test]
    fn underlying_is_none_for_unwrapped() {
        assert_eq!(TypeKind::I32.underlying(), None);
        assert_eq!(TypeKind::String.underlying(), None);
        assert_eq!(TypeKind::Object.underlying(), None);
    }

    #[test]
    fn is_nullable_only_for_wrapped_value_kinds() {
        assert!(TypeKind::I32.nullable().is_nullable());
        assert!(TypeKind::Bool.nullable().is_nullable());

        assert!(!TypeKind::I32.is_nullable());
        // A reference kind allows null but is not nullable-wrapped.
        assert!(!TypeKind::String.is_nullable());
        assert!(!TypeKind::Object.is_nullable());
        // A hand-built wrapper over a reference kind does not count.
        assert!(!TypeKind::Optional(Box::new(TypeKind::String)).is_nullable());
    }

    #[test]
    fn default_values() {
        assert_eq!(TypeKind::Bool.default_value(), Value::Bool(false));
        assert_eq!(TypeKind::I32.default_value(), Value::Integer(0));
        assert_eq!(TypeKind::U64.default_value(), Value::Integer(0));
        assert_eq!(TypeKind::F64.default_value(), Value::Float(0.0));
        assert_eq!(
            TypeKind::Decimal.default_value(),
            Value::Decimal(rust_decimal::Decimal::ZERO)
        );

        assert_eq!(TypeKind::String.default_value(), Value::Null);
        assert_eq!(TypeKind::Array.default_value(), Value::Null);

        // The wrapped kind's default is its none-state, not the inner zero.
        assert_eq!(TypeKind::I32.nullable().default_value(), Value::Null);
    }

    #[test]
    fn integer_bounds_per_width() {
        assert_eq!(TypeKind::I8.integer_bounds(), Some((-128, 127)));
        assert_eq!(TypeKind::U8.integer_bounds(), Some((0, 255)));
        assert_eq!(TypeKind::U64.integer_bounds(), Some((0, i64::MAX)));
        assert_eq!(TypeKind::F64.integer_bounds(), None);
        assert_eq!(TypeKind::String.integer_bounds(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(TypeKind::I32.to_string(), "i32");
        assert_eq!(TypeKind::Decimal.to_string(), "decimal");
        assert_eq!(TypeKind::I32.nullable().to_string(), "optional<i32>");
    }

    #[test]
    fn serde_round_trip() {
        let kinds = vec![
            TypeKind::Bool,
            TypeKind::U16,
            TypeKind::Decimal,
            TypeKind::String,
            TypeKind::I64.nullable(),
        ];

        for kind in &kinds {
            let json = serde_json::to_string(kind).unwrap();
            let back: TypeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, back);
        }
    }
}
