//! The registered-parser table: string-to-value parsing by target kind.
//!
//! Where a runtime with open reflection would hunt for a static
//! parse-from-string routine by convention, this registry makes the
//! contract explicit: each kind maps to a parse closure, and asking for a
//! kind with no entry is a caller-facing error rather than a silent miss.

use std::collections::HashMap;

use crate::error::{ReflectError, ReflectResult};
use crate::kind::TypeKind;
use crate::value::Value;

/// A parse routine for one target kind.
pub type ParseFn = Box<dyn Fn(&str) -> ReflectResult<Value> + Send + Sync>;

/// Registry mapping a target [`TypeKind`] to its parse routine.
///
/// # Example
///
/// ```rust
/// use prism_reflect::{ParserRegistry, TypeKind, Value};
///
/// let parsers = ParserRegistry::with_builtins();
/// assert_eq!(
///     parsers.parse(&TypeKind::I32, "123").unwrap(),
///     Value::Integer(123)
/// );
/// assert_eq!(
///     parsers.parse_nullable(&TypeKind::I32, Some("")).unwrap(),
///     Value::Null
/// );
/// ```
#[derive(Default)]
pub struct ParserRegistry {
    parsers: HashMap<TypeKind, ParseFn>,
}

impl ParserRegistry {
    /// Create an empty registry with no parsers at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with parsers for every scalar value
    /// kind plus `String`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(
            TypeKind::Bool,
            Box::new(|input| {
                let trimmed = input.trim();
                if trimmed.eq_ignore_ascii_case("true") {
                    Ok(Value::Bool(true))
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Ok(Value::Bool(false))
                } else {
                    Err(ReflectError::parse_failed(
                        TypeKind::Bool,
                        input,
                        "expected `true` or `false`",
                    ))
                }
            }),
        );

        for kind in [
            TypeKind::I8,
            TypeKind::I16,
            TypeKind::I32,
            TypeKind::I64,
            TypeKind::U8,
            TypeKind::U16,
            TypeKind::U32,
            TypeKind::U64,
        ] {
            registry.register(kind.clone(), integer_parser(kind));
        }

        registry.register(TypeKind::F32, float_parser(TypeKind::F32));
        registry.register(TypeKind::F64, float_parser(TypeKind::F64));

        registry.register(
            TypeKind::Decimal,
            Box::new(|input| {
                input
                    .trim()
                    .parse::<rust_decimal::Decimal>()
                    .map(Value::Decimal)
                    .map_err(|e| {
                        ReflectError::parse_failed(TypeKind::Decimal, input, e.to_string())
                    })
            }),
        );

        registry.register(
            TypeKind::String,
            Box::new(|input| Ok(Value::Text(input.to_owned()))),
        );

        registry
    }

    /// Register (or replace) the parser for a kind.
    pub fn register(&mut self, kind: TypeKind, parser: ParseFn) {
        self.parsers.insert(kind, parser);
    }

    /// Check whether a parser is registered for the kind.
    #[must_use]
    pub fn contains(&self, kind: &TypeKind) -> bool {
        self.parsers.contains_key(kind)
    }

    /// Number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns `true` if no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parse a string into a value of the target kind.
    ///
    /// # Errors
    ///
    /// [`ReflectError::ParserNotFound`] when no parser is registered for
    /// the kind (invalid usage, not a condition to retry), or
    /// [`ReflectError::ParseFailed`] when the registered parser rejects
    /// the input.
    pub fn parse(&self, kind: &TypeKind, input: &str) -> ReflectResult<Value> {
        let parser = self
            .parsers
            .get(kind)
            .ok_or_else(|| ReflectError::parser_not_found(kind.clone()))?;
        parser(input)
    }

    /// Nullable-aware parse: the target kind is nullable-wrapped first, and
    /// an absent or empty input yields the wrapped kind's default (`Null`).
    /// Any other input is parsed against the original, un-wrapped kind.
    pub fn parse_nullable(&self, kind: &TypeKind, input: Option<&str>) -> ReflectResult<Value> {
        let wrapped = kind.clone().nullable();
        match input {
            None => Ok(wrapped.default_value()),
            Some(s) if s.is_empty() => Ok(wrapped.default_value()),
            Some(s) => self.parse(kind, s),
        }
    }
}

fn integer_parser(kind: TypeKind) -> ParseFn {
    // Bounds in the i64 domain; U64 is capped at i64::MAX because Value
    // carries integers as i64.
    let (min, max) = kind
        .integer_bounds()
        .unwrap_or_else(|| unreachable!("integer_parser called with non-integer kind"));
    Box::new(move |input| {
        let parsed: i64 = input
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| {
                ReflectError::parse_failed(kind.clone(), input, e.to_string())
            })?;
        if parsed < min || parsed > max {
            return Err(ReflectError::parse_failed(
                kind.clone(),
                input,
                format!("value out of range for {kind}"),
            ));
        }
        Ok(Value::Integer(parsed))
    })
}

fn float_parser(kind: TypeKind) -> ParseFn {
    Box::new(move |input| {
        let parsed: f64 = input.trim().parse().map_err(|e: std::num::ParseFloatError| {
            ReflectError::parse_failed(kind.clone(), input, e.to_string())
        })?;
        // 32-bit targets round through f32, matching the declared width.
        let value = if kind == TypeKind::F32 {
            f64::from(parsed as f32)
        } else {
            parsed
        };
        Ok(Value::Float(value))
    })
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("count", &self.parsers.len())
            .field("kinds", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}
