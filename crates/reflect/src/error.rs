use crate::kind::TypeKind;

/// Result alias for introspection operations.
pub type ReflectResult<T> = Result<T, ReflectError>;

/// Error type for introspection operations.
///
/// Covers descriptor lookup, dynamic property reads, and string parsing.
/// Every variant is a deterministic, caller-facing usage error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReflectError {
    /// The named property does not exist on the object's type.
    #[error("no property `{property}` on type `{type_key}`")]
    PropertyNotFound { type_key: String, property: String },

    /// No type with the given key is registered.
    #[error("type not registered: `{key}`")]
    TypeNotFound { key: String },

    /// No parser is registered for the target kind.
    #[error("no parser registered for kind `{kind}`")]
    ParserNotFound { kind: TypeKind },

    /// A registered parser rejected the input.
    #[error("cannot parse `{input}` as {kind}: {reason}")]
    ParseFailed {
        kind: TypeKind,
        input: String,
        reason: String,
    },

    /// A type provider failed to produce its descriptors.
    #[error("type provider `{provider}` failed: {reason}")]
    ProviderFailed { provider: String, reason: String },
}

impl ReflectError {
    /// Create a property-not-found error.
    #[must_use]
    pub fn property_not_found(type_key: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            type_key: type_key.into(),
            property: property.into(),
        }
    }

    /// Create a type-not-found error.
    #[must_use]
    pub fn type_not_found(key: impl Into<String>) -> Self {
        Self::TypeNotFound { key: key.into() }
    }

    /// Create a parser-not-found error.
    #[must_use]
    pub fn parser_not_found(kind: TypeKind) -> Self {
        Self::ParserNotFound { kind }
    }

    /// Create a parse-failed error.
    #[must_use]
    pub fn parse_failed(
        kind: TypeKind,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ParseFailed {
            kind,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a provider-failed error.
    #[must_use]
    pub fn provider_failed(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderFailed {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::PropertyNotFound { .. } | Self::TypeNotFound { .. } => "lookup",
            Self::ParserNotFound { .. } | Self::ParseFailed { .. } => "parse",
            Self::ProviderFailed { .. } => "provider",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::PropertyNotFound { .. } => "REFLECT_PROPERTY_NOT_FOUND",
            Self::TypeNotFound { .. } => "REFLECT_TYPE_NOT_FOUND",
            Self::ParserNotFound { .. } => "REFLECT_PARSER_NOT_FOUND",
            Self::ParseFailed { .. } => "REFLECT_PARSE_FAILED",
            Self::ProviderFailed { .. } => "REFLECT_PROVIDER_FAILED",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// All introspection errors are deterministic — same input, same result.
    /// Returns `false` for every variant.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
