//! Member descriptors and search-scope flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::kind::TypeKind;
use crate::marker::Marker;

/// Discriminant for the member kinds a type can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

bitflags! {
    /// Search scope for member filtering.
    ///
    /// A member matches when the filter intersects both its static-ness
    /// axis and its visibility axis. An empty scope matches nothing; flags
    /// are passed through as-is, never validated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Scope: u8 {
        /// Match instance members.
        const INSTANCE = 0b0000_0001;
        /// Match static members.
        const STATIC = 0b0000_0010;
        /// Match public members.
        const PUBLIC = 0b0000_0100;
        /// Match non-public members.
        const NON_PUBLIC = 0b0000_1000;
    }
}

impl Default for Scope {
    /// Public instance members — the common case.
    fn default() -> Self {
        Self::INSTANCE | Self::PUBLIC
    }
}

/// Describes a single member (field, property, or method) of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name, unique within its declaring type.
    pub name: String,

    /// Whether this is a field, property, or method.
    pub kind: MemberKind,

    /// The member's value kind: a field or property's type, or a method's
    /// return kind.
    pub value_kind: TypeKind,

    /// Whether the member belongs to the type rather than an instance.
    #[serde(default)]
    pub is_static: bool,

    /// Whether the member is publicly visible.
    #[serde(default = "default_true")]
    pub is_public: bool,

    /// Markers attached to this member.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,

    /// Index parameter kinds. Only meaningful for properties; a property
    /// with one or more index parameters is an indexer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index_params: Vec<TypeKind>,
}

fn default_true() -> bool {
    true
}

impl MemberDescriptor {
    fn new(name: impl Into<String>, kind: MemberKind, value_kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value_kind,
            is_static: false,
            is_public: true,
            markers: Vec::new(),
            index_params: Vec::new(),
        }
    }

    /// Create a public instance field descriptor.
    #[must_use]
    pub fn field(name: impl Into<String>, value_kind: TypeKind) -> Self {
        Self::new(name, MemberKind::Field, value_kind)
    }

    /// Create a public instance property descriptor.
    #[must_use]
    pub fn property(name: impl Into<String>, value_kind: TypeKind) -> Self {
        Self::new(name, MemberKind::Property, value_kind)
    }

    /// Create a public instance method descriptor; `value_kind` is the
    /// return kind.
    #[must_use]
    pub fn method(name: impl Into<String>, value_kind: TypeKind) -> Self {
        Self::new(name, MemberKind::Method, value_kind)
    }

    /// Mark this member as static.
    #[must_use]
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark this member as non-public.
    #[must_use]
    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Attach a marker.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Add an index parameter (turns a property into an indexer).
    #[must_use]
    pub fn with_index_param(mut self, kind: TypeKind) -> Self {
        self.index_params.push(kind);
        self
    }

    /// Whether a marker with the given key is attached.
    #[must_use]
    pub fn has_marker(&self, key: &str) -> bool {
        self.markers.iter().any(|m| m.key == key)
    }

    /// Whether this member is an indexer property: a property whose
    /// accessor takes one or more index parameters.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.kind == MemberKind::Property && !self.index_params.is_empty()
    }

    /// Whether this member falls inside the given search scope.
    #[must_use]
    pub fn matches(&self, scope: Scope) -> bool {
        let staticness = if self.is_static {
            Scope::STATIC
        } else {
            Scope::INSTANCE
        };
        let visibility = if self.is_public {
            Scope::PUBLIC
        } else {
            Scope::NON_PUBLIC
        };
        scope.contains(staticness) && scope.contains(visibility)
    }
}
