//! Type descriptors: the explicit, registry-world stand-in for a runtime
//! reflection handle.

use serde::{Deserialize, Serialize};

use crate::kind::TypeKind;
use crate::marker::Marker;
use crate::member::{MemberDescriptor, MemberKind, Scope};

/// Describes a registered type: its kind, inheritance edges, markers, and
/// declared members.
///
/// Descriptors are built explicitly by the code that owns the type (builder
/// pattern) and registered with a
/// [`TypeRegistry`](crate::registry::TypeRegistry). All queries are pure
/// filters over the declared members; none of them mutate and none of them
/// fail — an empty result simply means nothing matched.
///
/// # Example
///
/// ```rust
/// use prism_reflect::{Marker, MemberDescriptor, Scope, TypeDescriptor, TypeKind};
///
/// let user = TypeDescriptor::new("user")
///     .with_marker(Marker::new("entity"))
///     .with_member(
///         MemberDescriptor::property("id", TypeKind::I64).with_marker(Marker::new("column")),
///     )
///     .with_member(MemberDescriptor::property("nickname", TypeKind::String));
///
/// let columns = user.properties_with_marker("column", Scope::default());
/// assert_eq!(columns.len(), 1);
/// assert_eq!(columns[0].name, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Unique key identifying this type within a registry.
    pub key: String,

    /// The kind of the described type. Registered domain types are
    /// object-kinded unless stated otherwise.
    pub kind: TypeKind,

    /// Key of the base type this type extends, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Keys of the interfaces this type implements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,

    /// Markers attached to the type itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,

    /// Declared members, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    /// Create an object-kinded descriptor with the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: TypeKind::Object,
            extends: None,
            implements: Vec::new(),
            markers: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Set the kind of the described type.
    #[must_use]
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the base type this type extends.
    #[must_use]
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    /// Add an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    /// Attach a marker to the type.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Add a member declaration.
    #[must_use]
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Whether a marker with the given key is attached to the type.
    #[must_use]
    pub fn has_marker(&self, key: &str) -> bool {
        self.markers.iter().any(|m| m.key == key)
    }

    /// Look up a declared member by name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// All declared members tagged with the given marker, inside the scope.
    #[must_use]
    pub fn members_with_marker(&self, marker: &str, scope: Scope) -> Vec<&MemberDescriptor> {
        self.members
            .iter()
            .filter(|m| m.has_marker(marker) && m.matches(scope))
            .collect()
    }

    /// Declared properties tagged with the given marker, inside the scope.
    #[must_use]
    pub fn properties_with_marker(&self, marker: &str, scope: Scope) -> Vec<&MemberDescriptor> {
        self.members_of_kind_with_marker(MemberKind::Property, marker, scope)
    }

    /// Declared fields tagged with the given marker, inside the scope.
    #[must_use]
    pub fn fields_with_marker(&self, marker: &str, scope: Scope) -> Vec<&MemberDescriptor> {
        self.members_of_kind_with_marker(MemberKind::Field, marker, scope)
    }

    /// Declared methods tagged with the given marker, inside the scope.
    #[must_use]
    pub fn methods_with_marker(&self, marker: &str, scope: Scope) -> Vec<&MemberDescriptor> {
        self.members_of_kind_with_marker(MemberKind::Method, marker, scope)
    }

    fn members_of_kind_with_marker(
        &self,
        kind: MemberKind,
        marker: &str,
        scope: Scope,
    ) -> Vec<&MemberDescriptor> {
        self.members
            .iter()
            .filter(|m| m.kind == kind && m.has_marker(marker) && m.matches(scope))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeDescriptor {
        TypeDescriptor::new("user")
            .with_marker(Marker::new("entity"))
            .with_member(
                MemberDescriptor::property("id", TypeKind::I64)
                    .with_marker(Marker::new("column"))
                    .with_marker(Marker::new("primary_key")),
            )
            .with_member(
                MemberDescriptor::property("email", TypeKind::String)
                    .with_marker(Marker::new("column")),
            )
            .with_member(MemberDescriptor::property("cached_name", TypeKind::String))
            .with_member(
                MemberDescriptor::field("version", TypeKind::I32)
                    .static_member()
                    .with_marker(Marker::new("column")),
            )
            .with_member(
                MemberDescriptor::method("normalize", TypeKind::String)
                    .with_marker(Marker::new("hook")),
            )
    }

    #[test]
    fn new_is_object_kinded() {
        let desc = TypeDescriptor::new("thing");
        assert_eq!(desc.kind, TypeKind::Object);
        assert!(desc.extends.is_none());
        assert!(desc.members.is_empty());
    }

    #[test]
    fn type_markers() {
        let desc = sample();
        assert!(desc.has_marker("entity"));
        assert!(!desc.has_marker("view"));
    }

    #[test]
    fn member_lookup() {
        let desc = sample();
        assert_eq!(desc.member("email").unwrap().value_kind, TypeKind::String);
        assert!(desc.member("missing").is_none());
    }

    #[test]
    fn properties_with_marker_filters_kind_and_scope() {
        let desc = sample();

        let columns = desc.properties_with_marker("column", Scope::default());
        let names: Vec<&str> = columns.iter().map(|m| m.name.as_str()).collect();
        // The static field is not a property; the unmarked property is out.
        assert_eq!(names, vec!["id", "email"]);
    }

    #[test]
    fn members_with_marker_spans_kinds() {
        let desc = sample();

        let all_scopes = Scope::all();
        let marked = desc.members_with_marker("column", all_scopes);
        let names: Vec<&str> = marked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["id", "email", "version"]);
    }

    #[test]
    fn fields_and_methods_with_marker() {
        let desc = sample();

        let fields = desc.fields_with_marker("column", Scope::STATIC | Scope::PUBLIC);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "version");

        let hooks = desc.methods_with_marker("hook", Scope::default());
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].name, "normalize");
    }

    #[test]
    fn no_decorated_members_yields_empty_vec() {
        let desc = TypeDescriptor::new("plain")
            .with_member(MemberDescriptor::property("a", TypeKind::I32));

        assert!(desc.members_with_marker("column", Scope::all()).is_empty());
        assert!(desc.properties_with_marker("column", Scope::all()).is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let desc = sample().extends("base").implements("auditable");
        let json = serde_json::to_string(&desc).unwrap();
        let back: TypeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(desc, back);
    }
}
