//! The loaded-type universe: an explicit registry of type descriptors.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::descriptor::TypeDescriptor;
use crate::error::{ReflectError, ReflectResult};
use crate::member::{MemberDescriptor, MemberKind, Scope};
use crate::reflect::Reflect;

/// A source of type descriptors, the registry-world analogue of a loaded
/// module.
///
/// Providers are how larger systems contribute whole families of types at
/// once. A provider is allowed to fail as a unit; see
/// [`TypeRegistry::load`] for what happens then.
pub trait TypeProvider {
    /// Name of the provider, used in logs.
    fn name(&self) -> &str;

    /// Produce the descriptors this provider contributes.
    fn types(&self) -> ReflectResult<Vec<TypeDescriptor>>;
}

/// Registry of type descriptors, keyed by type key and ordered by
/// registration (discovery order).
///
/// All queries are immutable reads; the registry is populated up front and
/// then shared freely.
///
/// # Example
///
/// ```rust
/// use prism_reflect::{TypeDescriptor, TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// registry.register(TypeDescriptor::new("animal"));
/// registry.register(TypeDescriptor::new("dog").extends("animal"));
///
/// let keys: Vec<&str> = registry
///     .assignable_to("animal")
///     .iter()
///     .map(|t| t.key.as_str())
///     .collect();
/// assert_eq!(keys, vec!["animal", "dog"]);
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Overwrites any existing type with the same
    /// key; re-registration keeps the original discovery position.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.key.clone(), descriptor);
    }

    /// Look up a descriptor by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TypeDescriptor> {
        self.types.get(key)
    }

    /// Check whether a type with the given key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.types.contains_key(key)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Remove a type by key. Returns the removed descriptor, if any.
    pub fn unregister(&mut self, key: &str) -> Option<TypeDescriptor> {
        self.types.shift_remove(key)
    }

    /// Iterate over all registered `(key, descriptor)` pairs in discovery
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over all registered keys in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// The descriptor for a reflectable object's runtime type, if its
    /// type is registered.
    #[must_use]
    pub fn describe(&self, obj: &dyn Reflect) -> Option<&TypeDescriptor> {
        self.get(obj.type_key())
    }

    /// Load every descriptor a provider contributes.
    ///
    /// A provider that fails is skipped as a unit: its error is logged and
    /// swallowed, nothing it would have contributed is registered, and the
    /// rest of the registry is untouched. No aggregated error reaches the
    /// caller. The return value is the number of types actually registered,
    /// so callers that care can detect a partial universe.
    pub fn load(&mut self, provider: &dyn TypeProvider) -> usize {
        match provider.types() {
            Ok(types) => {
                let count = types.len();
                for descriptor in types {
                    tracing::debug!(
                        provider = provider.name(),
                        type_key = %descriptor.key,
                        "registering type"
                    );
                    self.register(descriptor);
                }
                count
            }
            Err(err) => {
                tracing::warn!(
                    provider = provider.name(),
                    error = %err,
                    "type provider failed, skipping"
                );
                0
            }
        }
    }

    /// Load from several providers in order, skipping the ones that fail.
    /// Returns the total number of types registered.
    pub fn load_all<'a, I>(&mut self, providers: I) -> usize
    where
        I: IntoIterator<Item = &'a dyn TypeProvider>,
    {
        providers.into_iter().map(|p| self.load(p)).sum()
    }

    /// Every registered type assignable to the given base: the base itself,
    /// transitive subclasses, and transitive interface implementors.
    /// Deduplicated, in discovery order.
    #[must_use]
    pub fn assignable_to(&self, base: &str) -> Vec<&TypeDescriptor> {
        self.types
            .values()
            .filter(|ty| self.is_assignable(ty, base))
            .collect()
    }

    /// Registered types that are strict subclasses of the given base
    /// (transitive `extends` only, excluding the base itself), in
    /// discovery order.
    #[must_use]
    pub fn subtypes_of(&self, base: &str) -> Vec<&TypeDescriptor> {
        self.types
            .values()
            .filter(|ty| ty.key != base && self.extends_reaches(ty, base))
            .collect()
    }

    /// Whether `ty` is assignable to `base` via identity, its `extends`
    /// chain, or an implemented interface (transitively).
    #[must_use]
    pub fn is_assignable(&self, ty: &TypeDescriptor, base: &str) -> bool {
        let mut seen = HashSet::new();
        self.is_assignable_inner(ty, base, &mut seen)
    }

    fn is_assignable_inner<'a>(
        &'a self,
        ty: &'a TypeDescriptor,
        base: &str,
        seen: &mut HashSet<&'a str>,
    ) -> bool {
        if ty.key == base {
            return true;
        }
        if !seen.insert(ty.key.as_str()) {
            return false;
        }
        for interface in &ty.implements {
            if interface == base {
                return true;
            }
            if let Some(desc) = self.get(interface) {
                if self.is_assignable_inner(desc, base, seen) {
                    return true;
                }
            }
        }
        if let Some(parent) = ty.extends.as_deref() {
            if parent == base {
                return true;
            }
            if let Some(desc) = self.get(parent) {
                return self.is_assignable_inner(desc, base, seen);
            }
        }
        false
    }

    fn extends_reaches(&self, ty: &TypeDescriptor, base: &str) -> bool {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = ty;
        while let Some(parent) = current.extends.as_deref() {
            if parent == base {
                return true;
            }
            if !seen.insert(parent) {
                return false;
            }
            match self.get(parent) {
                Some(desc) => current = desc,
                None => return false,
            }
        }
        false
    }

    /// Members of the named type tagged with the given marker, inside the
    /// scope. With `inherit`, ancestor members along the `extends` chain
    /// are included; a name declared in a more derived type shadows the
    /// ancestor's declaration.
    pub fn members_with_marker(
        &self,
        type_key: &str,
        marker: &str,
        scope: Scope,
        inherit: bool,
    ) -> ReflectResult<Vec<&MemberDescriptor>> {
        self.marked_members(type_key, None, marker, scope, inherit)
    }

    /// Like [`Self::members_with_marker`], restricted to properties.
    pub fn properties_with_marker(
        &self,
        type_key: &str,
        marker: &str,
        scope: Scope,
        inherit: bool,
    ) -> ReflectResult<Vec<&MemberDescriptor>> {
        self.marked_members(type_key, Some(MemberKind::Property), marker, scope, inherit)
    }

    /// Like [`Self::members_with_marker`], restricted to methods.
    pub fn methods_with_marker(
        &self,
        type_key: &str,
        marker: &str,
        scope: Scope,
        inherit: bool,
    ) -> ReflectResult<Vec<&MemberDescriptor>> {
        self.marked_members(type_key, Some(MemberKind::Method), marker, scope, inherit)
    }

    fn marked_members(
        &self,
        type_key: &str,
        kind: Option<MemberKind>,
        marker: &str,
        scope: Scope,
        inherit: bool,
    ) -> ReflectResult<Vec<&MemberDescriptor>> {
        let matches = |m: &MemberDescriptor| {
            kind.is_none_or(|k| m.kind == k) && m.has_marker(marker) && m.matches(scope)
        };

        let mut ty = self
            .get(type_key)
            .ok_or_else(|| ReflectError::type_not_found(type_key))?;

        let mut out: Vec<&MemberDescriptor> = ty.members.iter().filter(|m| matches(m)).collect();
        if !inherit {
            return Ok(out);
        }

        let mut visited: HashSet<&str> = HashSet::from([ty.key.as_str()]);
        let mut declared: HashSet<&str> = ty.members.iter().map(|m| m.name.as_str()).collect();
        while let Some(parent_key) = ty.extends.as_deref() {
            let Some(parent) = self.get(parent_key) else {
                break;
            };
            if !visited.insert(parent.key.as_str()) {
                break;
            }
            out.extend(
                parent
                    .members
                    .iter()
                    .filter(|m| matches(m) && !declared.contains(m.name.as_str())),
            );
            declared.extend(parent.members.iter().map(|m| m.name.as_str()));
            ty = parent;
        }
        Ok(out)
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("count", &self.types.len())
            .field("keys", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}
