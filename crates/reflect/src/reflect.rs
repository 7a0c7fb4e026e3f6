use crate::error::{ReflectError, ReflectResult};
use crate::value::Value;

/// The seam a type implements to expose its state to dynamic reads.
///
/// Implementations return their current property values by name. Indexer
/// properties are not addressable through this interface — they need index
/// arguments that a bare name cannot carry.
///
/// # Example
///
/// ```rust
/// use prism_reflect::{Reflect, Value};
///
/// struct User {
///     email: String,
/// }
///
/// impl Reflect for User {
///     fn type_key(&self) -> &str {
///         "user"
///     }
///
///     fn get(&self, property: &str) -> Option<Value> {
///         match property {
///             "email" => Some(Value::from(self.email.as_str())),
///             _ => None,
///         }
///     }
/// }
///
/// let user = User { email: "ada@example.com".into() };
/// assert_eq!(
///     user.property_value("email").unwrap(),
///     Value::from("ada@example.com")
/// );
/// assert!(user.property_value("missing").is_err());
/// ```
pub trait Reflect {
    /// Key of this object's type in the registry.
    fn type_key(&self) -> &str;

    /// The current value of the named property, or `None` when the name
    /// does not resolve.
    fn get(&self, property: &str) -> Option<Value>;

    /// The current value of the named property.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectError::PropertyNotFound`] when no property with
    /// that name exists on this object's type. That is a programmer error;
    /// callers should abort the operation rather than retry.
    fn property_value(&self, property: &str) -> ReflectResult<Value> {
        self.get(property)
            .ok_or_else(|| ReflectError::property_not_found(self.type_key(), property))
    }
}
