pub mod convert;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod marker;
pub mod member;
pub mod parse;
pub mod reflect;
pub mod registry;
pub mod value;

pub mod prelude {
    pub use crate::convert::ValueJsonExt;
    pub use crate::descriptor::TypeDescriptor;
    pub use crate::error::{ReflectError, ReflectResult};
    pub use crate::kind::TypeKind;
    pub use crate::marker::Marker;
    pub use crate::member::{MemberDescriptor, MemberKind, Scope};
    pub use crate::parse::ParserRegistry;
    pub use crate::reflect::Reflect;
    pub use crate::registry::{TypeProvider, TypeRegistry};
    pub use crate::value::Value;
}

pub use convert::ValueJsonExt;
pub use descriptor::TypeDescriptor;
pub use error::{ReflectError, ReflectResult};
pub use kind::TypeKind;
pub use marker::Marker;
pub use member::{MemberDescriptor, MemberKind, Scope};
pub use parse::ParserRegistry;
pub use reflect::Reflect;
pub use registry::{TypeProvider, TypeRegistry};
pub use value::Value;
