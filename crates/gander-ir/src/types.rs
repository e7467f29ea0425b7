//! IR types.

use serde::{Deserialize, Serialize};

/// An IR type. Closed set; anything the translator cannot map is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// A named type: `uint64`, `byte`, `Path`, `Fd`, `unit`, or a
    /// non-struct user type.
    Ident(String),
    /// Reference to a declared struct.
    Struct(String),
    /// `slice.t T`
    Slice(Box<Type>),
    /// Hash table from `uint64` to the given value type.
    Map(Box<Type>),
    /// Mutable reference cell holding the given type.
    Ptr(Box<Type>),
    /// Product of two or more types.
    Tuple(Vec<Type>),
}

impl Type {
    pub fn ident(name: impl Into<String>) -> Self {
        Type::Ident(name.into())
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Type::Struct(name.into())
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice(Box::new(elem))
    }

    pub fn map(value: Type) -> Self {
        Type::Map(Box::new(value))
    }

    pub fn ptr(pointee: Type) -> Self {
        Type::Ptr(Box::new(pointee))
    }

    pub fn unit() -> Self {
        Type::ident("unit")
    }

    pub fn uint64() -> Self {
        Type::ident("uint64")
    }

    /// Collapse a result list into one type: none is `unit`, one is itself.
    pub fn tuple(mut types: Vec<Type>) -> Self {
        match types.len() {
            0 => Type::unit(),
            1 => types.remove(0),
            _ => Type::Tuple(types),
        }
    }
}
