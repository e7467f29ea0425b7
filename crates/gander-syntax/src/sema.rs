//! Semantic facts produced by the front end's type checker.
//!
//! The translator never infers types itself. For every expression it cares
//! about it asks the front end, through a context keyed by
//! [`NodeId`](crate::ast::NodeId), for:
//! - the expression's type, as a [`SemType`]
//! - for identifiers, the kind of object the name resolves to ([`ObjectKind`])
//!
//! Type names used in type position have their *denoted* type recorded under
//! the name's id, so `Log` in `func f(l Log)` maps to the named type `Log`.

use std::fmt;
use std::sync::Arc;

/// Predeclared scalar kinds, including the untyped constant kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    /// `uint8`, spelled `byte` in source and output.
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,
    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedString,
    UntypedNil,
}

impl BasicKind {
    /// The kind's source spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "byte",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::UnsafePointer => "unsafe.Pointer",
            Self::UntypedBool => "untyped bool",
            Self::UntypedInt => "untyped int",
            Self::UntypedRune => "untyped rune",
            Self::UntypedFloat => "untyped float",
            Self::UntypedString => "untyped string",
            Self::UntypedNil => "untyped nil",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::UntypedInt
                | Self::UntypedRune
        )
    }

    pub fn is_untyped(self) -> bool {
        matches!(
            self,
            Self::UntypedBool
                | Self::UntypedInt
                | Self::UntypedRune
                | Self::UntypedFloat
                | Self::UntypedString
                | Self::UntypedNil
        )
    }
}

/// A declared (defined) type: `type Name Underlying`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    /// Declaring package, for types from other packages.
    pub package: Option<String>,
    pub name: String,
    pub underlying: SemType,
}

/// A struct field as seen by the type checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemField {
    pub name: String,
    pub ty: SemType,
}

/// A type as computed by semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemType {
    Basic(BasicKind),
    Named(Arc<NamedType>),
    Struct(Vec<SemField>),
    Slice(Box<SemType>),
    Array(u64, Box<SemType>),
    Map(Box<SemType>, Box<SemType>),
    Pointer(Box<SemType>),
    Signature {
        params: Vec<SemType>,
        results: Vec<SemType>,
    },
    Interface,
    Chan(Box<SemType>),
    /// Multiple results of a call.
    Tuple(Vec<SemType>),
}

impl SemType {
    pub fn uint64() -> Self {
        Self::Basic(BasicKind::Uint64)
    }

    pub fn string() -> Self {
        Self::Basic(BasicKind::String)
    }

    pub fn byte() -> Self {
        Self::Basic(BasicKind::Uint8)
    }

    pub fn slice(elem: SemType) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn map(key: SemType, value: SemType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn pointer(pointee: SemType) -> Self {
        Self::Pointer(Box::new(pointee))
    }

    /// A struct type from `(name, type)` pairs.
    pub fn structure<'a>(fields: impl IntoIterator<Item = (&'a str, SemType)>) -> Self {
        Self::Struct(
            fields
                .into_iter()
                .map(|(name, ty)| SemField {
                    name: name.to_string(),
                    ty,
                })
                .collect(),
        )
    }

    /// A type declared in the package being translated.
    pub fn named(name: &str, underlying: SemType) -> Self {
        Self::Named(Arc::new(NamedType {
            package: None,
            name: name.to_string(),
            underlying,
        }))
    }

    /// A type declared in another package.
    pub fn imported(package: &str, name: &str, underlying: SemType) -> Self {
        Self::Named(Arc::new(NamedType {
            package: Some(package.to_string()),
            name: name.to_string(),
            underlying,
        }))
    }

    /// Strip any named-type layers.
    pub fn underlying(&self) -> &SemType {
        let mut ty = self;
        while let Self::Named(named) = ty {
            ty = &named.underlying;
        }
        ty
    }

    pub fn as_basic(&self) -> Option<BasicKind> {
        match self {
            Self::Basic(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            Self::Named(named) => Some(named),
            _ => None,
        }
    }

    /// Field names of the underlying struct, in declaration order.
    pub fn struct_fields(&self) -> Option<&[SemField]> {
        match self.underlying() {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Display for SemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(kind) => f.write_str(kind.name()),
            Self::Named(named) => match &named.package {
                Some(package) => write!(f, "{}.{}", package, named.name),
                None => f.write_str(&named.name),
            },
            Self::Struct(fields) => {
                f.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                f.write_str("}")
            }
            Self::Slice(elem) => write!(f, "[]{elem}"),
            Self::Array(len, elem) => write!(f, "[{len}]{elem}"),
            Self::Map(key, value) => write!(f, "map[{key}]{value}"),
            Self::Pointer(pointee) => write!(f, "*{pointee}"),
            Self::Signature { params, results } => {
                f.write_str("func(")?;
                write_list(f, params)?;
                f.write_str(")")?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] => write!(f, " {single}"),
                    many => {
                        f.write_str(" (")?;
                        write_list(f, many)?;
                        f.write_str(")")
                    }
                }
            }
            Self::Interface => f.write_str("interface{...}"),
            Self::Chan(elem) => write!(f, "chan {elem}"),
            Self::Tuple(elems) => {
                f.write_str("(")?;
                write_list(f, elems)?;
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[SemType]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

/// What an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Local variable, parameter, or package-level variable
    Var,
    /// Declared constant
    Const,
    /// Declared or predeclared type name
    TypeName,
    /// Declared function
    Func,
    /// Imported package name
    Package,
    /// Predeclared function or constant such as `len` or `true`
    Builtin,
    /// The predeclared `nil`
    Nil,
    Label,
}

impl ObjectKind {
    /// Names the program itself declared a value for.
    pub fn is_value(self) -> bool {
        matches!(self, Self::Var | Self::Const | Self::Func)
    }
}
