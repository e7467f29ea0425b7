//! IR declarations and files.

use serde::{Deserialize, Serialize};

use crate::{Block, Type};

/// A named, typed parameter or struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: Type,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    pub args: Vec<FieldDecl>,
    /// Results collapsed into one type (`unit` when there are none).
    pub return_type: Type,
    pub body: Block,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,
    pub comment: Option<String>,
}

/// A top-level IR declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decl {
    Func(FuncDecl),
    Struct(StructDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Func(f) => &f.name,
            Decl::Struct(s) => &s.name,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            Decl::Func(f) => f.comment.as_deref(),
            Decl::Struct(s) => s.comment.as_deref(),
        }
    }
}

/// The translation of one package: declarations in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct File {
    pub decls: Vec<Decl>,
}

impl File {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self { decls }
    }

    pub fn push(&mut self, decl: Decl) {
        self.decls.push(decl);
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decl> {
        self.decls.iter()
    }

    /// Look up a function by name.
    pub fn func(&self, name: &str) -> Option<&FuncDecl> {
        self.decls.iter().find_map(|d| match d {
            Decl::Func(f) if f.name == name => Some(f),
            _ => None,
        })
    }

    /// Look up a struct by name.
    pub fn structure(&self, name: &str) -> Option<&StructDecl> {
        self.decls.iter().find_map(|d| match d {
            Decl::Struct(s) if s.name == name => Some(s),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a File {
    type Item = &'a Decl;
    type IntoIter = std::slice::Iter<'a, Decl>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_kind_and_name() {
        let file = File::new(vec![
            Decl::Struct(StructDecl {
                name: "Log".into(),
                fields: vec![FieldDecl::new("sz", Type::uint64())],
                comment: None,
            }),
            Decl::Func(FuncDecl {
                name: "Log".into(),
                args: vec![],
                return_type: Type::unit(),
                body: Block::return_unit(),
                comment: Some("constructor".into()),
            }),
        ]);

        assert_eq!(file.len(), 2);
        assert_eq!(file.structure("Log").map(|s| s.fields.len()), Some(1));
        assert_eq!(file.func("Log").and_then(|f| f.comment.as_deref()), Some("constructor"));
        assert!(file.func("Open").is_none());
        let names: Vec<&str> = file.iter().map(Decl::name).collect();
        assert_eq!(names, vec!["Log", "Log"]);
    }
}
