//! Input syntax for the gander translator.
//!
//! This crate does not parse anything. An external front end (parser plus
//! semantic analysis) produces:
//! - a syntax tree per file, allocated in a [`bumpalo::Bump`] arena ([`ast`])
//! - semantic facts about its nodes, expressed in the [`sema`] vocabulary
//!
//! [`AstBuilder`] is the allocation helper front ends and tests use to build
//! trees with fresh [`ast::NodeId`]s.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use gander_syntax::AstBuilder;
//! use gander_syntax::ast::Stmt;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let stmt = b.ret(&[b.int("1")]);
//! assert!(matches!(stmt, Stmt::Return(_)));
//! ```

pub mod ast;
pub mod builder;
pub mod sema;

pub use builder::AstBuilder;
pub use gander_core::{FileId, Span};
