//! Target IR for the gander translator.
//!
//! The IR is a small, pure, monadic language. A function body is a [`Block`]:
//! an ordered sequence of [`Binding`]s, each naming the result of one
//! [`Expr`]. Control flow is expression-shaped ([`Expr::If`], [`Expr::Loop`])
//! and exits are explicit terminals ([`Expr::Return`], [`Expr::LoopContinue`],
//! [`Expr::LoopRet`]) that may only appear as the last binding of a block.
//!
//! Effects are calls to named primitives (see [`prim`]) or to user functions.
//! Turning the IR into proof-assistant text is left to an external printer;
//! every type here derives `serde` traits so it can be handed over as data.

mod block;
mod decl;
mod expr;
pub mod prim;
mod types;
pub mod verify;

pub use block::*;
pub use decl::*;
pub use expr::*;
pub use types::*;
