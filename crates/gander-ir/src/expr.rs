//! IR expressions.

use serde::{Deserialize, Serialize};

use crate::{Block, Type};

/// An IR expression. Built bottom-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Variable or function reference.
    Ident(String),

    /// Effectful call to a primitive or user function.
    Call(CallExpr),

    /// Call to a pure primitive, usable as a value without sequencing.
    PureCall(CallExpr),

    /// `left op right`.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Field projection: `Struct.field arg`.
    Proj { projection: String, arg: Box<Expr> },

    /// Struct construction with every field given.
    StructLit(StructLit),

    /// Tuple of two or more values.
    Tuple(Vec<Expr>),

    /// Conditional with both branches present.
    If {
        cond: Box<Expr>,
        then: Box<Expr>,
        else_: Box<Expr>,
    },

    /// Loop over one loop-carried variable.
    Loop(LoopExpr),

    /// Return from the enclosing function.
    Return(Box<Expr>),

    /// Start the next iteration with a new loop-variable value.
    LoopContinue(Box<Expr>),

    /// Exit the enclosing loop.
    LoopRet,

    /// Logical negation.
    Not(Box<Expr>),

    IntLit(u64),

    /// Nested block.
    Block(Block),

    /// Type argument to a primitive such as `zeroValue`.
    Type(Type),

    /// Map-alter action: unconditionally insert the value.
    HashTableInsert(Box<Expr>),
}

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    LessThan,
    GreaterThan,
    Plus,
    Minus,
    Equals,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::LessThan => "<",
            BinOp::GreaterThan => ">",
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Equals => "==",
        }
    }
}

/// A named call and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    pub method: String,
    pub args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// `Name { field := value; ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructLit {
    pub struct_name: String,
    /// Fields in source order.
    pub fields: Vec<FieldVal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVal {
    pub field: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopExpr {
    pub loop_var: String,
    pub initial: Box<Expr>,
    pub body: Block,
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// The unit value `tt`.
    pub fn unit() -> Self {
        Expr::ident("tt")
    }

    pub fn call(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::new(method, args))
    }

    pub fn pure_call(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::PureCall(CallExpr::new(method, args))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn proj(projection: impl Into<String>, arg: Expr) -> Self {
        Expr::Proj {
            projection: projection.into(),
            arg: Box::new(arg),
        }
    }

    pub fn if_(cond: Expr, then: Expr, else_: Expr) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then: Box::new(then),
            else_: Box::new(else_),
        }
    }

    pub fn loop_(loop_var: impl Into<String>, initial: Expr, body: Block) -> Self {
        Expr::Loop(LoopExpr {
            loop_var: loop_var.into(),
            initial: Box::new(initial),
            body,
        })
    }

    pub fn ret(value: Expr) -> Self {
        Expr::Return(Box::new(value))
    }

    pub fn loop_continue(value: Expr) -> Self {
        Expr::LoopContinue(Box::new(value))
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    /// Collapse a value list: none is `tt`, one is itself.
    pub fn tuple(mut values: Vec<Expr>) -> Self {
        match values.len() {
            0 => Expr::unit(),
            1 => values.remove(0),
            _ => Expr::Tuple(values),
        }
    }

    /// Whether this expression ends its block: return, continue, or break.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Expr::Return(_) | Expr::LoopContinue(_) | Expr::LoopRet
        )
    }

    /// Whether every path through this expression leaves the enclosing loop
    /// body by `LoopContinue` or `LoopRet`.
    pub fn exits_loop_iteration(&self) -> bool {
        match self {
            Expr::LoopContinue(_) | Expr::LoopRet => true,
            Expr::If { then, else_, .. } => {
                then.exits_loop_iteration() && else_.exits_loop_iteration()
            }
            Expr::Block(block) => block.exits_loop_iteration(),
            _ => false,
        }
    }

    /// Whether some path through this expression reaches a terminal. Loops
    /// are opaque: their `LoopContinue` and `LoopRet` stay inside them.
    pub fn can_exit(&self) -> bool {
        match self {
            Expr::Return(_) | Expr::LoopContinue(_) | Expr::LoopRet => true,
            Expr::If { then, else_, .. } => then.can_exit() || else_.can_exit(),
            Expr::Block(block) => block.can_exit(),
            _ => false,
        }
    }
}
