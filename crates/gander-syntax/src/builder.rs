//! Arena allocation helpers for building syntax trees.
//!
//! Front ends lowering a foreign parse tree, and tests writing trees by hand,
//! both need the same things: copy slices and strings into the arena, mint
//! fresh [`NodeId`]s, and stamp each node with a position. [`AstBuilder`]
//! does all three.
//!
//! Positions are synthetic. Each node takes the builder's current position
//! and then advances the column by one; [`AstBuilder::at`] moves to an
//! explicit line and column. Subexpressions are built before the nodes that
//! contain them, so an enclosing node always sits to the right of its parts.

use std::cell::Cell;

use bumpalo::Bump;
use gander_core::{FileId, Span};

use crate::ast::*;

/// Allocates syntax nodes in an arena.
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    next_id: Cell<u32>,
    line: Cell<u32>,
    col: Cell<u32>,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            next_id: Cell::new(0),
            line: Cell::new(1),
            col: Cell::new(1),
        }
    }

    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    /// Move the position stamped on the next node.
    pub fn at(&self, line: u32, col: u32) -> &Self {
        self.line.set(line);
        self.col.set(col);
        self
    }

    /// Number of node ids handed out so far.
    pub fn node_count(&self) -> u32 {
        self.next_id.get()
    }

    fn id(&self) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeId::new(id)
    }

    fn span(&self) -> Span {
        let col = self.col.get();
        self.col.set(col + 1);
        Span::point(self.line.get(), col)
    }

    fn alloc<T>(&self, value: T) -> &'ast T {
        self.arena.alloc(value)
    }

    fn slice<T: Copy>(&self, values: &[T]) -> &'ast [T] {
        self.arena.alloc_slice_copy(values)
    }

    fn str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    // ------------------------------------------------------------------
    // Identifiers and literals
    // ------------------------------------------------------------------

    pub fn ident(&self, name: &str) -> Ident<'ast> {
        Ident::new(self.str(name), self.id(), self.span())
    }

    /// A bare name in expression position.
    pub fn name(&self, name: &str) -> Expr<'ast> {
        Expr::Ident(self.ident(name))
    }

    pub fn nil(&self) -> Expr<'ast> {
        self.name("nil")
    }

    pub fn literal(&self, kind: LiteralKind, raw: &str) -> LiteralExpr<'ast> {
        LiteralExpr {
            kind,
            raw: self.str(raw),
            id: self.id(),
            span: self.span(),
        }
    }

    /// An integer literal spelled `raw`.
    pub fn int(&self, raw: &str) -> Expr<'ast> {
        Expr::Literal(self.literal(LiteralKind::Int, raw))
    }

    /// A string literal with contents `value`, quoted.
    pub fn string(&self, value: &str) -> Expr<'ast> {
        Expr::Literal(self.literal(LiteralKind::String, &format!("\"{value}\"")))
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub fn call(&self, callee: Expr<'ast>, args: &[Expr<'ast>]) -> Expr<'ast> {
        self.call_expr(callee, args, false)
    }

    /// `callee(args...)` with the last argument spread.
    pub fn call_spread(&self, callee: Expr<'ast>, args: &[Expr<'ast>]) -> Expr<'ast> {
        self.call_expr(callee, args, true)
    }

    /// `name(args)`
    pub fn call_named(&self, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let callee = self.name(name);
        self.call(callee, args)
    }

    /// `package.name(args)`
    pub fn call_qualified(&self, package: &str, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let callee = self.selector(self.name(package), name);
        self.call(callee, args)
    }

    fn call_expr(&self, callee: Expr<'ast>, args: &[Expr<'ast>], spread: bool) -> Expr<'ast> {
        Expr::Call(self.alloc(CallExpr {
            callee: self.alloc(callee),
            args: self.slice(args),
            spread,
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn selector(&self, object: Expr<'ast>, field: &str) -> Expr<'ast> {
        let field = self.ident(field);
        Expr::Selector(self.alloc(SelectorExpr {
            object: self.alloc(object),
            field,
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn binary(&self, left: Expr<'ast>, op: BinaryOp, right: Expr<'ast>) -> Expr<'ast> {
        Expr::Binary(self.alloc(BinaryExpr {
            left: self.alloc(left),
            op,
            right: self.alloc(right),
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn unary(&self, op: UnaryOp, operand: Expr<'ast>) -> Expr<'ast> {
        Expr::Unary(self.alloc(UnaryExpr {
            op,
            operand: self.alloc(operand),
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn not(&self, operand: Expr<'ast>) -> Expr<'ast> {
        self.unary(UnaryOp::Not, operand)
    }

    /// `*operand`
    pub fn star(&self, operand: Expr<'ast>) -> Expr<'ast> {
        Expr::Star(self.alloc(StarExpr {
            operand: self.alloc(operand),
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn paren(&self, expr: Expr<'ast>) -> Expr<'ast> {
        Expr::Paren(self.alloc(ParenExpr {
            expr: self.alloc(expr),
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn index(&self, object: Expr<'ast>, index: Expr<'ast>) -> Expr<'ast> {
        Expr::Index(self.alloc(IndexExpr {
            object: self.alloc(object),
            index: self.alloc(index),
            id: self.id(),
            span: self.span(),
        }))
    }

    /// `object[low:high]`, either bound optional.
    pub fn slice_expr(
        &self,
        object: Expr<'ast>,
        low: Option<Expr<'ast>>,
        high: Option<Expr<'ast>>,
    ) -> Expr<'ast> {
        Expr::Slice(self.alloc(SliceExpr {
            object: self.alloc(object),
            low: low.map(|e| self.alloc(e)),
            high: high.map(|e| self.alloc(e)),
            max: None,
            slice3: false,
            id: self.id(),
            span: self.span(),
        }))
    }

    /// `object[low:high:max]`
    pub fn slice3(
        &self,
        object: Expr<'ast>,
        low: Option<Expr<'ast>>,
        high: Expr<'ast>,
        max: Expr<'ast>,
    ) -> Expr<'ast> {
        Expr::Slice(self.alloc(SliceExpr {
            object: self.alloc(object),
            low: low.map(|e| self.alloc(e)),
            high: Some(self.alloc(high)),
            max: Some(self.alloc(max)),
            slice3: true,
            id: self.id(),
            span: self.span(),
        }))
    }

    pub fn type_assert(&self, object: Expr<'ast>, ty: TypeExpr<'ast>) -> Expr<'ast> {
        Expr::TypeAssert(self.alloc(TypeAssertExpr {
            object: self.alloc(object),
            ty: Some(ty),
            id: self.id(),
            span: self.span(),
        }))
    }

    /// `func() { body }`
    pub fn func_lit(&self, body: &[Stmt<'ast>]) -> Expr<'ast> {
        let ty = self.signature(&[], None);
        let body = self.block(body);
        Expr::FuncLit(self.alloc(FuncLit {
            ty,
            body,
            id: self.id(),
            span: self.span(),
        }))
    }

    /// `ty{elements}`
    pub fn composite(&self, ty: Option<TypeExpr<'ast>>, elements: &[Element<'ast>]) -> Expr<'ast> {
        Expr::CompositeLit(self.alloc(CompositeLit {
            ty,
            elements: self.slice(elements),
            id: self.id(),
            span: self.span(),
        }))
    }

    /// `key: value` with a field-name key.
    pub fn key_value(&self, key: &str, value: Expr<'ast>) -> Element<'ast> {
        let key = self.name(key);
        self.keyed(key, value)
    }

    /// `key: value` with an arbitrary key expression.
    pub fn keyed(&self, key: Expr<'ast>, value: Expr<'ast>) -> Element<'ast> {
        Element::KeyValue(KeyValue {
            key: self.alloc(key),
            value: self.alloc(value),
            span: self.span(),
        })
    }

    pub fn positional(&self, value: Expr<'ast>) -> Element<'ast> {
        Element::Positional(self.alloc(value))
    }

    /// A type used as an expression, e.g. `make`'s first argument.
    pub fn type_operand(&self, ty: TypeExpr<'ast>) -> Expr<'ast> {
        Expr::Type(self.alloc(TypeOperand {
            ty,
            id: self.id(),
            span: self.span(),
        }))
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    pub fn named_type(&self, name: &str) -> TypeExpr<'ast> {
        TypeExpr::Named(self.ident(name))
    }

    pub fn qualified_type(&self, package: &str, name: &str) -> TypeExpr<'ast> {
        let package = self.ident(package);
        let name = self.ident(name);
        TypeExpr::Qualified(QualifiedType {
            package,
            name,
            span: self.span(),
        })
    }

    /// `[]elem`
    pub fn slice_type(&self, elem: TypeExpr<'ast>) -> TypeExpr<'ast> {
        TypeExpr::Array(self.alloc(ArrayType {
            len: None,
            elem,
            span: self.span(),
        }))
    }

    /// `[len]elem`
    pub fn array_type(&self, len: Expr<'ast>, elem: TypeExpr<'ast>) -> TypeExpr<'ast> {
        TypeExpr::Array(self.alloc(ArrayType {
            len: Some(self.alloc(len)),
            elem,
            span: self.span(),
        }))
    }

    pub fn map_type(&self, key: TypeExpr<'ast>, value: TypeExpr<'ast>) -> TypeExpr<'ast> {
        TypeExpr::Map(self.alloc(MapType {
            key,
            value,
            span: self.span(),
        }))
    }

    pub fn pointer_type(&self, pointee: TypeExpr<'ast>) -> TypeExpr<'ast> {
        TypeExpr::Pointer(self.alloc(PointerType {
            pointee,
            span: self.span(),
        }))
    }

    pub fn struct_type(&self, fields: &[Field<'ast>]) -> TypeExpr<'ast> {
        TypeExpr::Struct(self.alloc(StructType {
            fields: self.slice(fields),
            span: self.span(),
        }))
    }

    pub fn interface_type(&self) -> TypeExpr<'ast> {
        TypeExpr::Interface(InterfaceType { span: self.span() })
    }

    pub fn chan_type(&self, elem: TypeExpr<'ast>) -> TypeExpr<'ast> {
        TypeExpr::Chan(self.alloc(ChanType {
            elem,
            span: self.span(),
        }))
    }

    /// A field group `names ty`; an empty `names` gives an unnamed field.
    pub fn field(&self, names: &[&str], ty: TypeExpr<'ast>) -> Field<'ast> {
        let names: Vec<Ident<'ast>> = names.iter().map(|n| self.ident(n)).collect();
        Field {
            names: self.slice(&names),
            ty,
            span: self.span(),
        }
    }

    /// A single-name parameter or field.
    pub fn param(&self, name: &str, ty: TypeExpr<'ast>) -> Field<'ast> {
        self.field(&[name], ty)
    }

    pub fn signature(&self, params: &[Field<'ast>], results: Option<&[Field<'ast>]>) -> FuncType<'ast> {
        FuncType {
            params: self.slice(params),
            results: results.map(|r| self.slice(r)),
            span: self.span(),
        }
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    pub fn expr_stmt(&self, expr: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr: self.alloc(expr),
            span: self.span(),
        })
    }

    /// `names := rhs...`
    pub fn define(&self, names: &[&str], rhs: &[Expr<'ast>]) -> Stmt<'ast> {
        let lhs: Vec<Expr<'ast>> = names.iter().map(|n| self.name(n)).collect();
        self.assign_multi(&lhs, AssignOp::Define, rhs)
    }

    /// `lhs = rhs`
    pub fn assign(&self, lhs: Expr<'ast>, rhs: Expr<'ast>) -> Stmt<'ast> {
        self.assign_multi(&[lhs], AssignOp::Assign, &[rhs])
    }

    /// `lhs op rhs` for any assignment operator.
    pub fn assign_op(&self, lhs: Expr<'ast>, op: AssignOp, rhs: Expr<'ast>) -> Stmt<'ast> {
        self.assign_multi(&[lhs], op, &[rhs])
    }

    pub fn assign_multi(&self, lhs: &[Expr<'ast>], op: AssignOp, rhs: &[Expr<'ast>]) -> Stmt<'ast> {
        Stmt::Assign(self.alloc(AssignStmt {
            lhs: self.slice(lhs),
            op,
            rhs: self.slice(rhs),
            span: self.span(),
        }))
    }

    pub fn inc(&self, target: Expr<'ast>) -> Stmt<'ast> {
        Stmt::IncDec(IncDecStmt {
            target: self.alloc(target),
            op: IncDecOp::Inc,
            span: self.span(),
        })
    }

    pub fn ret(&self, results: &[Expr<'ast>]) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt {
            results: self.slice(results),
            span: self.span(),
        })
    }

    pub fn brk(&self) -> Stmt<'ast> {
        self.branch(BranchKind::Break, None)
    }

    pub fn cont(&self) -> Stmt<'ast> {
        self.branch(BranchKind::Continue, None)
    }

    pub fn branch(&self, kind: BranchKind, label: Option<&str>) -> Stmt<'ast> {
        Stmt::Branch(BranchStmt {
            kind,
            label: label.map(|l| self.ident(l)),
            span: self.span(),
        })
    }

    pub fn block(&self, stmts: &[Stmt<'ast>]) -> Block<'ast> {
        Block {
            stmts: self.slice(stmts),
            span: self.span(),
        }
    }

    pub fn block_stmt(&self, stmts: &[Stmt<'ast>]) -> Stmt<'ast> {
        Stmt::Block(self.block(stmts))
    }

    /// `if cond { body } else ...`
    pub fn if_stmt(
        &self,
        cond: Expr<'ast>,
        body: &[Stmt<'ast>],
        else_branch: Option<Stmt<'ast>>,
    ) -> Stmt<'ast> {
        self.if_full(None, cond, body, else_branch)
    }

    /// `if cond { body } else { else_body }`
    pub fn if_else(&self, cond: Expr<'ast>, body: &[Stmt<'ast>], else_body: &[Stmt<'ast>]) -> Stmt<'ast> {
        let else_branch = self.block_stmt(else_body);
        self.if_stmt(cond, body, Some(else_branch))
    }

    /// `if init; cond { body } else ...`
    pub fn if_full(
        &self,
        init: Option<Stmt<'ast>>,
        cond: Expr<'ast>,
        body: &[Stmt<'ast>],
        else_branch: Option<Stmt<'ast>>,
    ) -> Stmt<'ast> {
        let body = self.block(body);
        Stmt::If(self.alloc(IfStmt {
            init: init.map(|s| self.alloc(s)),
            cond: self.alloc(cond),
            body,
            else_branch: else_branch.map(|s| self.alloc(s)),
            span: self.span(),
        }))
    }

    /// `for init; cond; post { body }`, every clause optional.
    pub fn for_stmt(
        &self,
        init: Option<Stmt<'ast>>,
        cond: Option<Expr<'ast>>,
        post: Option<Stmt<'ast>>,
        body: &[Stmt<'ast>],
    ) -> Stmt<'ast> {
        let body = self.block(body);
        Stmt::For(self.alloc(ForStmt {
            init: init.map(|s| self.alloc(s)),
            cond: cond.map(|e| self.alloc(e)),
            post: post.map(|s| self.alloc(s)),
            body,
            span: self.span(),
        }))
    }

    /// `for var := initial; ; { body }`
    pub fn loop_stmt(&self, var: &str, initial: Expr<'ast>, body: &[Stmt<'ast>]) -> Stmt<'ast> {
        let init = self.define(&[var], &[initial]);
        self.for_stmt(Some(init), None, None, body)
    }

    pub fn range_stmt(&self, key: &str, iterable: Expr<'ast>, body: &[Stmt<'ast>]) -> Stmt<'ast> {
        let key = self.name(key);
        let body = self.block(body);
        Stmt::Range(self.alloc(RangeStmt {
            key: Some(self.alloc(key)),
            value: None,
            define: true,
            iterable: self.alloc(iterable),
            body,
            span: self.span(),
        }))
    }

    pub fn go_stmt(&self, call: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Go(GoStmt {
            call: self.alloc(call),
            span: self.span(),
        })
    }

    pub fn defer_stmt(&self, call: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Defer(DeferStmt {
            call: self.alloc(call),
            span: self.span(),
        })
    }

    pub fn switch_stmt(&self, tag: Option<Expr<'ast>>, clauses: &[CaseClause<'ast>]) -> Stmt<'ast> {
        Stmt::Switch(self.alloc(SwitchStmt {
            init: None,
            tag: tag.map(|e| self.alloc(e)),
            clauses: self.slice(clauses),
            span: self.span(),
        }))
    }

    pub fn labeled(&self, label: &str, stmt: Stmt<'ast>) -> Stmt<'ast> {
        let label = self.ident(label);
        Stmt::Labeled(self.alloc(LabeledStmt {
            label,
            stmt,
            span: self.span(),
        }))
    }

    pub fn local_decl(&self, decl: &'ast GenDecl<'ast>) -> Stmt<'ast> {
        Stmt::Decl(DeclStmt {
            decl,
            span: self.span(),
        })
    }

    pub fn empty(&self) -> Stmt<'ast> {
        Stmt::Empty(EmptyStmt { span: self.span() })
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    /// `func name(params) results { body }` with unnamed results.
    pub fn func(
        &self,
        name: &str,
        params: &[Field<'ast>],
        results: &[TypeExpr<'ast>],
        body: &[Stmt<'ast>],
    ) -> Decl<'ast> {
        let name = self.ident(name);
        let results: Vec<Field<'ast>> = results.iter().map(|ty| self.field(&[], *ty)).collect();
        let ty = self.signature(params, (!results.is_empty()).then_some(results.as_slice()));
        let body = self.block(body);
        self.func_decl(FuncDecl {
            doc: None,
            recv: None,
            name,
            ty,
            body: Some(body),
            span: self.span(),
        })
    }

    pub fn func_decl(&self, decl: FuncDecl<'ast>) -> Decl<'ast> {
        Decl::Func(self.alloc(decl))
    }

    /// Copy `doc` into the arena for use as a doc comment.
    pub fn doc(&self, doc: &str) -> &'ast str {
        self.str(doc)
    }

    pub fn gen_decl(&self, kind: GenKind, specs: &[Spec<'ast>]) -> &'ast GenDecl<'ast> {
        self.alloc(GenDecl {
            doc: None,
            kind,
            specs: self.slice(specs),
            span: self.span(),
        })
    }

    /// `type name ty`
    pub fn type_decl(&self, name: &str, ty: TypeExpr<'ast>) -> Decl<'ast> {
        let spec = self.type_spec(name, ty);
        Decl::Gen(self.gen_decl(GenKind::Type, &[spec]))
    }

    pub fn type_spec(&self, name: &str, ty: TypeExpr<'ast>) -> Spec<'ast> {
        let name = self.ident(name);
        Spec::Type(TypeSpec {
            name,
            ty,
            span: self.span(),
        })
    }

    pub fn value_spec(
        &self,
        names: &[&str],
        ty: Option<TypeExpr<'ast>>,
        values: &[Expr<'ast>],
    ) -> Spec<'ast> {
        let names: Vec<Ident<'ast>> = names.iter().map(|n| self.ident(n)).collect();
        Spec::Value(ValueSpec {
            names: self.slice(&names),
            ty,
            values: self.slice(values),
            span: self.span(),
        })
    }

    /// `import "path"`, or `import name "path"` when renamed.
    pub fn import_spec(&self, name: Option<&str>, path: &str) -> Spec<'ast> {
        let name = name.map(|n| self.ident(n));
        let path = self.literal(LiteralKind::String, &format!("\"{path}\""));
        Spec::Import(ImportSpec {
            name,
            path,
            span: self.span(),
        })
    }

    pub fn bad_decl(&self) -> Decl<'ast> {
        Decl::Bad(BadDecl { span: self.span() })
    }

    pub fn source_file(&self, file: FileId, package: &str, decls: &[Decl<'ast>]) -> SourceFile<'ast> {
        let package = self.ident(package);
        SourceFile {
            file,
            package,
            decls: self.slice(decls),
            span: self.span(),
        }
    }
}
