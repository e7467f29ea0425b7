//! Top-level declarations.
//!
//! Functions and structs become IR declarations. Imports and the one
//! permitted global (`var fs = filesys.Fs`) are checked and produce nothing.

use gander_core::{FileId, Span};
use gander_ir as ir;
use gander_syntax::ast::{Decl, Expr, Field, FuncDecl, FuncType, GenDecl, GenKind, LiteralKind, Spec, TypeExpr};

use crate::stmt::StmtTranslator;
use crate::type_resolver::TypeResolver;
use crate::{Context, FileContext, Result};

/// Import paths must start with this.
const IMPORT_ALLOWLIST: &str = "github.com/tchajed/goose/machine";

/// Translates the declarations of one file.
pub struct DeclTranslator<'a> {
    fcx: FileContext<'a>,
}

impl<'a> DeclTranslator<'a> {
    pub fn new(cx: &'a Context, file: FileId) -> Self {
        Self {
            fcx: FileContext::new(cx, file),
        }
    }

    fn types(&self) -> TypeResolver<'a> {
        TypeResolver::in_file(self.fcx)
    }

    /// Translate one declaration. `Ok(None)` means it was accepted but emits
    /// nothing (imports, the `fs` global, empty groups).
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn translate(&self, decl: &Decl<'_>) -> Result<Option<ir::Decl>> {
        match decl {
            Decl::Func(func) => Ok(Some(ir::Decl::Func(self.func(func)?))),
            Decl::Gen(gen_decl) => self.gen_decl(gen_decl),
            Decl::Bad(bad) => Err(self.fcx.nope(bad.span, "bad declaration in type-checked code")),
        }
    }

    fn func(&self, func: &FuncDecl<'_>) -> Result<ir::FuncDecl> {
        let fcx = &self.fcx;
        let comment = self.comment(func.doc, func.span);
        if let Some(recv) = func.recv {
            let span = recv.first().map_or(func.span, |f| f.span);
            return Err(fcx.future_work(
                span,
                "methods need to be lifted by moving the receiver to the arg list",
            ));
        }
        let args = func
            .ty
            .params
            .iter()
            .map(|p| self.field(p))
            .collect::<Result<Vec<_>>>()?;
        let return_type = self.return_type(&func.ty)?;
        let Some(body) = &func.body else {
            return Err(fcx.unsupported(func.span, format!("function {} has no body", func.name.name)));
        };
        let body = StmtTranslator::in_file(self.fcx).function_body(body)?;

        Ok(ir::FuncDecl {
            name: func.name.name.to_string(),
            args,
            return_type,
            body,
            comment,
        })
    }

    /// Results collapse to one type: `unit`, the single type, or a tuple.
    fn return_type(&self, sig: &FuncType<'_>) -> Result<ir::Type> {
        let mut types = Vec::with_capacity(sig.results().len());
        for result in sig.results() {
            if !result.names.is_empty() {
                return Err(self.fcx.unsupported(result.span, "named returned value"));
            }
            types.push(self.types().resolve(&result.ty)?);
        }
        Ok(ir::Type::tuple(types))
    }

    /// A parameter or struct field naming exactly one identifier.
    fn field(&self, field: &Field<'_>) -> Result<ir::FieldDecl> {
        let name = match field.names {
            [name] => name,
            [] => return Err(self.fcx.unsupported(field.span, "unnamed field/parameter")),
            _ => {
                return Err(self
                    .fcx
                    .future_work(field.span, "multiple fields for same type (split them up)"));
            }
        };
        Ok(ir::FieldDecl::new(name.name, self.types().resolve(&field.ty)?))
    }

    fn gen_decl(&self, d: &GenDecl<'_>) -> Result<Option<ir::Decl>> {
        match d.kind {
            GenKind::Import => {
                self.check_imports(d.specs)?;
                Ok(None)
            }
            GenKind::Const => Err(self.fcx.todo(d.span, "global constants")),
            GenKind::Var => {
                self.check_globals(d)?;
                Ok(None)
            }
            GenKind::Type => self.type_decl(d).map(|s| s.map(ir::Decl::Struct)),
        }
    }

    fn check_imports(&self, specs: &[Spec<'_>]) -> Result<()> {
        let fcx = &self.fcx;
        for spec in specs {
            let Spec::Import(import) = spec else {
                return Err(fcx.nope(spec.span(), "non-import spec in import declaration"));
            };
            let path = match import.path.kind {
                LiteralKind::String => unquote(import.path.raw),
                _ => None,
            };
            let Some(path) = path else {
                return Err(fcx.nope(import.path.span, "import path is not a string literal"));
            };
            if !path.starts_with(IMPORT_ALLOWLIST) {
                return Err(fcx.unsupported(import.span, format!("non-whitelisted import {path}")));
            }
            if let Some(name) = import.name {
                return Err(fcx.unsupported(
                    import.span,
                    format!("renaming imports (as {})", name.name),
                ));
            }
        }
        Ok(())
    }

    /// The only global is `var fs = filesys.Fs`.
    fn check_globals(&self, d: &GenDecl<'_>) -> Result<()> {
        let fcx = &self.fcx;
        let spec = match d.specs {
            [] => return Ok(()),
            [Spec::Value(spec)] => spec,
            [_] => return Err(fcx.nope(d.span, "non-value spec in var declaration")),
            _ => return Err(fcx.unsupported(d.span, "multiple vars")),
        };
        if !matches!(spec.names, [name] if name.is("fs")) {
            return Err(fcx.unsupported(spec.span, "non-fs global variable"));
        }
        let initializer_ok = match spec.values {
            [value] => is_fs_constructor(value),
            _ => false,
        };
        if !initializer_ok {
            let span = spec.values.first().map_or(spec.span, |v| v.span());
            return Err(fcx.unsupported(span, "bad initializer for fs (should be filesys.Fs)"));
        }
        Ok(())
    }

    fn type_decl(&self, d: &GenDecl<'_>) -> Result<Option<ir::StructDecl>> {
        let fcx = &self.fcx;
        let spec = match d.specs {
            [] => return Ok(None),
            [Spec::Type(spec)] => spec,
            [_] => return Err(fcx.nope(d.span, "non-type spec in type declaration")),
            _ => return Err(fcx.no_example(d.span, "multiple specs in a type decl")),
        };
        let TypeExpr::Struct(structure) = spec.ty else {
            return Err(fcx.unsupported(spec.span, format!("non-struct type {}", spec.name.name)));
        };
        let comment = self.comment(d.doc, spec.span);
        let fields = structure
            .fields
            .iter()
            .map(|f| self.field(f))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(ir::StructDecl {
            name: spec.name.name.to_string(),
            fields,
            comment,
        }))
    }

    /// Doc comment without its trailing newline, plus the origin line when
    /// configured.
    fn comment(&self, doc: Option<&str>, span: Span) -> Option<String> {
        let mut comment = doc
            .map(|d| d.strip_suffix('\n').unwrap_or(d).to_string())
            .unwrap_or_default();
        if self.fcx.config().add_source_file_comments {
            if !comment.is_empty() {
                comment.push_str("\n\n");
            }
            comment.push_str(&format!("origin: {}", self.fcx.where_(span)));
        }
        (!comment.is_empty()).then_some(comment)
    }
}

/// `filesys.Fs`, or the call form `filesys.Fs()`.
fn is_fs_constructor(expr: &Expr<'_>) -> bool {
    let expr = match expr.unparen() {
        Expr::Call(call) if call.args.is_empty() => call.callee.unparen(),
        other => other,
    };
    matches!(
        expr,
        Expr::Selector(sel) if sel.field.is("Fs") && sel.object.as_ident().is_some_and(|p| p.is("filesys"))
    )
}

/// Strip the quotes from an interpreted or raw string literal.
fn unquote(raw: &str) -> Option<&str> {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use gander_core::{Diagnostic, DiagnosticKind};
    use gander_syntax::sema::{ObjectKind, SemType};

    use super::*;
    use crate::Config;
    use crate::test_support::{Fixture, expect_err};

    fn with_doc<'ast>(fx: &Fixture<'ast>, decl: Decl<'ast>, doc: &str) -> Decl<'ast> {
        let arena = fx.b.arena();
        match decl {
            Decl::Func(f) => Decl::Func(arena.alloc(FuncDecl {
                doc: Some(fx.b.doc(doc)),
                ..*f
            })),
            Decl::Gen(g) => Decl::Gen(arena.alloc(GenDecl {
                doc: Some(fx.b.doc(doc)),
                ..*g
            })),
            bad => bad,
        }
    }

    #[test]
    fn function_signature_and_body() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let params = [b.param("a", fx.uint64()), b.param("buf", b.slice_type(fx.type_name("byte", SemType::byte())))];
        let results = [fx.uint64(), fx.uint64()];
        let func = b.func("Split", &params, &results, &[b.ret(&[fx.u64_var("a"), fx.u64_var("a")])]);

        let Some(ir::Decl::Func(out)) = fx.decl(func).unwrap() else {
            panic!("expected a function");
        };
        assert_eq!(out.name, "Split");
        assert_eq!(
            out.args,
            vec![
                ir::FieldDecl::new("a", ir::Type::uint64()),
                ir::FieldDecl::new("buf", ir::Type::slice(ir::Type::ident("byte"))),
            ]
        );
        assert_eq!(out.return_type, ir::Type::tuple(vec![ir::Type::uint64(), ir::Type::uint64()]));
        assert_eq!(out.comment, None);
    }

    #[test]
    fn no_results_is_unit() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let func = fx.b.func("noop", &[], &[], &[]);
        let Some(ir::Decl::Func(out)) = fx.decl(func).unwrap() else {
            panic!("expected a function");
        };
        assert_eq!(out.return_type, ir::Type::unit());
        assert_eq!(out.body, ir::Block::return_unit());
    }

    #[test]
    fn rejected_signatures() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let named = b.field(&["n"], fx.uint64());
        let sig = b.signature(&[], Some(&[named]));
        let func = b.func_decl(FuncDecl {
            doc: None,
            recv: None,
            name: b.ident("f"),
            ty: sig,
            body: Some(b.block(&[])),
            span: Span::point(3, 1),
        });
        let diag = expect_err(fx.decl(func), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "named returned value");

        let shared = [b.field(&["a", "b"], fx.uint64())];
        let func = b.func("g", &shared, &[], &[]);
        expect_err(fx.decl(func), DiagnosticKind::FutureWork);

        let unnamed = [b.field(&[], fx.uint64())];
        let func = b.func("h", &unnamed, &[], &[]);
        let diag = expect_err(fx.decl(func), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "unnamed field/parameter");

        let recv = [b.param("l", b.named_type("Log"))];
        let method = b.func_decl(FuncDecl {
            doc: None,
            recv: Some(b.arena().alloc_slice_copy(&recv)),
            name: b.ident("Append"),
            ty: b.signature(&[], None),
            body: Some(b.block(&[])),
            span: Span::point(9, 1),
        });
        let diag = expect_err(fx.decl(method), DiagnosticKind::FutureWork);
        assert_eq!(
            diag.message,
            "methods need to be lifted by moving the receiver to the arg list"
        );
    }

    #[test]
    fn struct_declaration_with_comment() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let fields = [
            b.param("d", b.slice_type(fx.type_name("byte", SemType::byte()))),
            b.param("sz", fx.uint64()),
        ];
        let decl = with_doc(&fx, b.type_decl("Log", b.struct_type(&fields)), "Log is an append-only log.\n");

        let Some(ir::Decl::Struct(out)) = fx.decl(decl).unwrap() else {
            panic!("expected a struct");
        };
        assert_eq!(out.name, "Log");
        assert_eq!(out.comment.as_deref(), Some("Log is an append-only log."));
        assert_eq!(
            out.fields,
            vec![
                ir::FieldDecl::new("d", ir::Type::slice(ir::Type::ident("byte"))),
                ir::FieldDecl::new("sz", ir::Type::uint64()),
            ]
        );
    }

    #[test]
    fn origin_comments_when_configured() {
        let arena = Bump::new();
        let fx = Fixture::with_config(&arena, Config::new().with_source_file_comments(true));
        let b = &fx.b;

        let bare = b.func("noop", &[], &[], &[]);
        let position = fx.context().position(fx.file, bare.span());
        let out = fx.decl(bare).unwrap().unwrap();
        assert_eq!(out.comment(), Some(format!("origin: {position}").as_str()));

        let documented = with_doc(&fx, b.func("noop", &[], &[], &[]), "Does nothing.\n");
        let position = fx.context().position(fx.file, documented.span());
        let out = fx.decl(documented).unwrap().unwrap();
        assert_eq!(
            out.comment(),
            Some(format!("Does nothing.\n\norigin: {position}").as_str())
        );
        assert!(position.to_string().starts_with("test.go:"));
    }

    #[test]
    fn type_declaration_shapes() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let alias = b.type_decl("Addr", fx.uint64());
        let diag = expect_err(fx.decl(alias), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "non-struct type Addr");

        let specs = [b.type_spec("A", b.struct_type(&[])), b.type_spec("B", b.struct_type(&[]))];
        let group = Decl::Gen(b.gen_decl(GenKind::Type, &specs));
        expect_err(fx.decl(group), DiagnosticKind::NoExample);

        let empty = Decl::Gen(b.gen_decl(GenKind::Type, &[]));
        assert_eq!(fx.decl(empty), Ok(None));
    }

    #[test]
    fn imports() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let ok = [
            b.import_spec(None, "github.com/tchajed/goose/machine"),
            b.import_spec(None, "github.com/tchajed/goose/machine/filesys"),
        ];
        assert_eq!(fx.decl(Decl::Gen(b.gen_decl(GenKind::Import, &ok))), Ok(None));

        let other = [b.import_spec(None, "fmt")];
        let diag = expect_err(
            fx.decl(Decl::Gen(b.gen_decl(GenKind::Import, &other))),
            DiagnosticKind::Unsupported,
        );
        assert_eq!(diag.message, "non-whitelisted import fmt");

        let renamed = [b.import_spec(Some("m"), "github.com/tchajed/goose/machine")];
        expect_err(
            fx.decl(Decl::Gen(b.gen_decl(GenKind::Import, &renamed))),
            DiagnosticKind::Unsupported,
        );
    }

    fn var_decl<'ast>(
        fx: &Fixture<'ast>,
        names: &[&str],
        values: &[Expr<'ast>],
    ) -> std::result::Result<Option<ir::Decl>, Diagnostic> {
        let spec = fx.b.value_spec(names, None, values);
        fx.decl(Decl::Gen(fx.b.gen_decl(GenKind::Var, &[spec])))
    }

    #[test]
    fn fs_global() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let filesys = || fx.object("filesys", ObjectKind::Package);

        assert_eq!(var_decl(&fx, &["fs"], &[b.selector(filesys(), "Fs")]), Ok(None));
        assert_eq!(var_decl(&fx, &["fs"], &[b.call(b.selector(filesys(), "Fs"), &[])]), Ok(None));

        let diag = expect_err(var_decl(&fx, &["disk"], &[b.selector(filesys(), "Fs")]), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "non-fs global variable");

        let diag = expect_err(var_decl(&fx, &["fs"], &[b.selector(filesys(), "Open")]), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "bad initializer for fs (should be filesys.Fs)");
        expect_err(var_decl(&fx, &["fs"], &[]), DiagnosticKind::Unsupported);

        let specs = [
            b.value_spec(&["fs"], None, &[b.selector(filesys(), "Fs")]),
            b.value_spec(&["x"], None, &[fx.int("1")]),
        ];
        let diag = expect_err(
            fx.decl(Decl::Gen(b.gen_decl(GenKind::Var, &specs))),
            DiagnosticKind::Unsupported,
        );
        assert_eq!(diag.message, "multiple vars");
    }

    #[test]
    fn constants_and_bad_decls() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let spec = b.value_spec(&["N"], None, &[fx.int("4096")]);
        let diag = expect_err(fx.decl(Decl::Gen(b.gen_decl(GenKind::Const, &[spec]))), DiagnosticKind::Todo);
        assert_eq!(diag.message, "global constants");

        let diag = expect_err(fx.decl(b.bad_decl()), DiagnosticKind::Nope);
        assert!(diag.is_translator_defect());
    }

    #[test]
    fn unquoting() {
        assert_eq!(unquote("\"fmt\""), Some("fmt"));
        assert_eq!(unquote("`fmt`"), Some("fmt"));
        assert_eq!(unquote("fmt"), None);
    }
}
