//! Call expressions.
//!
//! Three kinds of callee:
//! - builtins (`make`, `new`, `len`, `append`, and the `uint64` conversion),
//!   which become primitives
//! - the `fs` and `machine` namespaces, whose operations are renamed
//! - declared functions, called by name

use gander_ir::{self as ir, prim};
use gander_syntax::ast::{CallExpr, Expr, TypeExpr};
use gander_syntax::sema::{BasicKind, ObjectKind, SemType};

use super::{ExprTranslator, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Make,
    New,
    Len,
    Append,
    ToUint64,
}

impl Builtin {
    /// The builtin a callee names, unless the program shadowed it.
    fn of(tr: &ExprTranslator<'_>, callee: &Expr<'_>) -> Option<Self> {
        let ident = callee.as_ident()?;
        if tr.fcx().object_of(ident.id).is_some_and(ObjectKind::is_value) {
            return None;
        }
        match ident.name {
            "make" => Some(Self::Make),
            "new" => Some(Self::New),
            "len" => Some(Self::Len),
            "append" => Some(Self::Append),
            "uint64" => Some(Self::ToUint64),
            _ => None,
        }
    }
}

/// Translate a call.
pub(super) fn translate_call(tr: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<ir::Expr> {
    match Builtin::of(tr, call.callee) {
        Some(Builtin::Make) => translate_make(tr, call),
        Some(Builtin::New) => translate_new(tr, call),
        Some(Builtin::Len) => translate_len(tr, call),
        Some(Builtin::Append) => translate_append(tr, call),
        Some(Builtin::ToUint64) => translate_to_uint64(tr, call),
        None => {
            let method = method_name(tr, call.callee)?;
            if call.spread {
                return Err(tr
                    .fcx()
                    .unsupported(call.span, format!("variadic call to {method}")));
            }
            Ok(ir::Expr::call(method, tr.translate_all(call.args)?))
        }
    }
}

fn first_arg<'ast>(tr: &ExprTranslator<'_>, call: &CallExpr<'ast>, builtin: &str) -> Result<&'ast Expr<'ast>> {
    call.args
        .first()
        .ok_or_else(|| tr.fcx().nope(call.span, format!("{builtin}() without arguments")))
}

/// `make(map[uint64]V)` allocates a hash table. Slices are a known gap.
fn translate_make(tr: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    let arg = first_arg(tr, call, "make")?;
    let Expr::Type(operand) = arg.unparen() else {
        return Err(fcx.nope(arg.span(), "make() of a non-type operand"));
    };
    match operand.ty {
        TypeExpr::Map(map) => {
            if let Some(hint) = call.args.get(1) {
                return Err(fcx.no_example(hint.span(), "make() of a map with a size hint"));
            }
            let value = tr.types().map_value(map)?;
            Ok(ir::Expr::call(prim::NEW_HASH_TABLE, vec![ir::Expr::Type(value)]))
        }
        TypeExpr::Array(array) => {
            if !array.is_slice() {
                return Err(fcx.nope(array.span, "can't make() arrays (only slices)"));
            }
            Err(fcx.todo(array.span, "array types are not really implemented"))
        }
        other => Err(fcx.nope(other.span(), format!("make() of {other}, not a map or slice"))),
    }
}

/// `new(T)` allocates a reference cell holding T's zero value.
fn translate_new(tr: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<ir::Expr> {
    let arg = first_arg(tr, call, "new")?;
    let ty = tr.types().resolve_operand(arg)?;
    Ok(ir::Expr::call(
        prim::NEW_IOREF,
        vec![ir::Expr::call(prim::ZERO_VALUE, vec![ir::Expr::Type(ty)])],
    ))
}

fn translate_len(tr: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    let x = first_arg(tr, call, "len")?;
    let Some(ty) = fcx.type_of(x.id()) else {
        return Err(fcx.nope(x.span(), "no type recorded for len() operand"));
    };
    if !matches!(ty.underlying(), SemType::Slice(_)) {
        return Err(fcx.unsupported(call.span, format!("length of object of type {ty}")));
    }
    Ok(ir::Expr::pure_call(prim::SLICE_LENGTH, vec![tr.translate(x)?]))
}

/// `append(s, x)` and `append(s1, s2...)` are different primitives.
fn translate_append(tr: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<ir::Expr> {
    let [slice, value] = call.args else {
        return Err(tr.fcx().unsupported(
            call.span,
            format!("append with {} arguments", call.args.len()),
        ));
    };
    let method = if call.spread {
        prim::SLICE_APPEND_SLICE
    } else {
        prim::SLICE_APPEND
    };
    Ok(ir::Expr::call(method, vec![tr.translate(slice)?, tr.translate(value)?]))
}

/// `uint64(x)` is the identity when x is already an integer of that width
/// (or an untyped constant that becomes one).
fn translate_to_uint64(tr: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    let x = first_arg(tr, call, "uint64")?;
    match fcx.type_of(x.id()) {
        Some(SemType::Basic(BasicKind::Uint64 | BasicKind::Int | BasicKind::UntypedInt)) => tr.translate(x),
        Some(ty) => Err(fcx.unsupported(call.span, format!("casts from non-int type {ty} to uint64"))),
        None => Err(fcx.nope(x.span(), "no type recorded for conversion operand")),
    }
}

/// The IR name of a called function.
fn method_name(tr: &ExprTranslator<'_>, callee: &Expr<'_>) -> Result<String> {
    let fcx = tr.fcx();
    match callee {
        Expr::Ident(ident) => match fcx.object_of(ident.id) {
            Some(kind) if kind.is_value() => Ok(ident.name.to_string()),
            Some(ObjectKind::TypeName) => {
                Err(fcx.unsupported(ident.span, format!("conversion to {}", ident.name)))
            }
            Some(_) => Err(fcx.unsupported(ident.span, format!("call to builtin {}", ident.name))),
            None => Err(fcx.nope(ident.span, format!("unresolved function {}", ident.name))),
        },
        Expr::Selector(sel) => {
            let namespace = sel.object.as_ident().map(|ident| ident.name);
            let op = sel.field.name;
            match (namespace, op) {
                (Some("fs"), "ReadAt") => Ok(prim::SLICE_READ_AT.to_string()),
                (Some("fs"), "Append") => Ok(prim::SLICE_FILE_APPEND.to_string()),
                (Some("fs"), _) => Ok(format!("{}{}", prim::FS_PREFIX, lower_initial(op))),
                (Some("machine"), "UInt64Get") => Ok(prim::UINT64_GET.to_string()),
                (Some("machine"), "UInt64Encode") => Ok(prim::UINT64_PUT.to_string()),
                (Some("machine"), _) => {
                    Err(fcx.unsupported(sel.span, format!("memory operation machine.{op}")))
                }
                (namespace, _) => Err(fcx.unsupported(
                    sel.span,
                    format!(
                        "cannot call methods selected from {}",
                        namespace.unwrap_or("an expression")
                    ),
                )),
            }
        }
        other => Err(fcx.unsupported(other.span(), "call on expression")),
    }
}

fn lower_initial(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
