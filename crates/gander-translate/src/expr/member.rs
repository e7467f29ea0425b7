//! Member access: field selection, indexing, and slicing.

use gander_ir::{self as ir, prim};
use gander_syntax::ast::{IndexExpr, SelectorExpr, SliceExpr};
use gander_syntax::sema::{ObjectKind, SemType};

use super::{ExprTranslator, Result};

/// `x.f` on a named struct becomes the projection `Name.f x`.
pub(super) fn translate_selector(tr: &ExprTranslator<'_>, sel: &SelectorExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    if let Some(object) = sel.object.as_ident()
        && fcx.object_of(object.id) == Some(ObjectKind::Package)
    {
        return Err(fcx.unsupported(
            sel.span,
            format!("package member {}.{} used as a value", object.name, sel.field.name),
        ));
    }

    let Some(ty) = fcx.type_of(sel.object.id()) else {
        return Err(fcx.nope(sel.object.span(), "no type recorded for selected object"));
    };
    match ty {
        SemType::Named(named) if matches!(named.underlying.underlying(), SemType::Struct(_)) => {
            let arg = tr.translate(sel.object)?;
            Ok(ir::Expr::proj(format!("{}.{}", named.name, sel.field.name), arg))
        }
        other => Err(fcx.unsupported(sel.span, format!("field selection on {other}"))),
    }
}

/// `m[k]` on a map is a lookup. Slice indexing is a known gap.
pub(super) fn translate_index(tr: &ExprTranslator<'_>, index: &IndexExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    let Some(ty) = fcx.type_of(index.object.id()) else {
        return Err(fcx.nope(index.object.span(), "no type recorded for indexed object"));
    };
    match ty.underlying() {
        SemType::Map(..) => Ok(ir::Expr::call(
            prim::HASH_TABLE_LOOKUP,
            vec![tr.translate(index.object)?, tr.translate(index.index)?],
        )),
        SemType::Slice(_) => Err(fcx.todo(index.span, "slice indexing")),
        _ => Err(fcx.unsupported(index.span, format!("index into unknown type {ty}"))),
    }
}

/// `s[lo:]`, `s[:hi]`, and `s[lo:hi]` are three different pure primitives.
pub(super) fn translate_slice(tr: &ExprTranslator<'_>, slice: &SliceExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    if slice.slice3 {
        return Err(fcx.unsupported(slice.span, "3-index slice"));
    }
    let x = tr.translate(slice.object)?;
    match (slice.low, slice.high) {
        (Some(low), None) => Ok(ir::Expr::pure_call(prim::SLICE_SKIP, vec![tr.translate(low)?, x])),
        (None, Some(high)) => Ok(ir::Expr::pure_call(prim::SLICE_TAKE, vec![tr.translate(high)?, x])),
        (Some(low), Some(high)) => Ok(ir::Expr::pure_call(
            prim::SLICE_SUBSLICE,
            vec![tr.translate(low)?, tr.translate(high)?, x],
        )),
        (None, None) => Err(fcx.unsupported(slice.span, "complete slice doesn't do anything")),
    }
}
