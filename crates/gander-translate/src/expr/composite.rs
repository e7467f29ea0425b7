//! Struct literals.
//!
//! Only fully keyed literals of a named struct are accepted, and every
//! declared field must be given exactly once. Field values are kept in
//! source order.

use gander_ir as ir;
use gander_syntax::ast::{CompositeLit, Element, TypeExpr};
use rustc_hash::FxHashSet;

use super::{ExprTranslator, Result};

pub(super) fn translate_struct_literal(tr: &ExprTranslator<'_>, lit: &CompositeLit<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    let Some(ty) = fcx.type_of(lit.id) else {
        return Err(fcx.nope(lit.span, "no type recorded for composite literal"));
    };
    let Some(declared) = ty.struct_fields() else {
        return Err(fcx.unsupported(lit.span, "non-struct literal"));
    };
    let struct_name = match lit.ty {
        Some(TypeExpr::Named(ident)) => ident.name,
        Some(TypeExpr::Qualified(q)) => {
            return Err(fcx.no_example(q.span, "struct literal of a type from another package"));
        }
        Some(other) => return Err(fcx.unsupported(other.span(), format!("literal of type {other}"))),
        None => return Err(fcx.no_example(lit.span, "struct literal with elided type")),
    };

    let mut seen = FxHashSet::default();
    let mut fields = Vec::with_capacity(lit.elements.len());
    for element in lit.elements {
        let kv = match element {
            Element::KeyValue(kv) => kv,
            Element::Positional(value) => {
                return Err(fcx.unsupported(value.span(), "positional struct literal"));
            }
        };
        let Some(key) = kv.key.as_ident() else {
            return Err(fcx.no_example(kv.key.span(), "struct field keyed by non-identifier"));
        };
        if !declared.iter().any(|f| f.name == key.name) {
            return Err(fcx.nope(
                key.span,
                format!("unknown field {} in {struct_name} literal", key.name),
            ));
        }
        if !seen.insert(key.name) {
            return Err(fcx.nope(key.span, format!("duplicate field {} in literal", key.name)));
        }
        fields.push(ir::FieldVal {
            field: key.name.to_string(),
            value: tr.translate(kv.value)?,
        });
    }

    if let Some(missing) = declared.iter().find(|f| !seen.contains(f.name.as_str())) {
        return Err(fcx.unsupported(
            lit.span,
            format!("incomplete struct literal (missing field {})", missing.name),
        ));
    }

    Ok(ir::Expr::StructLit(ir::StructLit {
        struct_name: struct_name.to_string(),
        fields,
    }))
}
