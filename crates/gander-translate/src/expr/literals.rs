//! Literal expressions. Only integer literals exist in the IR.

use gander_ir as ir;
use gander_syntax::ast::{LiteralExpr, LiteralKind};

use super::{ExprTranslator, Result};

/// Why an integer literal has no `u64` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntLiteralError {
    Malformed,
    Overflow,
}

/// Translate a basic literal.
pub(super) fn translate_literal(tr: &ExprTranslator<'_>, lit: &LiteralExpr<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    if lit.kind != LiteralKind::Int {
        return Err(fcx.unsupported(lit.span, "non-integer literals are not supported"));
    }
    match parse_int_literal(lit.raw) {
        Ok(value) => Ok(ir::Expr::IntLit(value)),
        Err(IntLiteralError::Overflow) => Err(fcx.unsupported(
            lit.span,
            format!("integer literal {} does not fit in 64 bits", lit.raw),
        )),
        Err(IntLiteralError::Malformed) => {
            Err(fcx.nope(lit.span, format!("malformed integer literal {}", lit.raw)))
        }
    }
}

/// Parse an integer literal in source syntax: decimal, `0x`, `0o`, `0b`,
/// legacy `0`-prefixed octal, with `_` digit separators.
pub(crate) fn parse_int_literal(raw: &str) -> std::result::Result<u64, IntLiteralError> {
    let (radix, digits) = match raw.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &raw[2..]),
        [b'0', b'o' | b'O', ..] => (8, &raw[2..]),
        [b'0', b'b' | b'B', ..] => (2, &raw[2..]),
        [b'0', _, ..] => (8, &raw[1..]),
        _ => (10, raw),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix).ok_or(IntLiteralError::Malformed)?;
        seen_digit = true;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(IntLiteralError::Overflow)?;
    }

    if !seen_digit {
        return Err(IntLiteralError::Malformed);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use gander_core::DiagnosticKind;

    use super::*;
    use crate::test_support::{Fixture, expect_err};

    #[test]
    fn literal_syntaxes() {
        assert_eq!(parse_int_literal("0"), Ok(0));
        assert_eq!(parse_int_literal("4096"), Ok(4096));
        assert_eq!(parse_int_literal("1_000_000"), Ok(1_000_000));
        assert_eq!(parse_int_literal("0xFF"), Ok(255));
        assert_eq!(parse_int_literal("0X_ff"), Ok(255));
        assert_eq!(parse_int_literal("0o17"), Ok(15));
        assert_eq!(parse_int_literal("017"), Ok(15));
        assert_eq!(parse_int_literal("0b1010"), Ok(10));
        assert_eq!(parse_int_literal("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn literal_failures() {
        assert_eq!(
            parse_int_literal("18446744073709551616"),
            Err(IntLiteralError::Overflow)
        );
        assert_eq!(parse_int_literal("0x"), Err(IntLiteralError::Malformed));
        assert_eq!(parse_int_literal("09"), Err(IntLiteralError::Malformed));
        assert_eq!(parse_int_literal("12a"), Err(IntLiteralError::Malformed));
        assert_eq!(parse_int_literal(""), Err(IntLiteralError::Malformed));
    }

    #[test]
    fn integer_literals_translate() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        assert_eq!(fx.expr(fx.int("0x10")), Ok(ir::Expr::IntLit(16)));
    }

    #[test]
    fn other_literals_are_unsupported() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let s = fx.b.string("log");
        let diag = expect_err(fx.expr(s), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "non-integer literals are not supported");

        let f = gander_syntax::ast::Expr::Literal(fx.b.literal(LiteralKind::Float, "1.5"));
        expect_err(fx.expr(f), DiagnosticKind::Unsupported);
    }

    #[test]
    fn oversized_literal_is_unsupported() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let big = fx.int("0x1_0000_0000_0000_0000");
        let diag = expect_err(fx.expr(big), DiagnosticKind::Unsupported);
        assert!(diag.message.contains("does not fit"));
    }
}
