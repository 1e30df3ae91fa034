//! Integer literal parsing for field initializers.
//!
//! Follows the host language's `int` literal rules: decimal, `0x` hex,
//! `0b` binary and leading-zero octal, with `_` digit separators. Non-decimal
//! literals denote 32-bit patterns and wrap (`0xFFFFFFFF` is `-1`); a decimal
//! literal must fit `i32` except `2147483648`, which is only valid negated.

use crate::syntax::{LiteralKind, Node, NodeIndex, SyntaxArena, UnaryOp};

fn split_radix(text: &str) -> (&str, u32) {
    if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (rest, 16)
    } else if let Some(rest) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (rest, 2)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    }
}

/// Digits with separators removed, or `None` if the text is not a well-formed
/// digit sequence in `radix`.
fn clean_digits(digits: &str, radix: u32) -> Option<String> {
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }
    let mut out = String::with_capacity(digits.len());
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        if !c.is_digit(radix) {
            return None;
        }
        out.push(c);
    }
    Some(out)
}

fn parse_magnitude(text: &str) -> Option<(u64, u32)> {
    let text = text.trim();
    if text.ends_with(['l', 'L']) {
        return None;
    }
    let (digits, radix) = split_radix(text);
    // Octal allows separators right after the leading `0` (`0_7`).
    let digits = if radix == 8 {
        digits.trim_start_matches('_')
    } else {
        digits
    };
    let digits = clean_digits(digits, radix)?;
    let value = u64::from_str_radix(&digits, radix).ok()?;
    Some((value, radix))
}

/// Parses the text of an `int` literal.
pub fn parse_int_literal(text: &str) -> Option<i32> {
    let (value, radix) = parse_magnitude(text)?;
    if radix == 10 {
        i32::try_from(value).ok()
    } else {
        u32::try_from(value).ok().map(|bits| bits as i32)
    }
}

/// Parses the text of an `int` literal appearing under unary minus.
pub fn parse_negated_int_literal(text: &str) -> Option<i32> {
    let (value, radix) = parse_magnitude(text)?;
    if radix == 10 {
        if value > 1 << 31 {
            return None;
        }
        i32::try_from(-(value as i64)).ok()
    } else {
        u32::try_from(value)
            .ok()
            .map(|bits| (bits as i32).wrapping_neg())
    }
}

/// Value of an initializer that is an integer literal, optionally under a
/// unary sign. Any other expression (`a + b`, a reference, a call) yields
/// `None` even if a compiler could fold it.
pub fn literal_int_value(arena: &SyntaxArena, idx: NodeIndex) -> Option<i32> {
    match arena.get(idx)? {
        Node::Literal(lit) if lit.kind == LiteralKind::Int => parse_int_literal(&lit.text),
        Node::Unary { op, operand } => {
            let Some(Node::Literal(lit)) = arena.get(*operand) else {
                return None;
            };
            if lit.kind != LiteralKind::Int {
                return None;
            }
            match op {
                UnaryOp::Neg => parse_negated_int_literal(&lit.text),
                UnaryOp::Plus => parse_int_literal(&lit.text),
                UnaryOp::BitNot | UnaryOp::Not => None,
            }
        }
        _ => None,
    }
}
