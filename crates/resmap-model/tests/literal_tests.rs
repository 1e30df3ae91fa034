use crate::literals::{literal_int_value, parse_int_literal, parse_negated_int_literal};
use crate::syntax::{BinaryOp, LiteralKind, SyntaxArena, UnaryOp};

#[test]
fn test_decimal_literals() {
    assert_eq!(parse_int_literal("0"), Some(0));
    assert_eq!(parse_int_literal("12345"), Some(12345));
    assert_eq!(parse_int_literal("1_000_000"), Some(1_000_000));
    assert_eq!(parse_int_literal("2147483647"), Some(i32::MAX));
    assert_eq!(parse_int_literal("2147483648"), None);
}

#[test]
fn test_hex_binary_octal_literals() {
    assert_eq!(parse_int_literal("0x7f010001"), Some(0x7f01_0001));
    assert_eq!(parse_int_literal("0X7F0B0000"), Some(0x7f0b_0000));
    assert_eq!(parse_int_literal("0xFFFFFFFF"), Some(-1));
    assert_eq!(parse_int_literal("0b101"), Some(5));
    assert_eq!(parse_int_literal("017"), Some(15));
    assert_eq!(parse_int_literal("0x1_0000_0000"), None);
}

#[test]
fn test_octal_separator_after_leading_zero() {
    assert_eq!(parse_int_literal("0_7"), Some(7));
    assert_eq!(parse_int_literal("0_0"), Some(0));
    assert_eq!(parse_int_literal("0__17"), Some(15));
    assert_eq!(parse_negated_int_literal("0_7"), Some(-7));
    assert_eq!(parse_int_literal("0_"), None);
    assert_eq!(parse_int_literal("0_8"), None);
    assert_eq!(parse_int_literal("0x_1"), None);
}

#[test]
fn test_non_int_literals_are_rejected() {
    for text in ["", "12L", "0x10l", "abc", "1.5", "+3", "-3", "_1", "1_", "09", "0x"] {
        assert_eq!(parse_int_literal(text), None, "{text:?} should not parse");
    }
}

#[test]
fn test_negated_literals() {
    assert_eq!(parse_negated_int_literal("2147483648"), Some(i32::MIN));
    assert_eq!(parse_negated_int_literal("5"), Some(-5));
    assert_eq!(parse_negated_int_literal("2147483649"), None);
    assert_eq!(parse_negated_int_literal("0x1"), Some(-1));
}

#[test]
fn test_literal_int_value_accepts_signed_literals_only() {
    let mut arena = SyntaxArena::new();
    let seven = arena.add_literal(LiteralKind::Int, "7");
    let neg = arena.add_unary(UnaryOp::Neg, seven);
    let long = arena.add_literal(LiteralKind::Long, "7L");
    let a = arena.add_ident("a", None);
    let b = arena.add_ident("b", None);
    let sum = arena.add_binary(BinaryOp::Add, a, b);
    let not = arena.add_unary(UnaryOp::BitNot, seven);

    assert_eq!(literal_int_value(&arena, seven), Some(7));
    assert_eq!(literal_int_value(&arena, neg), Some(-7));
    assert_eq!(literal_int_value(&arena, long), None);
    assert_eq!(literal_int_value(&arena, sum), None);
    assert_eq!(literal_int_value(&arena, a), None);
    assert_eq!(literal_int_value(&arena, not), None);
}
