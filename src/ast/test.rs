use super::*;

#[test]
fn test_number_from_str() {
    assert_eq!("42".parse::<Number>(), Ok(Number::Int(42)));
    assert_eq!("3.25".parse::<Number>(), Ok(Number::Float(3.25)));
    assert_eq!("0".parse::<Number>(), Ok(Number::Int(0)));
}

#[test]
fn test_large_integer_stays_exact() {
    let n = "99999999999999999999".parse::<Number>().unwrap();
    assert_eq!(n, Number::Int(99999999999999999999));
    assert_eq!(n.to_string(), "99999999999999999999");
}

#[test]
fn test_integer_beyond_i128_becomes_float() {
    let n = "1000000000000000000000000000000000000000000"
        .parse::<Number>()
        .unwrap();
    assert!(matches!(n, Number::Float(_)));
}

#[test]
fn test_exponent_display() {
    assert_eq!(Number::Float(1e17).to_string(), "1e+17");
    assert_eq!(Number::Float(1.5e-5).to_string(), "1.5e-05");
    assert_eq!(Number::Float(1.25e300).to_string(), "1.25e+300");
    assert_eq!(Number::Float(123456.5).to_string(), "123456.5");
}

#[test]
fn test_unsigned_decimal() {
    assert!(Number::Int(14).is_unsigned_decimal());
    assert!(Number::Float(3.5).is_unsigned_decimal());
    assert!(!Number::Int(-4).is_unsigned_decimal());
    assert!(!Number::Float(-0.0).is_unsigned_decimal());
    assert!(!Number::Float(1e17).is_unsigned_decimal());
    assert!(!Number::Float(f64::INFINITY).is_unsigned_decimal());
}

#[test]
fn test_number_display() {
    assert_eq!(Number::Int(14).to_string(), "14");
    assert_eq!(Number::Int(-4).to_string(), "-4");
    assert_eq!(Number::Float(2.0).to_string(), "2.0");
    assert_eq!(Number::Float(0.5).to_string(), "0.5");
}

#[test]
fn test_binary_span_covers_operands() {
    let (_, span) = Expr::binary(
        BinOp::Add,
        (Expr::Identifier("a".to_string()), 4..5),
        (Expr::Number(Number::Int(1)), 8..9),
    );
    assert_eq!(span, 4..9);
}

#[test]
fn test_statement_display() {
    let statement = Statement {
        target: ("x".to_string(), 0..1),
        expression: Expr::binary(
            BinOp::Mul,
            (Expr::Number(Number::Int(2)), 4..5),
            (Expr::Identifier("y".to_string()), 8..9),
        ),
    };
    assert_eq!(
        statement.to_string(),
        "Assign(x, BinOp(*, Number(2), Identifier(y)))"
    );
}
