use super::*;
use crate::ast::{BinOp, Expr, Number};
use crate::lexer::tokenize;

fn parse_str(input: &str) -> Result<Vec<Statement>, SyntaxError> {
    let tokens = tokenize(input).expect("input should lex");
    Parser::new(&tokens).parse_program()
}

fn parse_single_str(input: &str) -> Result<Statement, SyntaxError> {
    let tokens = tokenize(input).expect("input should lex");
    Parser::new(&tokens).parse_single()
}

#[test]
fn test_parse_simple_assignment() {
    let ast = parse_str("x = 5;").unwrap();
    assert_eq!(ast.len(), 1);
    assert_eq!(ast[0].target, ("x".to_string(), 0..1));
    assert_eq!(ast[0].expression, (Expr::Number(Number::Int(5)), 4..5));
}

#[test]
fn test_precedence_binds_mul_tighter() {
    let ast = parse_str("x = 2 + 3 * 4;").unwrap();
    let Expr::BinOp {
        operator,
        l_value,
        r_value,
    } = &ast[0].expression.0
    else {
        panic!("Expected binary operation");
    };
    assert_eq!(*operator, BinOp::Add);
    assert!(matches!(l_value.0, Expr::Number(Number::Int(2))));
    assert!(matches!(
        r_value.0,
        Expr::BinOp {
            operator: BinOp::Mul,
            ..
        }
    ));
    assert_eq!(ast[0].expression.1, 4..13);
}

#[test]
fn test_left_associativity() {
    let ast = parse_str("x = a - b - c;").unwrap();
    assert_eq!(
        ast[0].to_string(),
        "Assign(x, BinOp(-, BinOp(-, Identifier(a), Identifier(b)), Identifier(c)))"
    );

    let ast = parse_str("x = a / b * c;").unwrap();
    assert_eq!(
        ast[0].to_string(),
        "Assign(x, BinOp(*, BinOp(/, Identifier(a), Identifier(b)), Identifier(c)))"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    let ast = parse_str("x = (2 + 3) * 4;").unwrap();
    assert_eq!(
        ast[0].to_string(),
        "Assign(x, BinOp(*, BinOp(+, Number(2), Number(3)), Number(4)))"
    );
    let Expr::BinOp { l_value, .. } = &ast[0].expression.0 else {
        panic!("Expected binary operation");
    };
    // the grouped operand spans its parentheses
    assert_eq!(l_value.1, 4..11);
}

#[test]
fn test_decimal_literal() {
    let ast = parse_str("y = 2.5;").unwrap();
    assert_eq!(ast[0].expression.0, Expr::Number(Number::Float(2.5)));
}

#[test]
fn test_multiple_statements_and_stray_semicolons() {
    let ast = parse_str(";; a = 1;;\nb = a * 2;").unwrap();
    assert_eq!(ast.len(), 2);
    assert_eq!(ast[0].target.0, "a");
    assert_eq!(ast[1].target.0, "b");
}

#[test]
fn test_empty_program() {
    assert!(parse_str("").unwrap().is_empty());
    assert!(parse_str(" ; ;").unwrap().is_empty());
}

#[test]
fn test_missing_assign() {
    let err = parse_str("x 1;").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::Unexpected {
            expected: "ASSIGN".to_string(),
            found_kind: TokenKind::Number,
            found_lexeme: "1".to_string(),
            line: 1,
            column: 3,
            span: 2..3,
        }
    );
}

#[test]
fn test_missing_semicolon() {
    let err = parse_str("x = 1 + 2").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::MissingSemicolon {
            line: 1,
            column: 10,
            ..
        }
    ));
    assert!(err.to_string().contains("Missing semicolon"));
}

#[test]
fn test_missing_semicolon_between_statements() {
    let err = parse_str("a = 1\nb = 2;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax Error: Missing semicolon at line 2 column 1."
    );
}

#[test]
fn test_missing_operand() {
    let err = parse_str("x = 1 + ;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax Error: Expected NUMBER, identifier, or '(' at line 1 column 9, got ';' (SEMI)."
    );
}

#[test]
fn test_unclosed_parenthesis() {
    let err = parse_str("x = (1 + 2;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax Error: Expected RPAREN at line 1 column 11, got ';' (SEMI)."
    );
}

#[test]
fn test_statement_must_start_with_identifier() {
    let err = parse_str("5 = x;").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Unexpected {
            found_kind: TokenKind::Number,
            ..
        }
    ));
}

#[test]
fn test_parse_single() {
    let statement = parse_single_str("z = a * (b + 1);").unwrap();
    assert_eq!(
        statement.to_string(),
        "Assign(z, BinOp(*, Identifier(a), BinOp(+, Identifier(b), Number(1))))"
    );
}

#[test]
fn test_parse_single_rejects_extra_input() {
    let err = parse_single_str("a = 1; b = 2;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax Error: Extra input after valid statement at line 1 column 8."
    );
}

#[test]
fn test_parse_single_requires_semicolon() {
    let err = parse_single_str("a = 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax Error: Expected SEMI at line 1 column 6, got 'None' (EOF)."
    );
}
