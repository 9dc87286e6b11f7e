use super::*;
use crate::lexer::tokenize;

use ariadne::Source;

fn render(error: &CompileError, source: &str) -> String {
    let mut buffer = Vec::new();
    error
        .report("test")
        .write(("test".to_string(), Source::from(source.to_string())), &mut buffer)
        .unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_syntax_error_message() {
    let tokens = tokenize("x 1;").unwrap();
    let err = SyntaxError::unexpected("ASSIGN", &tokens[1]);
    assert_eq!(
        err.to_string(),
        "Syntax Error: Expected ASSIGN at line 1 column 3, got '1' (NUMBER)."
    );
    assert_eq!(err.span(), 2..3);
}

#[test]
fn test_unexpected_end_of_input_message() {
    let tokens = tokenize("x =").unwrap();
    let err = SyntaxError::unexpected("NUMBER, identifier, or '('", &tokens[2]);
    assert_eq!(
        err.to_string(),
        "Syntax Error: Expected NUMBER, identifier, or '(' at line 1 column 4, got 'None' (EOF)."
    );
}

#[test]
fn test_compile_error_is_transparent() {
    let err: CompileError = SemanticError::DivisionByZero { span: 4..9 }.into();
    assert_eq!(err.to_string(), "Semantic Error: Division by zero.");
    assert_eq!(err.code(), "SemanticError");
    assert_eq!(err.span(), 4..9);
}

#[test]
fn test_report_renders_message() {
    let source = "x = 1 @ 2;";
    let err: CompileError = tokenize(source).unwrap_err().into();
    let rendered = render(&err, source);
    assert!(rendered.contains("Lexical Error: Unexpected character '@' at line 1 column 7"));
}

#[test]
fn test_report_at_end_of_input() {
    let source = "x = 1 + 2";
    let tokens = tokenize(source).unwrap();
    let err: CompileError = SyntaxError::missing_semicolon(tokens.last().unwrap()).into();
    assert_eq!(err.span(), 9..9);
    let rendered = render(&err, source);
    assert!(rendered.contains("Missing semicolon"));
}
