use crate::lexer::{Token, TokenKind};

use ariadne::{Color, ColorGenerator, Config, Fmt, IndexType, Label, Report, ReportKind};
use thiserror::Error;

use std::ops::Range;

#[cfg(test)]
pub mod test;

pub type Diagnostic = Report<'static, (String, Range<usize>)>;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Lexical Error: Unexpected character {character:?} at line {line} column {column}")]
pub struct LexicalError {
    pub character: char,
    pub line: usize,
    pub column: usize,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error(
        "Syntax Error: Expected {expected} at line {line} column {column}, got '{found_lexeme}' ({found_kind})."
    )]
    Unexpected {
        expected: String,
        found_kind: TokenKind,
        found_lexeme: String,
        line: usize,
        column: usize,
        span: Range<usize>,
    },

    #[error("Syntax Error: Missing semicolon at line {line} column {column}.")]
    MissingSemicolon {
        line: usize,
        column: usize,
        span: Range<usize>,
    },

    #[error("Syntax Error: Extra input after valid statement at line {line} column {column}.")]
    ExtraInput {
        line: usize,
        column: usize,
        span: Range<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticError {
    #[error("Semantic Error: Division by zero.")]
    DivisionByZero { span: Range<usize> },
}

/// The errors a compilation reports in its trace. Anything else is a bug and panics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl SyntaxError {
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        SyntaxError::Unexpected {
            expected: expected.into(),
            found_kind: found.kind,
            found_lexeme: found.value().to_string(),
            line: found.line,
            column: found.column,
            span: found.span.clone(),
        }
    }

    pub fn missing_semicolon(found: &Token) -> Self {
        SyntaxError::MissingSemicolon {
            line: found.line,
            column: found.column,
            span: found.span.clone(),
        }
    }

    pub fn extra_input(found: &Token) -> Self {
        SyntaxError::ExtraInput {
            line: found.line,
            column: found.column,
            span: found.span.clone(),
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            SyntaxError::Unexpected { span, .. }
            | SyntaxError::MissingSemicolon { span, .. }
            | SyntaxError::ExtraInput { span, .. } => span.clone(),
        }
    }
}

impl CompileError {
    pub fn span(&self) -> Range<usize> {
        match self {
            CompileError::Lexical(e) => e.span.clone(),
            CompileError::Syntax(e) => e.span(),
            CompileError::Semantic(SemanticError::DivisionByZero { span }) => span.clone(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CompileError::Lexical(_) => "LexicalError",
            CompileError::Syntax(_) => "SyntaxError",
            CompileError::Semantic(_) => "SemanticError",
        }
    }

    fn label(&self) -> String {
        match self {
            CompileError::Lexical(e) => format!(
                "unexpected character {}",
                Fmt::fg(format!("{:?}", e.character), Color::Red)
            ),
            CompileError::Syntax(SyntaxError::Unexpected {
                expected,
                found_kind,
                found_lexeme,
                ..
            }) => {
                let found = match found_kind {
                    TokenKind::EndOfInput => "end of input".to_string(),
                    _ => format!("'{}'", found_lexeme),
                };
                format!(
                    "expected {}, found {}",
                    Fmt::fg(expected, Color::Yellow),
                    Fmt::fg(found, Color::Red)
                )
            }
            CompileError::Syntax(SyntaxError::MissingSemicolon { .. }) => format!(
                "expected {} to end the statement",
                Fmt::fg("';'", Color::Yellow)
            ),
            CompileError::Syntax(SyntaxError::ExtraInput { .. }) => {
                "input continues after the statement".to_string()
            }
            CompileError::Semantic(_) => "right operand folds to zero".to_string(),
        }
    }

    /// Builds an ariadne report pointing at the offending span of `file`.
    pub fn report(&self, file: &str) -> Diagnostic {
        let span = self.span();
        Report::build(ReportKind::Error, (file.to_string(), span.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_code(self.code())
            .with_message(self.to_string())
            .with_label(
                Label::new((file.to_string(), span))
                    .with_message(self.label())
                    .with_color(ColorGenerator::new().next()),
            )
            .finish()
    }
}
