use crate::error::LexicalError;

use logos::{Logos, Skip};

use std::fmt::{self, Display, Formatter};
use std::ops::Range;


/// Line bookkeeping carried in the logos extras while scanning.
#[derive(Debug, Clone, Copy)]
pub struct LineTracker {
    pub line: usize,
    pub line_start: usize,
}

impl Default for LineTracker {
    fn default() -> Self {
        LineTracker {
            line: 1,
            line_start: 0,
        }
    }
}

impl LineTracker {
    /// 1-based `(line, column)` of a byte offset on the current line. Columns count characters.
    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let column = source[self.line_start..offset].chars().count() + 1;
        (self.line, column)
    }
}

fn newline(lex: &mut logos::Lexer<RawToken>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LineTracker)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[A-Za-z_]\w*")]
    Identifier,

    #[token("=")]
    Assign,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(";")]
    Semicolon,

    #[regex(r"\r?\n", newline)]
    Newline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Semicolon,
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: Range<usize>,
}

impl RawToken {
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Number => TokenKind::Number,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Newline => return None,
        };
        Some(kind)
    }
}

impl Token {
    /// The literal text, or `None` for the end marker.
    pub fn value(&self) -> &str {
        match self.kind {
            TokenKind::EndOfInput => "None",
            _ => &self.lexeme,
        }
    }
}

/// Scans `source` into tokens, always terminated by a single `EndOfInput`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = vec![];

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let (line, column) = lexer.extras.position(source, span.start);

        let Ok(raw) = raw else {
            let character = source[span.start..].chars().next().unwrap_or_default();
            return Err(LexicalError {
                character,
                line,
                column,
                span: span.start..span.start + character.len_utf8(),
            });
        };

        let Some(kind) = raw.kind() else {
            continue;
        };

        tokens.push(Token {
            kind,
            lexeme: lexer.slice().to_string(),
            line,
            column,
            span,
        });
    }

    let end = source.len();
    let (line, column) = lexer.extras.position(source, end);
    tokens.push(Token {
        kind: TokenKind::EndOfInput,
        lexeme: String::new(),
        line,
        column,
        span: end..end,
    });

    Ok(tokens)
}

// Display implementations

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "ID",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MUL",
            TokenKind::Slash => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMI",
            TokenKind::EndOfInput => "EOF",
        };
        write!(f, "{}", s)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.kind,
            self.value(),
            self.line,
            self.column
        )
    }
}
