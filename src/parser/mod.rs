pub mod expression;

#[cfg(test)]
pub mod test;

use crate::ast::Statement;
use crate::error::SyntaxError;
use crate::lexer::{Token, TokenKind};

use std::iter::Peekable;
use std::slice::Iter;

type TokenIter<'a> = Peekable<Iter<'a, Token>>;

// Returned when the stream runs dry. `tokenize` always ends with its own end marker.
static END: Token = Token {
    kind: TokenKind::EndOfInput,
    lexeme: String::new(),
    line: 0,
    column: 0,
    span: 0..0,
};

pub struct Parser<'a> {
    tokens: TokenIter<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens: tokens.iter().peekable(),
        }
    }

    /// `program := (statement SEMI)* EOF`, skipping stray semicolons between statements.
    pub fn parse_program(&mut self) -> Result<Vec<Statement>, SyntaxError> {
        let mut statements = vec![];
        loop {
            while self.check(TokenKind::Semicolon) {
                self.tokens.next();
            }
            if self.check(TokenKind::EndOfInput) {
                break;
            }

            statements.push(self.parse_statement()?);

            if !self.check(TokenKind::Semicolon) {
                return Err(SyntaxError::missing_semicolon(self.peek()));
            }
            self.tokens.next();
        }
        Ok(statements)
    }

    /// Exactly one `statement SEMI`, with nothing after it.
    pub fn parse_single(&mut self) -> Result<Statement, SyntaxError> {
        let statement = self.parse_statement()?;
        self.expect(TokenKind::Semicolon)?;
        if !self.check(TokenKind::EndOfInput) {
            return Err(SyntaxError::extra_input(self.peek()));
        }
        Ok(statement)
    }

    /// `statement := IDENT ASSIGN expression`
    pub fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        let target = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;
        let expression = self.parse_expression()?;
        Ok(Statement {
            target: (target.lexeme.clone(), target.span.clone()),
            expression,
        })
    }

    fn peek(&mut self) -> &'a Token {
        self.tokens.peek().copied().unwrap_or(&END)
    }

    fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, SyntaxError> {
        let token = self.peek();
        if token.kind != kind {
            return Err(SyntaxError::unexpected(kind.to_string(), token));
        }
        self.tokens.next();
        Ok(token)
    }
}
