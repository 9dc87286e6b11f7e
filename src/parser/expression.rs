use crate::ast::{BinOp, Expr, Number, Spanned};
use crate::error::SyntaxError;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// `expression := term ((PLUS|MINUS) term)*`
    pub fn parse_expression(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut l_expr = self.parse_term()?;
        loop {
            let operator = match self.peek().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => return Ok(l_expr),
            };
            self.tokens.next();
            let r_expr = self.parse_term()?;
            l_expr = Expr::binary(operator, l_expr, r_expr);
        }
    }

    /// `term := factor ((STAR|SLASH) factor)*`
    pub fn parse_term(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut l_expr = self.parse_factor()?;
        loop {
            let operator = match self.peek().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => return Ok(l_expr),
            };
            self.tokens.next();
            let r_expr = self.parse_factor()?;
            l_expr = Expr::binary(operator, l_expr, r_expr);
        }
    }

    /// `factor := NUMBER | IDENT | LPAREN expression RPAREN`
    pub fn parse_factor(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Number => {
                let value = token
                    .lexeme
                    .parse::<Number>()
                    .map_err(|_| SyntaxError::unexpected("NUMBER", token))?;
                self.tokens.next();
                Ok((Expr::Number(value), token.span.clone()))
            }
            TokenKind::Identifier => {
                self.tokens.next();
                Ok((Expr::Identifier(token.lexeme.clone()), token.span.clone()))
            }
            TokenKind::LParen => {
                self.tokens.next();
                let (expr, _) = self.parse_expression()?;
                let close = self.expect(TokenKind::RParen)?;
                Ok((expr, token.span.start..close.span.end))
            }
            _ => Err(SyntaxError::unexpected(
                "NUMBER, identifier, or '('",
                token,
            )),
        }
    }
}
