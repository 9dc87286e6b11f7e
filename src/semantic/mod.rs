use crate::ast::{BinOp, Expr, Number, Spanned, Statement};
use crate::error::SemanticError;

use tracing::trace;

use std::ops::Range;


/// Folds every statement, stopping at the first error.
pub fn analyze(statements: &[Statement]) -> Result<Vec<Statement>, SemanticError> {
    statements.iter().map(fold_statement).collect()
}

pub fn fold_statement(statement: &Statement) -> Result<Statement, SemanticError> {
    Ok(Statement {
        target: statement.target.clone(),
        expression: fold_expr(&statement.expression)?,
    })
}

/// Bottom-up constant folding. A node collapses only when both operands are literals.
pub fn fold_expr(expr: &Spanned<Expr>) -> Result<Spanned<Expr>, SemanticError> {
    let (node, span) = expr;
    match node {
        Expr::Number(_) | Expr::Identifier(_) => Ok(expr.clone()),
        Expr::BinOp {
            operator,
            l_value,
            r_value,
        } => {
            let l_folded = fold_expr(l_value)?;
            let r_folded = fold_expr(r_value)?;
            if let (Expr::Number(l), Expr::Number(r)) = (&l_folded.0, &r_folded.0) {
                let value = evaluate(*operator, *l, *r, span)?;
                trace!(%operator, %value, "folded constant");
                return Ok((Expr::Number(value), span.clone()));
            }
            Ok((
                Expr::BinOp {
                    operator: *operator,
                    l_value: Box::new(l_folded),
                    r_value: Box::new(r_folded),
                },
                span.clone(),
            ))
        }
    }
}

/// Integer arithmetic stays exact until it overflows; division is always true division.
pub fn evaluate(
    operator: BinOp,
    l: Number,
    r: Number,
    span: &Range<usize>,
) -> Result<Number, SemanticError> {
    use Number::*;
    let value = match (operator, l, r) {
        (BinOp::Div, _, r) if r.is_zero() => {
            return Err(SemanticError::DivisionByZero { span: span.clone() });
        }
        (BinOp::Div, l, r) => Float(l.as_f64() / r.as_f64()),
        (BinOp::Add, Int(a), Int(b)) => a.checked_add(b).map_or(Float(a as f64 + b as f64), Int),
        (BinOp::Sub, Int(a), Int(b)) => a.checked_sub(b).map_or(Float(a as f64 - b as f64), Int),
        (BinOp::Mul, Int(a), Int(b)) => a.checked_mul(b).map_or(Float(a as f64 * b as f64), Int),
        (BinOp::Add, l, r) => Float(l.as_f64() + r.as_f64()),
        (BinOp::Sub, l, r) => Float(l.as_f64() - r.as_f64()),
        (BinOp::Mul, l, r) => Float(l.as_f64() * r.as_f64()),
    };
    Ok(value)
}
