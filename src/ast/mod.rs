use std::fmt::{self, Display, Formatter};
use std::num::ParseFloatError;
use std::ops::Range;
use std::str::FromStr;

#[cfg(test)]
pub mod test;

pub type Spanned<T> = (T, Range<usize>);

/// A single `target = expression` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub target: Spanned<String>,
    pub expression: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    Identifier(String),
    BinOp {
        operator: BinOp,
        l_value: Box<Spanned<Expr>>,
        r_value: Box<Spanned<Expr>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Literal value. Integers stay exact until an operation forces a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Expr {
    /// Builds a binary node whose span runs from the left operand to the right one.
    pub fn binary(operator: BinOp, l_value: Spanned<Expr>, r_value: Spanned<Expr>) -> Spanned<Expr> {
        let span = l_value.1.start..r_value.1.end;
        (
            Expr::BinOp {
                operator,
                l_value: Box::new(l_value),
                r_value: Box::new(r_value),
            },
            span,
        )
    }
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// True when the value prints as bare digits with an optional fraction,
    /// i.e. no sign and no exponent.
    pub fn is_unsigned_decimal(self) -> bool {
        self.to_string()
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.')
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl FromStr for Number {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('.') {
            if let Ok(i) = s.parse::<i128>() {
                return Ok(Number::Int(i));
            }
        }
        s.parse::<f64>().map(Number::Float)
    }
}

// Display implementations

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the fractional part on whole floats (`2.0`); the
            // exponent is widened to a signed two-digit form (`1e+20`, `1.5e-05`)
            Number::Float(fl) => {
                let repr = format!("{:?}", fl);
                match repr.split_once('e') {
                    Some((mantissa, exponent)) => {
                        let (sign, digits) = match exponent.strip_prefix('-') {
                            Some(digits) => ("-", digits),
                            None => ("+", exponent),
                        };
                        write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
                    }
                    None => write!(f, "{}", repr),
                }
            }
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "Number({})", n),
            Expr::Identifier(name) => write!(f, "Identifier({})", name),
            Expr::BinOp {
                operator,
                l_value,
                r_value,
            } => write!(f, "BinOp({}, {}, {})", operator, l_value.0, r_value.0),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Assign({}, {})", self.target.0, self.expression.0)
    }
}
