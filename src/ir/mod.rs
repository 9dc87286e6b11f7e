use crate::ast::{BinOp, Number};

use std::fmt::{self, Display, Formatter};

pub mod builder;


pub use builder::IRBuilder;

/// How long a temporary counter lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TempScope {
    /// One counter for the whole statement list.
    #[default]
    Program,
    /// Restart at `t1` for every statement.
    Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Constant(Number),
    Variable(String),
    Temp(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    Variable(String),
    Temp(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Binary {
        dest: Place,
        lhs: Operand,
        operator: BinOp,
        rhs: Operand,
    },
    Copy {
        dest: Place,
        value: Operand,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Instruction {
    pub fn dest(&self) -> &Place {
        match self {
            Instruction::Binary { dest, .. } | Instruction::Copy { dest, .. } => dest,
        }
    }
}

// Display implementations

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Constant(c) => write!(f, "{}", c),
            Operand::Variable(name) => write!(f, "{}", name),
            Operand::Temp(n) => write!(f, "t{}", n),
        }
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Place::Variable(name) => write!(f, "{}", name),
            Place::Temp(n) => write!(f, "t{}", n),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Binary {
                dest,
                lhs,
                operator,
                rhs,
            } => write!(f, "{} = {} {} {}", dest, lhs, operator, rhs),
            Instruction::Copy { dest, value } => write!(f, "{} = {}", dest, value),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
