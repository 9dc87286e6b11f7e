use crate::ast::Number;
use crate::ir::{Instruction, Operand, Place, Program};

use std::fmt::{self, Display, Formatter};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register(pub u8);

/// The only register the emitter ever touches.
pub const SCRATCH: Register = Register(1);

#[derive(Debug, Clone, PartialEq)]
pub enum TargetInstruction {
    LoadConst { register: Register, value: Number },
    Store { register: Register, dest: Place },
    /// Placeholder for anything that is not an unsigned decimal constant move.
    Computed { rhs: String, dest: Place },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetCode {
    pub instructions: Vec<TargetInstruction>,
}

/// Emits target code for each IR instruction in order.
pub fn generate(program: &Program) -> TargetCode {
    let instructions = program
        .instructions
        .iter()
        .flat_map(generate_instruction)
        .collect();
    TargetCode { instructions }
}

fn generate_instruction(instruction: &Instruction) -> Vec<TargetInstruction> {
    let dest = instruction.dest().clone();
    match instruction {
        Instruction::Copy {
            value: Operand::Constant(value),
            ..
        } if value.is_unsigned_decimal() => vec![
            TargetInstruction::LoadConst {
                register: SCRATCH,
                value: *value,
            },
            TargetInstruction::Store {
                register: SCRATCH,
                dest,
            },
        ],
        Instruction::Copy { value, .. } => vec![TargetInstruction::Computed {
            rhs: value.to_string(),
            dest,
        }],
        Instruction::Binary {
            lhs, operator, rhs, ..
        } => vec![TargetInstruction::Computed {
            rhs: format!("{} {} {}", lhs, operator, rhs),
            dest,
        }],
    }
}

// Display implementations

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl Display for TargetInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TargetInstruction::LoadConst { register, value } => {
                write!(f, "LOAD_CONST {}, {}", register, value)
            }
            TargetInstruction::Store { register, dest } => write!(f, "STORE {}, {}", register, dest),
            TargetInstruction::Computed { rhs, dest } => {
                write!(f, "// Computed: {} stored in {}", rhs, dest)
            }
        }
    }
}

impl Display for TargetCode {
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
