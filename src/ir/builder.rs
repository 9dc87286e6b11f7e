use super::*;
use crate::ast::{Expr, Statement};

use tracing::debug;

pub struct IRBuilder {
    program: Program,
    temp_counter: usize,
    scope: TempScope,
}

impl IRBuilder {
    pub fn new(scope: TempScope) -> Self {
        Self {
            program: Program::default(),
            temp_counter: 0,
            scope,
        }
    }

    pub fn generate_program(&mut self, statements: &[Statement]) -> Program {
        for statement in statements {
            if self.scope == TempScope::Statement {
                self.temp_counter = 0;
            }
            self.generate_statement(statement);
        }
        debug!(
            instructions = self.program.instructions.len(),
            last_temp = self.temp_counter,
            "lowered statements"
        );
        std::mem::take(&mut self.program)
    }

    /// Lowers the expression, then copies its result into the target.
    pub fn generate_statement(&mut self, statement: &Statement) {
        let value = self.generate_expr(&statement.expression.0);
        self.add_instruction(Instruction::Copy {
            dest: Place::Variable(statement.target.0.clone()),
            value,
        });
    }

    fn generate_expr(&mut self, expr: &Expr) -> Operand {
        match expr {
            Expr::Number(n) => Operand::Constant(*n),
            Expr::Identifier(name) => Operand::Variable(name.clone()),
            Expr::BinOp {
                operator,
                l_value,
                r_value,
            } => {
                // left subtree first, so its temporaries get the lower numbers
                let lhs = self.generate_expr(&l_value.0);
                let rhs = self.generate_expr(&r_value.0);
                let temp = self.new_temp();
                self.add_instruction(Instruction::Binary {
                    dest: Place::Temp(temp),
                    lhs,
                    operator: *operator,
                    rhs,
                });
                Operand::Temp(temp)
            }
        }
    }

    fn new_temp(&mut self) -> usize {
        self.temp_counter += 1;
        self.temp_counter
    }

    fn add_instruction(&mut self, instruction: Instruction) {
        self.program.instructions.push(instruction);
    }
}
