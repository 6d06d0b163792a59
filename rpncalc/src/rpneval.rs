use crate::operator::{MatchMode, Operator};
use crate::stack::{OperandStack, StackEmpty};
use crate::token::Token;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, PartialEq)]
pub enum EvalErr {
    #[error("Invalid expression - too few operands")]
    StackEmpty,
    #[error("Invalid expression - too many operands")]
    TooManyOperands,
    #[error("Invalid expression - unknown operator")]
    UnknownOperator(String),
}

impl From<StackEmpty> for EvalErr {
    fn from(_: StackEmpty) -> EvalErr {
        EvalErr::StackEmpty
    }
}

/// An evaluation session: owns the operand stack until the result is taken.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: OperandStack,
    mode: MatchMode,
}

impl Evaluator {
    pub fn new(stack: OperandStack) -> Evaluator {
        Self::with_mode(stack, MatchMode::default())
    }

    pub fn with_mode(mut stack: OperandStack, mode: MatchMode) -> Evaluator {
        stack.clear();
        Evaluator { stack, mode }
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Feed a whole space separated expression and take its result.
    /// Stops at the first failing token.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn process_string(&mut self, expr: &str) -> Result<f64, EvalErr> {
        for token in expr.split(' ') {
            self.process_input(token)?;
        }
        self.process_result()
    }

    pub fn process_input(&mut self, token: &str) -> Result<(), EvalErr> {
        match Token::classify(token) {
            Token::Operand(num) => {
                self.process_operand(num);
                Ok(())
            }
            Token::Operator(op) => self.process_operator(op),
        }
    }

    pub fn process_operand(&mut self, num: f64) {
        trace!(num, "push operand");
        self.stack.push(num);
    }

    pub fn process_operator(&mut self, token: &str) -> Result<(), EvalErr> {
        let op = Operator::lookup(token, self.mode)
            .ok_or_else(|| EvalErr::UnknownOperator(token.to_string()))?;
        // top of the stack first, a lone operand is consumed before failing
        let args = [self.stack.pop()?, self.stack.pop()?];
        let result = op.apply(args);
        debug!(?op, ?args, result, "apply operator");
        self.stack.push(result);
        Ok(())
    }

    /// Take the final value, it must be the only one left.
    pub fn process_result(&mut self) -> Result<f64, EvalErr> {
        let result = self.stack.pop()?;
        if !self.stack.is_empty() {
            debug!(leftover = self.stack.len(), "operands left on stack");
            return Err(EvalErr::TooManyOperands);
        }
        Ok(result)
    }
}

/// One-shot evaluation on a fresh session.
pub fn eval_str(expr: &str) -> Result<f64, EvalErr> {
    Evaluator::default().process_string(expr)
}
