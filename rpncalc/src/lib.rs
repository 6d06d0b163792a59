#![deny(warnings)]

pub use self::operator::{MatchMode, Operator};
pub use self::rpneval::{eval_str, EvalErr, Evaluator};
pub use self::stack::{OperandStack, StackEmpty};
pub use self::token::Token;

mod scanner;
mod token;

mod stack;

mod operator;

mod rpneval;
#[cfg(test)]
mod rpneval_test;
