use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
#[error("stack is empty")]
pub struct StackEmpty;

/// LIFO store of intermediate values, top is the tail of the vec.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OperandStack(Vec<f64>);

impl OperandStack {
    pub fn new() -> OperandStack {
        OperandStack(Vec::new())
    }

    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub fn pop(&mut self) -> Result<f64, StackEmpty> {
        self.0.pop().ok_or(StackEmpty)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Snapshot of the contents, bottom to top.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.clone()
    }
}

impl From<Vec<f64>> for OperandStack {
    fn from(values: Vec<f64>) -> OperandStack {
        OperandStack(values)
    }
}

// one value per line, bottom to top
impl fmt::Display for OperandStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines = self.0.iter().map(|v| v.to_string()).collect::<Vec<String>>();
        write!(f, "{}", lines.join("\n"))
    }
}
