use crate::operator::MatchMode;
use crate::rpneval::{eval_str, EvalErr, Evaluator};
use crate::stack::OperandStack;
use pretty_assertions::assert_eq;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval_pair(l: &str, r: &str, op: &str) -> Result<f64, EvalErr> {
    let mut ev = Evaluator::default();
    ev.process_input(l)?;
    ev.process_input(r)?;
    ev.process_input(op)?;
    ev.process_result()
}

#[test]
fn addition() {
    fuzzy_eq!(eval_pair("5", "10", "+").unwrap(), 15.0);
    fuzzy_eq!(eval_pair("12", "22", "+").unwrap(), 34.0);
    fuzzy_eq!(eval_pair("75", "75", "+").unwrap(), 150.0);
}

#[test]
fn subtraction() {
    fuzzy_eq!(eval_pair("10", "5", "-").unwrap(), 5.0);
    fuzzy_eq!(eval_pair("5", "10", "-").unwrap(), -5.0);
    fuzzy_eq!(eval_pair("27", "19", "-").unwrap(), 8.0);
    fuzzy_eq!(eval_pair("12", "20", "-").unwrap(), -8.0);
}

#[test]
fn multiplication() {
    fuzzy_eq!(eval_pair("6", "4", "*").unwrap(), 24.0);
    fuzzy_eq!(eval_pair("9", "10", "*").unwrap(), 90.0);
    fuzzy_eq!(eval_pair("7", "0.5", "*").unwrap(), 3.5);
}

#[test]
fn division() {
    fuzzy_eq!(eval_pair("21", "7", "/").unwrap(), 3.0);
    fuzzy_eq!(eval_pair("56", "8", "/").unwrap(), 7.0);
    fuzzy_eq!(eval_pair("20", "0.5", "/").unwrap(), 40.0);
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_str("1 0 /"), Ok(f64::INFINITY));
    assert!(eval_str("0 0 /").unwrap().is_nan());
}

#[test]
fn full_expressions() {
    let tests = vec![
        ("9 6 +", 15.0),
        ("22 15 -", 7.0),
        ("12 5 *", 60.0),
        ("19 4 /", 4.75),
        ("2 5 4 + *", 18.0),
        ("5 1 2 + 4 * + 3 -", 14.0),
        ("-3 -4 *", 12.0),
        ("1.5e2 .5 *", 75.0),
        ("42", 42.0),
    ];
    for (expr, expected) in tests.into_iter() {
        fuzzy_eq!(eval_str(expr).unwrap(), expected);
    }
}

#[test]
fn stack_holds_one_value_before_result() {
    let mut ev = Evaluator::default();
    for token in "2 5 4 + *".split(' ') {
        ev.process_input(token).unwrap();
    }
    assert_eq!(ev.stack().to_vec(), vec![18.0]);
    assert_eq!(ev.process_result(), Ok(18.0));
    assert!(ev.stack().is_empty());
}

#[test]
fn intermediate_stack_state() {
    let mut ev = Evaluator::default();
    ev.process_input("5").unwrap();
    ev.process_input("1").unwrap();
    ev.process_input("2").unwrap();
    assert_eq!(ev.stack().to_vec(), vec![5.0, 1.0, 2.0]);
    ev.process_input("+").unwrap();
    assert_eq!(ev.stack().to_vec(), vec![5.0, 3.0]);
    assert_eq!(ev.stack().to_string(), "5\n3");
}

#[test]
fn result_on_fresh_session() {
    assert_eq!(Evaluator::default().process_result(), Err(EvalErr::StackEmpty));
}

#[test]
fn too_many_operands() {
    assert_eq!(eval_str("1 2 3 +"), Err(EvalErr::TooManyOperands));
    assert_eq!(eval_str("1 2"), Err(EvalErr::TooManyOperands));

    let mut ev = Evaluator::default();
    for token in ["1", "2", "3", "+"] {
        ev.process_input(token).unwrap();
    }
    assert_eq!(ev.stack().to_vec(), vec![1.0, 5.0]);
    assert_eq!(ev.process_result(), Err(EvalErr::TooManyOperands));
}

#[test]
fn too_few_operands() {
    assert_eq!(eval_str("+"), Err(EvalErr::StackEmpty));
    assert_eq!(eval_str("1 +"), Err(EvalErr::StackEmpty));
    assert_eq!(eval_str("1 2 + *"), Err(EvalErr::StackEmpty));
}

#[test]
fn short_stack_consumes_popped_operands() {
    let mut ev = Evaluator::default();
    ev.process_input("1").unwrap();
    assert_eq!(ev.process_input("+"), Err(EvalErr::StackEmpty));
    assert!(ev.stack().is_empty());
}

#[test]
fn unknown_operator() {
    assert_eq!(eval_str("1 2 ^"), Err(EvalErr::UnknownOperator(format!("^"))));
    assert_eq!(eval_str("1 2 x+y"), Err(EvalErr::UnknownOperator(format!("x+y"))));
    assert_eq!(eval_str("inf 1 +"), Err(EvalErr::UnknownOperator(format!("inf"))));
    // a double space leaves an empty token behind
    assert_eq!(eval_str("1  2 +"), Err(EvalErr::UnknownOperator(format!(""))));
}

#[test]
fn first_error_stops_processing() {
    let mut ev = Evaluator::default();
    assert_eq!(ev.process_string("1 ^ +"), Err(EvalErr::UnknownOperator(format!("^"))));
    assert_eq!(ev.stack().to_vec(), vec![1.0]);
}

#[test]
fn loose_operator_matching() {
    let mut ev = Evaluator::with_mode(OperandStack::new(), MatchMode::Contains);
    assert_eq!(ev.mode(), MatchMode::Contains);
    assert_eq!(ev.process_string("1 2 x+y"), Ok(3.0));
    ev.reset();
    assert_eq!(ev.process_string("10 4 *-"), Ok(6.0));
    ev.reset();
    assert_eq!(ev.process_string("1 2 ^"), Err(EvalErr::UnknownOperator(format!("^"))));
}

#[test]
fn supplied_stack_is_cleared() {
    let ev = Evaluator::new(OperandStack::from(vec![1.0, 2.0]));
    assert!(ev.stack().is_empty());
}

#[test]
fn error_messages() {
    assert_eq!(EvalErr::StackEmpty.to_string(), "Invalid expression - too few operands");
    assert_eq!(EvalErr::TooManyOperands.to_string(), "Invalid expression - too many operands");
    assert_eq!(
        EvalErr::UnknownOperator(format!("^")).to_string(),
        "Invalid expression - unknown operator"
    );
}
