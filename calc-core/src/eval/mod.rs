
pub mod error;

use std::path::PathBuf;

use crate::{
    environment::prelude::Environment,
    parser::prelude::{parse_source, Assignment, BinaryOp, Expression, Infix},
    utils::prelude::{Error, SrcSpan}
};
use error::{RuntimeError, RuntimeErrorType};

/// Parses and evaluates one input line against the session environment.
/// Bindings made before a failure stay in place.
pub fn interpret(path: PathBuf, src: &str, env: &mut Environment) -> Result<i64, Error> {
    let expression = match parse_source(src) {
        Ok(expression) => expression,
        Err(error) => return Err(Error::from_parse(path, src.to_string(), error))
    };

    match eval(&expression, env) {
        Ok(value) => Ok(value),
        Err(error) => Err(Error::Runtime {
            path,
            src: src.to_string(),
            error
        })
    }
}

pub fn eval(expression: &Expression, env: &mut Environment) -> Result<i64, RuntimeError> {
    match expression {
        Expression::Literal(literal) => Ok(literal.value),
        Expression::Identifier(identifier) => {
            match env.get(&identifier.value) {
                Some(value) => Ok(value),
                None => runtime_error(
                    RuntimeErrorType::UndefinedVariable {
                        name: identifier.value.clone()
                    },
                    identifier.location
                )
            }
        },
        Expression::Assignment(assignment) => eval_assignment(assignment, env),
        Expression::Infix(infix) => eval_infix(infix, env),
        Expression::Sequence(sequence) => {
            eval(&sequence.first, env)?;

            eval(&sequence.second, env)
        }
    }
}

fn eval_assignment(assignment: &Assignment, env: &mut Environment) -> Result<i64, RuntimeError> {
    let value = eval(&assignment.value, env)?;

    env.set(assignment.identifier.value.clone(), value);

    Ok(value)
}

fn eval_infix(infix: &Infix, env: &mut Environment) -> Result<i64, RuntimeError> {
    let left = eval(&infix.left, env)?;
    let right = eval(&infix.right, env)?;

    match infix.operator {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            // Checked only after both operands ran, so side effects of
            // the right-hand side land even when the division faults.
            if right == 0 {
                return runtime_error(RuntimeErrorType::DivisionByZero, infix.location);
            }

            Ok(left.wrapping_div(right))
        }
    }
}

fn runtime_error<T>(error: RuntimeErrorType, location: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, location })
}
