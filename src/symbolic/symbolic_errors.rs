//! Error types of the symbolic engine.
//!
//! None of these errors is fatal: vector-field construction falls back to an empty field,
//! the vector operators and evaluation report them through `Result`.
use std::fmt;

/// Error types for symbolic vector calculus and evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicError {
    /// array-valued lambda whose number of parameters differs from the number of components
    ShapeMismatch { parameters: usize, components: usize },
    /// operator defined only for fields of a fixed dimension (curl needs 3 components)
    WrongDimension {
        operation: &'static str,
        expected: usize,
        found: usize,
    },
    /// operator applied to a field with no components
    EmptyField { operation: &'static str },
    /// variable that is not among the parameters the expression is evaluated with
    UnboundVariable(String),
    /// wrong number of values passed to a function or a named function with wrong arity
    ArgumentCount { expected: usize, found: usize },
    InvalidLogLevel(String),
}

impl fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolicError::ShapeMismatch {
                parameters,
                components,
            } => write!(
                f,
                "Unequal number of parameters ({}) and return values ({})",
                parameters, components
            ),
            SymbolicError::WrongDimension {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{} is only defined for {}-dimensional vector fields, not for {}-dimensional ones",
                operation, expected, found
            ),
            SymbolicError::EmptyField { operation } => {
                write!(f, "No functions in vector field, cannot compute {}", operation)
            }
            SymbolicError::UnboundVariable(name) => write!(f, "Unbound variable: {}", name),
            SymbolicError::ArgumentCount { expected, found } => {
                write!(f, "Expected {} arguments, found {}", expected, found)
            }
            SymbolicError::InvalidLogLevel(level) => write!(
                f,
                "Invalid loglevel: {} (must be debug, info, warn, error, off or none)",
                level
            ),
        }
    }
}

impl std::error::Error for SymbolicError {}
