//! # Symbolic Engine Module
//!
//! Core data model of the crate: real-valued functions are kept as expression trees so that
//! derivatives and simplifications are computed exactly instead of numerically.
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! Immutable expression tree:
//! - **Leaves**: `Const(f64)` and `Var(String)`
//! - **Operations**: `Neg`, `Add`, `Sub`, `Mul`, `Div`, `Pow`
//! - **Named functions**: `Call(Func, Vec<Expr>)`, where `Func` is one of
//!   `log, exp, pow, abs, sqrt, sin, cos, tan, asin, acos, atan`
//!
//! ### `Lambda`
//! Ordered list of parameter names plus one body: a scalar function of N named real variables.
//!
//! ### `ArrayLambda`
//! Ordered list of parameter names plus an ordered list of bodies: the input of a vector field.
//!
//! ## Interesting Code Features
//!
//! 1. **Persistent trees**: every transformation builds a new tree, inputs are only borrowed,
//!    so one subtree may be reused in as many results as needed
//!
//! 2. **Structural equality**: `PartialEq` compares trees by value, which is what the
//!    simplifier uses to recognise `x / x`
//!
//! 3. **Operator Overloading**: `std::ops` traits build nodes, so `x.clone() * y + Expr::Const(1.0)`
//!    reads like the formula it represents

use crate::symbolic::symbolic_errors::SymbolicError;
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Named mathematical functions that may appear in a `Call` node.
///
/// `Pow` takes two arguments (base, exponent), every other function takes exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Func {
    /// natural logarithm
    Log,
    Exp,
    Pow,
    Abs,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl Func {
    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Func::Pow => 2,
            _ => 1,
        }
    }

    /// Numerical value of the function, `None` if `args` does not match the arity.
    pub fn apply(self, args: &[f64]) -> Option<f64> {
        match (self, args) {
            (Func::Pow, [base, exponent]) => Some(base.powf(*exponent)),
            (Func::Log, [x]) => Some(x.ln()),
            (Func::Exp, [x]) => Some(x.exp()),
            (Func::Abs, [x]) => Some(x.abs()),
            (Func::Sqrt, [x]) => Some(x.sqrt()),
            (Func::Sin, [x]) => Some(x.sin()),
            (Func::Cos, [x]) => Some(x.cos()),
            (Func::Tan, [x]) => Some(x.tan()),
            (Func::Asin, [x]) => Some(x.asin()),
            (Func::Acos, [x]) => Some(x.acos()),
            (Func::Atan, [x]) => Some(x.atan()),
            _ => None,
        }
    }
}

/// Core symbolic expression enum representing a real-valued formula as a tree.
///
/// # Examples
/// ```
/// use RustedVecCalc::symbolic::symbolic_engine::Expr;
/// let x = Expr::var("x");
/// let expr = x.clone().sin() * x + Expr::Const(2.0);
/// assert_eq!(expr.to_string(), "((sin(x) * x) + 2)");
/// ```
#[derive(Clone, Debug)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Symbolic variable, bound by name to a parameter of the enclosing lambda
    Var(String),
    /// Negation: -operand
    Neg(Box<Expr>),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Named function applied to its arguments
    Call(Func, Vec<Expr>),
}

/// Structural equality. Two NaN constants are equal, so a folded `log(-1)` compares equal to
/// itself.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Const(a), Expr::Const(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Expr::Var(a), Expr::Var(b)) => a == b,
            (Expr::Neg(a), Expr::Neg(b)) => a == b,
            (Expr::Add(a1, a2), Expr::Add(b1, b2))
            | (Expr::Sub(a1, a2), Expr::Sub(b1, b2))
            | (Expr::Mul(a1, a2), Expr::Mul(b1, b2))
            | (Expr::Div(a1, a2), Expr::Div(b1, b2))
            | (Expr::Pow(a1, a2), Expr::Pow(b1, b2)) => a1 == b1 && a2 == b2,
            (Expr::Call(f, a), Expr::Call(g, b)) => f == g && a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Neg(expr) => write!(f, "-({})", expr),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Call(func, args) => {
                let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
                write!(f, "{}({})", func, args.join(", "))
            }
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Neg(self.boxed())
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates a variable node.
    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// # Examples
    /// ```
    /// use RustedVecCalc::symbolic::symbolic_engine::Expr;
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        symbols
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Expr::var)
            .collect()
    }

    /// Builds a call node without checking the number of arguments.
    pub fn call(func: Func, args: Vec<Expr>) -> Expr {
        Expr::Call(func, args)
    }

    /// Builds a call node, refusing argument lists that do not match the arity of `func`.
    pub fn try_call(func: Func, args: Vec<Expr>) -> Result<Expr, SymbolicError> {
        if args.len() != func.arity() {
            return Err(SymbolicError::ArgumentCount {
                expected: func.arity(),
                found: args.len(),
            });
        }
        Ok(Expr::Call(func, args))
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn ln(self) -> Expr {
        Expr::call(Func::Log, vec![self])
    }

    pub fn exp(self) -> Expr {
        Expr::call(Func::Exp, vec![self])
    }

    /// `Pow` node (the operator form). For the named function use `pow_call`.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    pub fn pow_call(self, rhs: Expr) -> Expr {
        Expr::call(Func::Pow, vec![self, rhs])
    }

    pub fn abs(self) -> Expr {
        Expr::call(Func::Abs, vec![self])
    }

    pub fn sqrt(self) -> Expr {
        Expr::call(Func::Sqrt, vec![self])
    }

    pub fn sin(self) -> Expr {
        Expr::call(Func::Sin, vec![self])
    }

    pub fn cos(self) -> Expr {
        Expr::call(Func::Cos, vec![self])
    }

    pub fn tan(self) -> Expr {
        Expr::call(Func::Tan, vec![self])
    }

    pub fn asin(self) -> Expr {
        Expr::call(Func::Asin, vec![self])
    }

    pub fn acos(self) -> Expr {
        Expr::call(Func::Acos, vec![self])
    }

    pub fn atan(self) -> Expr {
        Expr::call(Func::Atan, vec![self])
    }

    /// Value of a constant node, `None` for anything else.
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(val) => Some(*val),
            _ => None,
        }
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }

    /// Checks if expression is exactly one (constant 1.0).
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 1.0)
    }
}

/// Scalar function of N named real variables: ordered parameter names plus one body.
#[derive(Clone, Debug)]
pub struct Lambda {
    pub parameters: Vec<String>,
    pub body: Expr,
}

impl Lambda {
    pub fn new(parameters: &[&str], body: Expr) -> Self {
        Self {
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
            body,
        }
    }

    /// Builds a lambda sharing an already owned parameter list.
    pub fn with_parameters(parameters: Vec<String>, body: Expr) -> Self {
        Self { parameters, body }
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) => {}", self.parameters.join(", "), self.body)
    }
}

/// Array-valued function: ordered parameter names plus one body per output component.
#[derive(Clone, Debug)]
pub struct ArrayLambda {
    pub parameters: Vec<String>,
    pub bodies: Vec<Expr>,
}

impl ArrayLambda {
    pub fn new(parameters: &[&str], bodies: Vec<Expr>) -> Self {
        Self {
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
            bodies,
        }
    }

    pub fn with_parameters(parameters: Vec<String>, bodies: Vec<Expr>) -> Self {
        Self { parameters, bodies }
    }
}

impl fmt::Display for ArrayLambda {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bodies: Vec<String> = self.bodies.iter().map(|b| b.to_string()).collect();
        write!(f, "({}) => {{{}}}", self.parameters.join(", "), bodies.join(", "))
    }
}
