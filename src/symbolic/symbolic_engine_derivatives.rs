//! # Symbolic Engine Derivatives Module
//!
//! Analytical differentiation of expression trees.
//!
//! ## Key Methods
//! - `Expr::diff(var)` - derivative of a body with respect to one named variable, all other
//!   variables are treated as constants
//! - `Lambda::derivative(var)` - same, keeping the parameter list of the lambda
//! - `Lambda::nth_derivative(var, n)` - the single-variable rule applied n times in a row
//! - `Lambda::gradient_components()` - all partial derivatives, in parameter order
//! - `Lambda::compare_num(..)` - validates an analytical partial against central differences
//!
//! ## Rules
//! Every rule is structural recursion on the node kind:
//! - constant: 0, variable: 1 or 0
//! - negation: -1 * f'
//! - sum and difference: f' + g', f' - g'
//! - product: f*g' + g*f'
//! - quotient: (g*f' - f*g') / g^2
//! - general power: f^g * (g' * ln(f) + g * f' / f), valid for f > 0
//! - named functions: outer rule times the derivative of the argument (chain rule)
//!
//! No rule simplifies its output: `diff` of `x * y` with respect to `x` is
//! `(x * 0) + (y * 1)`. Use `simplify` on the result to reduce it.

use crate::symbolic::symbolic_engine::{Expr, Func, Lambda};
use crate::symbolic::symbolic_errors::SymbolicError;
use crate::symbolic::utils::{central_difference, linspace, norm, transpose};
use log::warn;

/// step of the central difference used by `compare_num`
const NUMERICAL_STEP: f64 = 1e-6;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// # Examples
    /// ```
    /// use RustedVecCalc::symbolic::symbolic_engine::Expr;
    /// let x = Expr::var("x");
    /// let dsin = x.clone().sin().diff("x");
    /// assert_eq!(dsin, x.clone().cos() * Expr::Const(1.0));
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Neg(expr) => Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(expr.diff(var))),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
                Box::new(Expr::Mul(rhs.clone(), Box::new(lhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(rhs.clone(), Box::new(lhs.diff(var)))),
                    Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
                )),
                Box::new(Expr::Pow(rhs.clone(), Box::new(Expr::Const(2.0)))),
            ),
            Expr::Pow(base, exp) => Self::diff_power(base, exp, var),
            Expr::Call(func, args) => Self::diff_call(*func, args, var),
        }
    } // end of diff

    /// (f^g)' = f^g * (g' * ln(f) + g * f' / f)
    fn diff_power(base: &Expr, exp: &Expr, var: &str) -> Expr {
        Expr::Mul(
            Box::new(Expr::Pow(Box::new(base.clone()), Box::new(exp.clone()))),
            Box::new(Expr::Add(
                Box::new(Expr::Mul(
                    Box::new(exp.diff(var)),
                    Box::new(Expr::call(Func::Log, vec![base.clone()])),
                )),
                Box::new(Expr::Div(
                    Box::new(Expr::Mul(Box::new(exp.clone()), Box::new(base.diff(var)))),
                    Box::new(base.clone()),
                )),
            )),
        )
    }

    /// Chain rule for named functions: outer(arg) * arg'.
    fn diff_call(func: Func, args: &[Expr], var: &str) -> Expr {
        if let (Func::Pow, [base, exp]) = (func, args) {
            return Self::diff_power(base, exp, var);
        }
        if let [arg] = args {
            if let Some(outer) = Self::outer_derivative(func, arg) {
                return Expr::Mul(Box::new(outer), Box::new(arg.diff(var)));
            }
        }
        // malformed call: differentiate the first argument as is
        warn!(
            "{} called with {} arguments instead of {}, differentiating its first argument",
            func,
            args.len(),
            func.arity()
        );
        args.first().map_or(Expr::Const(0.0), |first| first.diff(var))
    }

    /// Derivative of a one-argument function, evaluated at `arg`. `None` for `Pow`.
    fn outer_derivative(func: Func, arg: &Expr) -> Option<Expr> {
        let one = || Box::new(Expr::Const(1.0));
        let two = || Box::new(Expr::Const(2.0));
        let squared = || Box::new(Expr::Pow(Box::new(arg.clone()), two()));
        // sqrt(1 - x^2)
        let sqrt_one_minus_squared =
            || Box::new(Expr::call(Func::Sqrt, vec![Expr::Sub(one(), squared())]));
        let outer = match func {
            // 1/x
            Func::Log => Expr::Div(one(), Box::new(arg.clone())),
            // e^x
            Func::Exp => Expr::call(Func::Exp, vec![arg.clone()]),
            Func::Pow => return None,
            // x/|x|
            Func::Abs => Expr::Div(
                Box::new(arg.clone()),
                Box::new(Expr::call(Func::Abs, vec![arg.clone()])),
            ),
            // 1/(2*sqrt(x))
            Func::Sqrt => Expr::Div(
                one(),
                Box::new(Expr::Mul(
                    two(),
                    Box::new(Expr::call(Func::Sqrt, vec![arg.clone()])),
                )),
            ),
            Func::Sin => Expr::call(Func::Cos, vec![arg.clone()]),
            Func::Cos => Expr::Neg(Box::new(Expr::call(Func::Sin, vec![arg.clone()]))),
            // 1/cos(x)^2
            Func::Tan => Expr::Div(
                one(),
                Box::new(Expr::Pow(
                    Box::new(Expr::call(Func::Cos, vec![arg.clone()])),
                    two(),
                )),
            ),
            Func::Asin => Expr::Div(one(), sqrt_one_minus_squared()),
            Func::Acos => Expr::Neg(Box::new(Expr::Div(one(), sqrt_one_minus_squared()))),
            // 1/(1 + x^2)
            Func::Atan => Expr::Div(one(), Box::new(Expr::Add(one(), squared()))),
        };
        Some(outer)
    }

    /// Applies `diff` n times in a row, without simplifying in between.
    pub fn n_th_derivative(&self, var: &str, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.diff(var);
        }
        expr
    }
}

impl Lambda {
    /// Derivative of the lambda with respect to one of its parameters (or any other name,
    /// which yields a zero-valued body).
    pub fn derivative(&self, with_respect_to: &str) -> Lambda {
        Lambda::with_parameters(self.parameters.clone(), self.body.diff(with_respect_to))
    }

    /// n-th derivative with respect to one variable; `n == 0` returns a copy of the lambda.
    pub fn nth_derivative(&self, with_respect_to: &str, n: usize) -> Lambda {
        Lambda::with_parameters(
            self.parameters.clone(),
            self.body.n_th_derivative(with_respect_to, n),
        )
    }

    /// Partial derivatives of the body with respect to every parameter, in parameter order.
    pub fn gradient_components(&self) -> Vec<Expr> {
        self.parameters
            .iter()
            .map(|param| self.body.diff(param))
            .collect()
    }

    /// Compares the analytical partial derivative with respect to `var` against a central
    /// difference, sampled at `num_values` points on the segment from `start` to `end`
    /// (one coordinate per parameter).
    ///
    /// # Returns
    /// The norm of the difference and whether it is below `max_norm`.
    pub fn compare_num(
        &self,
        var: &str,
        start: &[f64],
        end: &[f64],
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), SymbolicError> {
        let n = self.parameters.len();
        for bound in [start, end] {
            if bound.len() != n {
                return Err(SymbolicError::ArgumentCount {
                    expected: n,
                    found: bound.len(),
                });
            }
        }
        let index = self
            .parameters
            .iter()
            .position(|p| p == var)
            .ok_or_else(|| SymbolicError::UnboundVariable(var.to_string()))?;
        let function = self.lambdify()?;
        let analytical = self.derivative(var).lambdify()?;

        let num_values = num_values.max(2);
        let linspaces: Vec<Vec<f64>> = start
            .iter()
            .zip(end.iter())
            .map(|(s, e)| linspace(*s, *e, num_values))
            .collect();
        // [[x1, x2, ..], [y1, y2, ..]] -> [[x1, y1], [x2, y2], ..]
        let domain = transpose(linspaces);

        let analytical_values: Vec<f64> = domain
            .iter()
            .map(|point| analytical(point.as_slice()))
            .collect();
        let numerical_values: Vec<f64> = domain
            .iter()
            .map(|point| central_difference(&function, point.as_slice(), index, NUMERICAL_STEP))
            .collect();
        let norm_val = norm(&analytical_values, &numerical_values);
        Ok((norm_val, norm_val < max_norm))
    }
}
