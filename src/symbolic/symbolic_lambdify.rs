use crate::symbolic::symbolic_engine::{Expr, Func, Lambda};
use crate::symbolic::symbolic_errors::SymbolicError;

/// compiled form of an expression: takes the values of the parameters in order
pub type CompiledFn = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

impl Expr {
    /// EVALUATION

    /// Evaluates the expression directly, without building a closure.
    ///
    /// `vars` and `values` are matched by position. IEEE rules apply, so `x / 0` gives an
    /// infinity or NaN rather than an error.
    ///
    /// # Examples
    /// ```
    /// use RustedVecCalc::symbolic::symbolic_engine::Expr;
    /// let f = Expr::var("x") * Expr::var("y");
    /// assert_eq!(f.eval_expression(&["x", "y"], &[2.0, 3.0]), Ok(6.0));
    /// ```
    pub fn eval_expression(&self, vars: &[&str], values: &[f64]) -> Result<f64, SymbolicError> {
        if vars.len() != values.len() {
            return Err(SymbolicError::ArgumentCount {
                expected: vars.len(),
                found: values.len(),
            });
        }
        self.eval_with(vars, values)
    }

    fn eval_with(&self, vars: &[&str], values: &[f64]) -> Result<f64, SymbolicError> {
        let value = match self {
            Expr::Const(val) => *val,
            Expr::Var(name) => {
                let index = vars
                    .iter()
                    .position(|&x| x == name)
                    .ok_or_else(|| SymbolicError::UnboundVariable(name.clone()))?;
                values[index]
            }
            Expr::Neg(expr) => -expr.eval_with(vars, values)?,
            Expr::Add(lhs, rhs) => lhs.eval_with(vars, values)? + rhs.eval_with(vars, values)?,
            Expr::Sub(lhs, rhs) => lhs.eval_with(vars, values)? - rhs.eval_with(vars, values)?,
            Expr::Mul(lhs, rhs) => lhs.eval_with(vars, values)? * rhs.eval_with(vars, values)?,
            Expr::Div(lhs, rhs) => lhs.eval_with(vars, values)? / rhs.eval_with(vars, values)?,
            Expr::Pow(base, exp) => base
                .eval_with(vars, values)?
                .powf(exp.eval_with(vars, values)?),
            Expr::Call(func, args) => {
                let args = args
                    .iter()
                    .map(|arg| arg.eval_with(vars, values))
                    .collect::<Result<Vec<f64>, SymbolicError>>()?;
                func.apply(&args).ok_or(SymbolicError::ArgumentCount {
                    expected: func.arity(),
                    found: args.len(),
                })?
            }
        };
        Ok(value)
    }

    /// Turns the expression into a closure of the values of `vars`.
    ///
    /// Variable positions and call arities are resolved once, here; the closure itself only
    /// does arithmetic and expects a slice of exactly `vars.len()` values.
    pub fn lambdify(&self, vars: &[&str]) -> Result<CompiledFn, SymbolicError> {
        let compiled: CompiledFn = match self {
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_: &[f64]| val)
            }
            Expr::Var(name) => {
                let index = vars
                    .iter()
                    .position(|&x| x == name)
                    .ok_or_else(|| SymbolicError::UnboundVariable(name.clone()))?;
                Box::new(move |args: &[f64]| args[index])
            }
            Expr::Neg(expr) => {
                let f = expr.lambdify(vars)?;
                Box::new(move |args: &[f64]| -f(args))
            }
            Expr::Add(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args: &[f64]| lf(args) + rf(args))
            }
            Expr::Sub(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args: &[f64]| lf(args) - rf(args))
            }
            Expr::Mul(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args: &[f64]| lf(args) * rf(args))
            }
            Expr::Div(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args: &[f64]| lf(args) / rf(args))
            }
            Expr::Pow(base, exp) => {
                let bf = base.lambdify(vars)?;
                let ef = exp.lambdify(vars)?;
                Box::new(move |args: &[f64]| bf(args).powf(ef(args)))
            }
            Expr::Call(func, args) => Self::lambdify_call(*func, args, vars)?,
        };
        Ok(compiled)
    }

    fn lambdify_call(func: Func, args: &[Expr], vars: &[&str]) -> Result<CompiledFn, SymbolicError> {
        let compiled: CompiledFn = match (func, args) {
            (Func::Pow, [base, exp]) => {
                let bf = base.lambdify(vars)?;
                let ef = exp.lambdify(vars)?;
                Box::new(move |args: &[f64]| bf(args).powf(ef(args)))
            }
            (Func::Pow, _) | (_, [] | [_, _, ..]) => {
                return Err(SymbolicError::ArgumentCount {
                    expected: func.arity(),
                    found: args.len(),
                });
            }
            (Func::Log, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).ln())
            }
            (Func::Exp, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).exp())
            }
            (Func::Abs, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).abs())
            }
            (Func::Sqrt, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).sqrt())
            }
            (Func::Sin, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).sin())
            }
            (Func::Cos, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).cos())
            }
            (Func::Tan, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).tan())
            }
            (Func::Asin, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).asin())
            }
            (Func::Acos, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).acos())
            }
            (Func::Atan, [arg]) => {
                let f = arg.lambdify(vars)?;
                Box::new(move |args: &[f64]| f(args).atan())
            }
        };
        Ok(compiled)
    }
}

impl Lambda {
    fn parameter_refs(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.as_str()).collect()
    }

    /// Evaluates the body with `values` bound to the parameters, in order.
    pub fn call(&self, values: &[f64]) -> Result<f64, SymbolicError> {
        self.body.eval_expression(&self.parameter_refs(), values)
    }

    /// Compiles the lambda into a closure of its parameters.
    ///
    /// # Panics
    /// The returned closure panics when given fewer values than there are parameters.
    pub fn lambdify(&self) -> Result<CompiledFn, SymbolicError> {
        self.body.lambdify(&self.parameter_refs())
    }
}
