//! # Symbolic Expression Simplification Module
//!
//! Best-effort local simplification of expression trees.
//!
//! `simplify` is a single bottom-up pass: children are simplified first, then one local rule
//! is applied to the node, chosen by its kind. There is no fixpoint iteration inside the pass,
//! callers that want to re-apply it until nothing changes use `simplify_to_fixpoint`.
//!
//! ## Rules
//!
//! ### Constant folding
//! `+ - * / ^` with two constant operands, negation of a constant and every named function
//! with constant arguments are evaluated. Results may be infinite or NaN.
//!
//! ### Identities
//! - `0 + y = y`, `x + 0 = x`, `0 - y = -y`, `x - 0 = x`
//! - `0 * y = 0`, `x * 0 = 0`, `1 * y = y`, `x * 1 = x`
//! - `x / 1 = x`, `0 / y = 0`, `x / x = 1` (structural equality)
//! - `x ^ 0 = 1`, `0 ^ y = 0`, `1 ^ y = 1`, `x ^ 1 = x`
//! - `ln(exp(x)) = x`, `exp(ln(x)) = x`
//!
//! ### Left unreduced
//! `x / 0` and `0 ^ 0` are kept as they are, so that they turn into NaN or infinity only when
//! the expression is evaluated.
//!
//! No distribution, factoring or trigonometric identities are applied.

use crate::symbolic::symbolic_engine::{Expr, Func, Lambda};

/// default pass limit of `simplify_to_fixpoint`
pub const DEFAULT_MAX_PASSES: usize = 16;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// One bottom-up simplification pass.
    ///
    /// # Examples
    /// ```
    /// use RustedVecCalc::symbolic::symbolic_engine::Expr;
    /// let expr = Expr::Const(1.0) * Expr::var("x") + Expr::Const(0.0);
    /// assert_eq!(expr.simplify(), Expr::var("x"));
    /// ```
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Neg(expr) => match expr.simplify() {
                Expr::Const(c) => Expr::Const(-c),
                operand => Expr::Neg(Box::new(operand)),
            },
            Expr::Add(lhs, rhs) => Self::simplify_add(lhs.simplify(), rhs.simplify()),
            Expr::Sub(lhs, rhs) => Self::simplify_sub(lhs.simplify(), rhs.simplify()),
            Expr::Mul(lhs, rhs) => Self::simplify_mul(lhs.simplify(), rhs.simplify()),
            Expr::Div(lhs, rhs) => Self::simplify_div(lhs.simplify(), rhs.simplify()),
            Expr::Pow(base, exp) => Self::simplify_pow(base.simplify(), exp.simplify()),
            Expr::Call(func, args) => Self::simplify_call(*func, args),
        }
    }

    fn simplify_add(lhs: Expr, rhs: Expr) -> Expr {
        match (&lhs, &rhs) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b), // (a) + (b) = (a + b)
            (Expr::Const(a), _) if *a == 0.0 => rhs,                // 0 + y = y
            (_, Expr::Const(b)) if *b == 0.0 => lhs,                // x + 0 = x
            _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
        }
    }

    fn simplify_sub(lhs: Expr, rhs: Expr) -> Expr {
        match (&lhs, &rhs) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
            (Expr::Const(a), _) if *a == 0.0 => Expr::Neg(Box::new(rhs)), // 0 - y = -y
            (_, Expr::Const(b)) if *b == 0.0 => lhs,                      // x - 0 = x
            _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
        }
    }

    fn simplify_mul(lhs: Expr, rhs: Expr) -> Expr {
        match (&lhs, &rhs) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
            (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
            (Expr::Const(a), _) if *a == 1.0 => rhs,
            (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
            (_, Expr::Const(b)) if *b == 1.0 => lhs,
            _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
        }
    }

    fn simplify_div(lhs: Expr, rhs: Expr) -> Expr {
        // x / 0 stays, it has to surface as NaN or infinity at evaluation time
        if rhs.is_zero() {
            return Expr::Div(Box::new(lhs), Box::new(rhs));
        }
        if lhs == rhs {
            return Expr::Const(1.0);
        }
        if lhs.is_zero() {
            return Expr::Const(0.0);
        }
        if rhs.is_one() {
            return lhs;
        }
        match (&lhs, &rhs) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a / b),
            _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
        }
    }

    fn simplify_pow(base: Expr, exp: Expr) -> Expr {
        if base.is_zero() {
            // 0 ^ 0 stays
            if exp.is_zero() {
                return Expr::Pow(Box::new(base), Box::new(exp));
            }
            return Expr::Const(0.0);
        }
        if base.is_one() || exp.is_zero() {
            return Expr::Const(1.0);
        }
        if exp.is_one() {
            return base;
        }
        match (&base, &exp) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
            _ => Expr::Pow(Box::new(base), Box::new(exp)),
        }
    }

    fn simplify_call(func: Func, args: &[Expr]) -> Expr {
        let args: Vec<Expr> = args.iter().map(|arg| arg.simplify()).collect();
        match (func, args.as_slice()) {
            // pow(x, y) is simplified like x ^ y
            (Func::Pow, [base, exp]) => Self::simplify_pow(base.clone(), exp.clone()),
            // ln(exp(x)) = x
            (Func::Log, [Expr::Call(Func::Exp, inner)]) if inner.len() == 1 => inner[0].simplify(),
            // exp(ln(x)) = x
            (Func::Exp, [Expr::Call(Func::Log, inner)]) if inner.len() == 1 => inner[0].simplify(),
            _ => {
                let constants: Option<Vec<f64>> = args.iter().map(Expr::as_const).collect();
                match constants.and_then(|values| func.apply(&values)) {
                    Some(value) => Expr::Const(value),
                    None => Expr::Call(func, args),
                }
            }
        }
    }

    /// Re-applies `simplify` until the expression stops changing or `max_passes` passes are done.
    pub fn simplify_to_fixpoint(&self, max_passes: usize) -> Expr {
        let mut current = self.clone();
        for _ in 0..max_passes {
            let next = current.simplify();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

impl Lambda {
    /// Same parameters, simplified body.
    pub fn simplify(&self) -> Lambda {
        Lambda::with_parameters(self.parameters.clone(), self.body.simplify())
    }
}
