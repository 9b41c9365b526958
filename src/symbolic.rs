#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// expression trees, named functions and lambdas
///# Example
/// ```
/// use RustedVecCalc::symbolic::symbolic_engine::{Expr, Lambda};
/// let (x, y) = (Expr::var("x"), Expr::var("y"));
/// // f(x, y) = x^2 * sin(y), built programmatically
/// let f = Lambda::new(&["x", "y"], x.pow(Expr::Const(2.0)) * y.sin());
/// println!("f = {}", f);
/// // exact partial derivative, then a simplification pass
/// let df_dy = f.derivative("y").simplify();
/// println!("df/dy = {}", df_dy);
/// // evaluate at (x, y) = (2, 0): 2^2 * cos(0) = 4
/// assert!((df_dy.call(&[2.0, 0.0]).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub mod symbolic_engine;
///____________________________________________________________________________________________________________________________
/// analytical differentiation: `Expr::diff`, `Lambda::derivative`, `Lambda::nth_derivative`
pub mod symbolic_engine_derivatives;
/// local bottom-up simplification and constant folding
pub mod symbolic_simplify;
/// direct evaluation and compilation of expressions into closures
pub mod symbolic_lambdify;
///____________________________________________________________________________________________________________________________
/// # Vector fields
/// gradient, divergence and curl
///# Example
/// ```
/// use RustedVecCalc::symbolic::symbolic_engine::{Expr, Lambda};
/// use RustedVecCalc::symbolic::symbolic_vectors::VectorField;
/// let (x, y) = (Expr::var("x"), Expr::var("y"));
/// let f = Lambda::new(&["x", "y"], x.cos() * y.sin());
/// let grad = VectorField::gradient(&f);
/// println!("grad f:\n{}", grad.simplify());
/// let laplacian = grad.divergence().unwrap();
/// let expected = -2.0 * 1.0_f64.cos() * 1.0_f64.sin();
/// assert!((laplacian.call(&[1.0, 1.0]).unwrap() - expected).abs() < 1e-12);
/// ```
pub mod symbolic_vectors;
pub mod symbolic_errors;
///______________________________________________________________________________________________________________________________________________
/// numeric helpers for checking analytical derivatives against finite differences
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
