//! # Symbolic Vector Fields
//!
//! A `VectorField` is an ordered list of scalar lambdas sharing one parameter list, one lambda
//! per output axis. It is built once from an array-valued lambda and never mutated; the
//! differential operators return new lambdas or new fields.
//!
//! - `VectorField::gradient(f)` - field of the partial derivatives of a scalar field
//! - `field.divergence()` - sum over i of d(F_i)/d(p_i), component i paired with parameter i by position
//! - `field.curl()` - 3-D curl, parameters taken by position from component 0
//! - `VectorField::laplacian(f)` - divergence of the gradient
use crate::symbolic::symbolic_engine::{ArrayLambda, Expr, Lambda};
use crate::symbolic::symbolic_errors::SymbolicError;

use log::{info, warn};
use nalgebra::DVector;
use std::fmt;
use std::ops::Index;

/// Symbolic vector field: N scalar lambdas over the same N parameters.
///
/// A field whose construction failed holds no components; check `is_empty()` before use.
#[derive(Clone, Debug, Default)]
pub struct VectorField {
    functions: Vec<Lambda>,
}

impl VectorField {
    /// Slices an array-valued lambda into one scalar lambda per component.
    ///
    /// If the number of parameters differs from the number of components the mismatch is
    /// logged and an empty field is returned.
    ///
    /// # Examples
    /// ```
    /// use RustedVecCalc::symbolic::symbolic_engine::{ArrayLambda, Expr};
    /// use RustedVecCalc::symbolic::symbolic_vectors::VectorField;
    /// let (x, y) = (Expr::var("x"), Expr::var("y"));
    /// let field = VectorField::new(ArrayLambda::new(&["x", "y"], vec![y, x]));
    /// assert_eq!(field.len(), 2);
    /// let broken = VectorField::new(ArrayLambda::new(&["x", "y"], vec![Expr::Const(1.0)]));
    /// assert!(broken.is_empty());
    /// ```
    pub fn new(array: ArrayLambda) -> Self {
        match Self::try_new(array) {
            Ok(field) => field,
            Err(err) => {
                warn!("{}. Aborting VectorField construction.", err);
                Self::default()
            }
        }
    }

    /// Same as `new`, but reports a shape mismatch as an error instead of an empty field.
    pub fn try_new(array: ArrayLambda) -> Result<Self, SymbolicError> {
        let ArrayLambda { parameters, bodies } = array;
        if parameters.len() != bodies.len() {
            return Err(SymbolicError::ShapeMismatch {
                parameters: parameters.len(),
                components: bodies.len(),
            });
        }
        let functions = bodies
            .into_iter()
            .map(|body| Lambda::with_parameters(parameters.clone(), body))
            .collect();
        Ok(Self { functions })
    }

    pub fn components(&self) -> &[Lambda] {
        &self.functions
    }

    /// Shared parameter list (empty for an empty field).
    pub fn parameters(&self) -> &[String] {
        match self.functions.first() {
            Some(first) => &first.parameters,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lambda> {
        self.functions.iter()
    }

    /// Gradient of a scalar field: component i is the partial derivative with respect to
    /// parameter i.
    pub fn gradient(scalar_field: &Lambda) -> VectorField {
        let components = scalar_field.gradient_components();
        info!("gradient: {} components", components.len());
        VectorField::new(ArrayLambda::with_parameters(
            scalar_field.parameters.clone(),
            components,
        ))
    }

    /// Divergence: d(F_0)/d(p_0) + d(F_1)/d(p_1) + ... + d(F_n)/d(p_n).
    ///
    /// Component i is differentiated with respect to the i-th parameter, whatever its name.
    pub fn divergence(&self) -> Result<Lambda, SymbolicError> {
        let Some(first) = self.functions.first() else {
            let err = SymbolicError::EmptyField {
                operation: "divergence",
            };
            warn!("{}. Aborting divergence.", err);
            return Err(err);
        };
        let parameters = &first.parameters;
        let mut body = first.body.diff(&parameters[0]);
        for (function, param) in self.functions.iter().zip(parameters.iter()).skip(1) {
            body = Expr::Add(Box::new(body), Box::new(function.body.diff(param)));
        }
        info!("divergence of a {}-dimensional field", self.len());
        Ok(Lambda::with_parameters(parameters.clone(), body))
    }

    /// Curl of a three-dimensional field.
    ///
    /// With F = (F_0, F_1, F_2) over parameters (p_0, p_1, p_2):
    /// - curl_0 = d(F_2)/d(p_1) - d(F_1)/d(p_2)
    /// - curl_1 = d(F_2)/d(p_0) - d(F_0)/d(p_2)
    /// - curl_2 = d(F_1)/d(p_0) - d(F_0)/d(p_1)
    pub fn curl(&self) -> Result<VectorField, SymbolicError> {
        let [f0, f1, f2] = self.functions.as_slice() else {
            let err = SymbolicError::WrongDimension {
                operation: "curl",
                expected: 3,
                found: self.len(),
            };
            warn!("{}. Aborting curl.", err);
            return Err(err);
        };
        let parameters = &f0.parameters;
        let partial = |f: &Lambda, i: usize| f.body.diff(&parameters[i]);
        let components = vec![
            Expr::Sub(Box::new(partial(f2, 1)), Box::new(partial(f1, 2))),
            Expr::Sub(Box::new(partial(f2, 0)), Box::new(partial(f0, 2))),
            Expr::Sub(Box::new(partial(f1, 0)), Box::new(partial(f0, 1))),
        ];
        info!("curl: {} components", components.len());
        Ok(VectorField::new(ArrayLambda::with_parameters(
            parameters.clone(),
            components,
        )))
    }

    /// Laplacian of a scalar field, computed as the divergence of its gradient.
    pub fn laplacian(scalar_field: &Lambda) -> Result<Lambda, SymbolicError> {
        Self::gradient(scalar_field).divergence()
    }

    /// Simplifies every component.
    pub fn simplify(&self) -> VectorField {
        VectorField {
            functions: self.functions.iter().map(|f| f.simplify()).collect(),
        }
    }

    /// Evaluates every component at one point.
    pub fn evaluate(&self, values: &[f64]) -> Result<DVector<f64>, SymbolicError> {
        let evaluated = self
            .functions
            .iter()
            .map(|f| f.call(values))
            .collect::<Result<Vec<f64>, SymbolicError>>()?;
        Ok(DVector::from_vec(evaluated))
    }
}

impl Index<usize> for VectorField {
    type Output = Lambda;

    fn index(&self, index: usize) -> &Self::Output {
        &self.functions[index]
    }
}

impl fmt::Display for VectorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty vector field>");
        }
        let lines: Vec<String> = self
            .functions
            .iter()
            .enumerate()
            .map(|(i, function)| {
                format!(
                    "F_{}({}) = {}",
                    i,
                    function.parameters.join(", "),
                    function.body
                )
            })
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests_vector_field {
    use super::*;
    use approx::assert_relative_eq;

    fn xyz() -> (Expr, Expr, Expr) {
        (Expr::var("x"), Expr::var("y"), Expr::var("z"))
    }

    #[test]
    fn test_construction_slices_components() {
        let (x, y, z) = xyz();
        let field = VectorField::new(ArrayLambda::new(
            &["x", "y", "z"],
            vec![x.clone() * y.clone(), z.clone(), x.clone().sin()],
        ));
        assert_eq!(field.len(), 3);
        for component in field.iter() {
            assert_eq!(component.parameters, vec!["x", "y", "z"]);
        }
        assert_eq!(field[1].body, z);
        assert_eq!(field.parameters(), ["x", "y", "z"]);
    }

    #[test]
    fn test_construction_mismatch_gives_empty_field() {
        let (x, y, z) = xyz();
        let array = ArrayLambda::new(&["x", "y"], vec![x, y, z]);
        let field = VectorField::new(array.clone());
        assert!(field.is_empty());
        assert!(field.parameters().is_empty());
        assert_eq!(
            VectorField::try_new(array).unwrap_err(),
            SymbolicError::ShapeMismatch {
                parameters: 2,
                components: 3
            }
        );
        let too_few = VectorField::new(ArrayLambda::new(&["x", "y"], vec![Expr::var("x")]));
        assert!(too_few.is_empty());
    }

    #[test]
    fn test_gradient() {
        let (x, y, _) = xyz();
        let f = Lambda::new(&["x", "y"], x.clone() * y.clone());
        let grad = VectorField::gradient(&f).simplify();
        assert_eq!(grad.len(), 2);
        assert_eq!(grad[0].body, y);
        assert_eq!(grad[1].body, x);
    }

    #[test]
    fn test_divergence() {
        let (x, y, z) = xyz();
        // F = (x^2, x*y, sin(z)); div F = 2x + x + cos(z)
        let field = VectorField::new(ArrayLambda::new(
            &["x", "y", "z"],
            vec![
                x.clone() * x.clone(),
                x.clone() * y.clone(),
                z.clone().sin(),
            ],
        ));
        let div = field.divergence().unwrap();
        assert_eq!(div.parameters, vec!["x", "y", "z"]);
        let value = div.call(&[2.0, 5.0, 0.5]).unwrap();
        assert_relative_eq!(value, 4.0 + 2.0 + 0.5_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_divergence_pairs_components_by_position() {
        // parameters named (b, a): component 0 is differentiated with respect to b
        let (a, b) = (Expr::var("a"), Expr::var("b"));
        let field = VectorField::new(ArrayLambda::new(&["b", "a"], vec![a.clone(), b.clone()]));
        let div = field.divergence().unwrap().simplify();
        assert_eq!(div.body, Expr::Const(0.0));

        let field = VectorField::new(ArrayLambda::new(&["b", "a"], vec![b, a]));
        let div = field.divergence().unwrap().simplify();
        assert_eq!(div.body, Expr::Const(2.0));
    }

    #[test]
    fn test_divergence_of_empty_field() {
        let field = VectorField::new(ArrayLambda::new(&["x"], vec![]));
        assert!(field.is_empty());
        assert_eq!(
            field.divergence().unwrap_err(),
            SymbolicError::EmptyField {
                operation: "divergence"
            }
        );
    }

    #[test]
    fn test_divergence_of_gradient() {
        let (x, y, _) = xyz();
        let f = Lambda::new(&["x", "y"], x.cos() * y.sin());
        let div_grad = VectorField::gradient(&f).divergence().unwrap();
        let expected = -1.0_f64.cos() * 1.0_f64.sin() - 1.0_f64.cos() * 1.0_f64.sin();
        assert_relative_eq!(div_grad.call(&[1.0, 1.0]).unwrap(), expected, epsilon = 1e-12);
        let simplified = div_grad.simplify();
        assert_relative_eq!(simplified.call(&[1.0, 1.0]).unwrap(), expected, epsilon = 1e-12);
        let laplacian = VectorField::laplacian(&f).unwrap();
        assert_relative_eq!(laplacian.call(&[1.0, 1.0]).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_curl() {
        let (x, y, z) = xyz();
        // F = (y*z, x*z, x*y) is a gradient field, its curl vanishes
        let field = VectorField::new(ArrayLambda::new(
            &["x", "y", "z"],
            vec![
                y.clone() * z.clone(),
                x.clone() * z.clone(),
                x.clone() * y.clone(),
            ],
        ));
        let curl = field.curl().unwrap().simplify();
        assert_eq!(curl.len(), 3);
        let value = curl.evaluate(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(value, DVector::from_vec(vec![0.0, 0.0, 0.0]));

        // F = (-y, x, 0) rotates around z: curl = (0, 0 - 0, 1 - (-1)) = (0, 0, 2)
        let field = VectorField::new(ArrayLambda::new(
            &["x", "y", "z"],
            vec![-y.clone(), x.clone(), Expr::Const(0.0)],
        ));
        let curl = field.curl().unwrap();
        let value = curl.evaluate(&[0.3, -0.7, 1.1]).unwrap();
        assert_relative_eq!(value[0], 0.0);
        assert_relative_eq!(value[1], 0.0);
        assert_relative_eq!(value[2], 2.0);
        assert_eq!(curl.simplify()[2].body, Expr::Const(2.0));
    }

    #[test]
    fn test_curl_wrong_dimension() {
        let (x, y, z) = xyz();
        let w = Expr::var("w");
        let planar = VectorField::new(ArrayLambda::new(&["x", "y"], vec![x.clone(), y.clone()]));
        assert_eq!(
            planar.curl().unwrap_err(),
            SymbolicError::WrongDimension {
                operation: "curl",
                expected: 3,
                found: 2
            }
        );
        let four = VectorField::new(ArrayLambda::new(&["x", "y", "z", "w"], vec![x, y, z, w]));
        assert!(four.curl().is_err());
        assert!(VectorField::default().curl().is_err());
    }

    #[test]
    fn test_sources_are_not_mutated() {
        let (x, y, _) = xyz();
        let f = Lambda::new(&["x", "y"], x.clone() * y.clone());
        let before = f.body.clone();
        let grad = VectorField::gradient(&f);
        let _ = grad.divergence();
        let _ = grad.simplify();
        assert_eq!(f.body, before);
        assert_eq!(grad[0].body, f.body.diff("x"));
    }

    #[test]
    fn test_display() {
        let (x, y, _) = xyz();
        let field = VectorField::new(ArrayLambda::new(&["x", "y"], vec![y, x.sin()]));
        assert_eq!(field.to_string(), "F_0(x, y) = y\nF_1(x, y) = sin(x)");
        assert_eq!(VectorField::default().to_string(), "<empty vector field>");
        // bodies are printed as stored; simplify first for the reduced form
        let f = Lambda::new(&["x"], Expr::var("x") * Expr::var("x"));
        let grad = VectorField::gradient(&f);
        assert_eq!(grad.to_string(), "F_0(x) = ((x * 1) + (x * 1))");
        assert_eq!(grad.simplify().to_string(), "F_0(x) = (x + x)");
    }
}
