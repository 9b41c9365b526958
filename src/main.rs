#![allow(non_snake_case)]
use RustedVecCalc::Utils::logger::init_logger;
use RustedVecCalc::symbolic::symbolic_engine::{ArrayLambda, Expr, Lambda};
use RustedVecCalc::symbolic::symbolic_vectors::VectorField;

fn main() {
    if let Err(err) = init_logger(Some("info")) {
        eprintln!("{}", err);
    }
    let example = 2;
    match example {
        0 => {
            // FUNCTION OF MULTIPLE VARIABLES
            let vars = Expr::Symbols("x, y");
            let (x, y) = (vars[0].clone(), vars[1].clone());
            let f = Lambda::new(&["x", "y"], x.clone().exp() + y.clone().ln() * x.pow(Expr::Const(2.0)));
            println!("f = {}", f);
            // differentiate with respect to x and y
            let df_dx = f.derivative("x");
            let df_dy = f.derivative("y");
            println!("df_dx = {}", df_dx);
            println!("df_dx simplified = {}", df_dx.simplify());
            println!("df_dy simplified = {}", df_dy.simplify());
            // turn the derivative into a closure and evaluate it
            match df_dx.lambdify() {
                Ok(df_dx_fn) => println!("df_dx(1, 2) = {}", df_dx_fn(&[1.0, 2.0][..])),
                Err(err) => println!("{}", err),
            }
            // compare with a central difference on the segment (0.5, 0.5) - (2, 2)
            match f.compare_num("x", &[0.5, 0.5], &[2.0, 2.0], 20, 1e-4) {
                Ok((norm, ok)) => println!("analytical vs numerical: norm = {}, ok = {}", norm, ok),
                Err(err) => println!("{}", err),
            }
        }
        1 => {
            // GRADIENT AND DIVERGENCE
            let (x, y) = (Expr::var("x"), Expr::var("y"));
            let f = Lambda::new(&["x", "y"], x.cos() * y.sin());
            let grad = VectorField::gradient(&f).simplify();
            println!("grad f:\n{}", grad);
            println!("grad f at (1, 1) = {:?}", grad.evaluate(&[1.0, 1.0]));
            match grad.divergence() {
                Ok(laplacian) => {
                    println!("div grad f = {}", laplacian.simplify());
                    println!("div grad f at (1, 1) = {:?}", laplacian.call(&[1.0, 1.0]));
                }
                Err(err) => println!("{}", err),
            }
        }
        2 => {
            // CURL
            let (x, y, z) = (Expr::var("x"), Expr::var("y"), Expr::var("z"));
            let rotation = VectorField::new(ArrayLambda::new(
                &["x", "y", "z"],
                vec![-y, x, Expr::Const(0.0) * z],
            ));
            println!("F:\n{}", rotation);
            match rotation.curl() {
                Ok(curl) => println!("curl F:\n{}", curl.simplify()),
                Err(err) => println!("{}", err),
            }
            // a two-dimensional field has no curl
            let plane = VectorField::new(ArrayLambda::new(
                &["x", "y"],
                vec![Expr::var("x"), Expr::var("y")],
            ));
            if let Err(err) = plane.curl() {
                println!("{}", err);
            }
        }
        _ => {
            println!("example not found");
        }
    }
}
