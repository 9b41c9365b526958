// numeric helpers used to cross-check analytical derivatives

/// `num_values` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values as f64 - 1.0);
            (0..num_values).map(|i| start + step * i as f64).collect()
        }
    }
}

/*
    let f = |x: &[f64]| x[0] * x[1];
    // d/dy at (2, 3) = 2
    let dy = central_difference(&f, &[2.0, 3.0], 1, 1e-6);
*/
/// Partial derivative of `f` along coordinate `index` at `point`:
/// (f(x + h*e_i) - f(x - h*e_i)) / 2h
pub fn central_difference<F>(f: &F, point: &[f64], index: usize, h: f64) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    let mut x_plus_h = point.to_vec();
    let mut x_minus_h = point.to_vec();
    x_plus_h[index] += h;
    x_minus_h[index] -= h;
    (f(x_plus_h.as_slice()) - f(x_minus_h.as_slice())) / (2.0 * h)
}

// compute norm of two vectors
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}

// transpose a matrix
pub fn transpose<T>(v: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let len = v.first().map_or(0, |row| row.len());
    let mut iters: Vec<_> = v.into_iter().map(std::iter::IntoIterator::into_iter).collect();
    (0..len)
        .map(|_| iters.iter_mut().filter_map(|n| n.next()).collect())
        .collect()
}
