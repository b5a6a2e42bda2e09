//! Classic test objectives for bounded continuous minimizers.
//!
//! The usual suspects from the metaheuristics literature, each a plain
//! `fn(&[f64]) -> f64` ready to hand to [`FnProblem::new`](crate::problem::FnProblem::new).
//! Domains listed per function are the customary ones; any finite box works.

use std::f64::consts::PI;

/// Sphere: `f(x) = Σ xᵢ²`. Unimodal, separable.
///
/// Minimum `f(0, ..., 0) = 0`; usually searched over `[-100, 100]^D`.
///
/// # Example
/// ```
/// use enjambre::benchmarks::sphere;
/// assert!(sphere(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock's valley. Unimodal but badly conditioned.
///
/// Minimum `f(1, ..., 1) = 0`; usually searched over `[-30, 30]^D`.
///
/// # Example
/// ```
/// use enjambre::benchmarks::rosenbrock;
/// assert!(rosenbrock(&[1.0, 1.0, 1.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|pair| {
            let curvature = pair[1] - pair[0] * pair[0];
            let offset = 1.0 - pair[0];
            100.0 * curvature * curvature + offset * offset
        })
        .sum()
}

/// Rastrigin: a regular lattice of local minima. Multimodal, separable.
///
/// Minimum `f(0, ..., 0) = 0`; usually searched over `[-5.12, 5.12]^D`.
///
/// # Example
/// ```
/// use enjambre::benchmarks::rastrigin;
/// assert!(rastrigin(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Ackley: a nearly flat outer region around one deep well. Multimodal.
///
/// Minimum `f(0, ..., 0) = 0`; usually searched over `[-32, 32]^D`.
///
/// # Example
/// ```
/// use enjambre::benchmarks::ackley;
/// assert!(ackley(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_square: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / n;
    let mean_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum::<f64>() / n;

    -20.0 * (-0.2 * mean_square.sqrt()).exp() - mean_cos.exp() + 20.0 + std::f64::consts::E
}

/// Griewank: quadratic bowl with an oscillating product term. Multimodal.
///
/// Minimum `f(0, ..., 0) = 0`; usually searched over `[-600, 600]^D`.
///
/// # Example
/// ```
/// use enjambre::benchmarks::griewank;
/// assert!(griewank(&[0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn griewank(x: &[f64]) -> f64 {
    let bowl: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let ripple: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    bowl - ripple + 1.0
}

/// Schwefel: deceptive, with the global minimum far from the runner-up.
///
/// Minimum `f(420.9687, ..., 420.9687) ≈ 0`; usually searched over
/// `[-500, 500]^D`.
///
/// # Example
/// ```
/// use enjambre::benchmarks::schwefel;
/// assert!(schwefel(&[420.9687, 420.9687]).abs() < 1e-2);
/// ```
#[must_use]
pub fn schwefel(x: &[f64]) -> f64 {
    418.9829 * x.len() as f64 - x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_known_values() {
        assert!(sphere(&[0.0; 4]).abs() < 1e-12);
        assert!((sphere(&[1.0, 2.0, 3.0]) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_nonnegative_away_from_origin() {
        assert!(sphere(&[-3.5, 0.1]) > 0.0);
    }

    #[test]
    fn test_rosenbrock_minimum_at_all_ones() {
        assert!(rosenbrock(&[1.0; 5]).abs() < 1e-12);
        assert!(rosenbrock(&[0.0, 0.0]) > 0.0);
    }

    #[test]
    fn test_rastrigin_minimum_at_origin() {
        assert!(rastrigin(&[0.0; 3]).abs() < 1e-10);
        assert!(rastrigin(&[0.5, 0.5]) > 0.0);
    }

    #[test]
    fn test_ackley_minimum_at_origin() {
        assert!(ackley(&[0.0; 3]).abs() < 1e-10);
        assert!(ackley(&[1.0, 1.0]) > 1.0);
    }

    #[test]
    fn test_griewank_minimum_at_origin() {
        assert!(griewank(&[0.0; 5]).abs() < 1e-12);
        assert!(griewank(&[10.0, -10.0]) > 0.0);
    }

    #[test]
    fn test_schwefel_near_zero_at_known_optimum() {
        assert!(schwefel(&[420.9687; 3]).abs() < 1e-2);
    }
}
