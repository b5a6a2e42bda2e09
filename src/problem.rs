//! Objective-problem seam for the optimizer.
//!
//! A [`Problem`] bundles everything a run needs from the caller: the
//! search-space shape (dimension count and one shared box per dimension),
//! the evaluation itself, and the tuning knobs the run schedule reads
//! (iteration budget, initial inertia weight, kill probability).
//!
//! Most callers wrap a closure in [`FnProblem`]; anything with richer
//! state implements the trait directly.

use crate::error::{EnjambreError, Result};

/// A bounded minimization problem.
///
/// All dimensions share one `[bound_lower, bound_upper]` interval. The
/// objective may be pure or externally-seeded stochastic; no smoothness or
/// continuity is assumed. Lower values are better.
///
/// Configuration is validated when a run starts, not here: `dimensions`
/// must be at least 1, bounds finite with `bound_lower < bound_upper`,
/// `kill_probability` within `[0, 1]`, and `initial_inertia_weight` finite.
pub trait Problem {
    /// Number of coordinates in a candidate solution.
    fn dimensions(&self) -> usize;

    /// Lower bound shared by every dimension.
    fn bound_lower(&self) -> f64;

    /// Upper bound shared by every dimension.
    fn bound_upper(&self) -> f64;

    /// Number of iterations (full swarm sweeps) a run performs.
    ///
    /// Zero is valid: the swarm is initialized and the report carries the
    /// best point found during initialization.
    fn iterations(&self) -> usize;

    /// Starting value of the linearly decaying inertia weight.
    ///
    /// Only seeds the schedule; the velocity cap is derived from the
    /// bounds and does not move with this value.
    fn initial_inertia_weight(&self) -> f64;

    /// Probability that a non-improving particle is discarded and
    /// re-randomized in a given iteration.
    fn kill_probability(&self) -> f64;

    /// Evaluate a candidate position.
    fn evaluate(&self, position: &[f64]) -> f64;
}

/// Evaluate and reject NaN/infinite results before they can reach any
/// best-so-far cell.
pub(crate) fn checked_evaluate<P: Problem + ?Sized>(problem: &P, position: &[f64]) -> Result<f64> {
    let value = problem.evaluate(position);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EnjambreError::non_finite_objective(value, position))
    }
}

/// Reject invalid configurations before any particle is created.
pub(crate) fn validate<P: Problem + ?Sized>(problem: &P, swarm_size: usize) -> Result<()> {
    let dimensions = problem.dimensions();
    if dimensions < 1 {
        return Err(EnjambreError::invalid_hyperparameter(
            "dimensions",
            &dimensions.to_string(),
            ">= 1",
        ));
    }

    let lower = problem.bound_lower();
    let upper = problem.bound_upper();
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(EnjambreError::invalid_hyperparameter(
            "bounds",
            &format!("[{lower}, {upper}]"),
            "finite with lower < upper",
        ));
    }

    if swarm_size < 1 {
        return Err(EnjambreError::invalid_hyperparameter(
            "swarm_size",
            &swarm_size.to_string(),
            ">= 1",
        ));
    }

    let inertia = problem.initial_inertia_weight();
    if !inertia.is_finite() {
        return Err(EnjambreError::invalid_hyperparameter(
            "initial_inertia_weight",
            &inertia.to_string(),
            "a finite value",
        ));
    }

    // NaN fails the range check as well.
    let kill = problem.kill_probability();
    if !(0.0..=1.0).contains(&kill) {
        return Err(EnjambreError::invalid_hyperparameter(
            "kill_probability",
            &kill.to_string(),
            "within [0, 1]",
        ));
    }

    Ok(())
}

/// [`Problem`] built from a closure.
///
/// Defaults: 100 iterations, initial inertia weight 0.9, kill
/// probability 0.0 (plain PSO, no restarts).
///
/// # Example
///
/// ```
/// use enjambre::problem::{FnProblem, Problem};
///
/// let problem = FnProblem::new(3, -5.0, 5.0, |x: &[f64]| x.iter().sum())
///     .with_iterations(50)
///     .with_kill_probability(0.02);
///
/// assert_eq!(problem.dimensions(), 3);
/// assert_eq!(problem.iterations(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct FnProblem<F> {
    dimensions: usize,
    bound_lower: f64,
    bound_upper: f64,
    iterations: usize,
    initial_inertia_weight: f64,
    kill_probability: f64,
    objective: F,
}

impl<F: Fn(&[f64]) -> f64> FnProblem<F> {
    /// Wrap an objective closure with the given search box.
    #[must_use]
    pub fn new(dimensions: usize, bound_lower: f64, bound_upper: f64, objective: F) -> Self {
        Self {
            dimensions,
            bound_lower,
            bound_upper,
            iterations: 100,
            initial_inertia_weight: 0.9,
            kill_probability: 0.0,
            objective,
        }
    }

    /// Set the iteration budget.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the starting inertia weight.
    #[must_use]
    pub fn with_initial_inertia_weight(mut self, weight: f64) -> Self {
        self.initial_inertia_weight = weight;
        self
    }

    /// Set the stall-kill probability.
    #[must_use]
    pub fn with_kill_probability(mut self, probability: f64) -> Self {
        self.kill_probability = probability;
        self
    }
}

impl<F: Fn(&[f64]) -> f64> Problem for FnProblem<F> {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn bound_lower(&self) -> f64 {
        self.bound_lower
    }

    fn bound_upper(&self) -> f64 {
        self.bound_upper
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn initial_inertia_weight(&self) -> f64 {
        self.initial_inertia_weight
    }

    fn kill_probability(&self) -> f64 {
        self.kill_probability
    }

    fn evaluate(&self, position: &[f64]) -> f64 {
        (self.objective)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    #[test]
    fn test_fn_problem_defaults() {
        let problem = FnProblem::new(4, -1.0, 1.0, sphere);
        assert_eq!(problem.dimensions(), 4);
        assert_eq!(problem.iterations(), 100);
        assert!((problem.initial_inertia_weight() - 0.9).abs() < 1e-12);
        assert!((problem.kill_probability() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_fn_problem_builders() {
        let problem = FnProblem::new(2, -10.0, 10.0, sphere)
            .with_iterations(250)
            .with_initial_inertia_weight(0.7)
            .with_kill_probability(0.05);
        assert_eq!(problem.iterations(), 250);
        assert!((problem.initial_inertia_weight() - 0.7).abs() < 1e-12);
        assert!((problem.kill_probability() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_fn_problem_evaluates_closure() {
        let problem = FnProblem::new(3, -10.0, 10.0, sphere);
        assert!((problem.evaluate(&[1.0, 2.0, 3.0]) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_checked_evaluate_passes_finite() {
        let problem = FnProblem::new(2, -10.0, 10.0, sphere);
        let value = checked_evaluate(&problem, &[3.0, 4.0]).expect("finite value");
        assert!((value - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_checked_evaluate_rejects_nan() {
        let problem = FnProblem::new(2, -10.0, 10.0, |_: &[f64]| f64::NAN);
        let err = checked_evaluate(&problem, &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, EnjambreError::NonFiniteObjective { .. }));
    }

    #[test]
    fn test_checked_evaluate_rejects_infinity() {
        let problem = FnProblem::new(1, -10.0, 10.0, |_: &[f64]| f64::NEG_INFINITY);
        let err = checked_evaluate(&problem, &[0.0]).unwrap_err();
        assert!(matches!(err, EnjambreError::NonFiniteObjective { .. }));
    }

    #[test]
    fn test_validate_accepts_sane_config() {
        let problem = FnProblem::new(3, -5.0, 5.0, sphere).with_kill_probability(1.0);
        assert!(validate(&problem, 20).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let problem = FnProblem::new(0, -5.0, 5.0, sphere);
        let err = validate(&problem, 20).unwrap_err();
        assert!(err.to_string().contains("dimensions"));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let problem = FnProblem::new(3, 5.0, -5.0, sphere);
        let err = validate(&problem, 20).unwrap_err();
        assert!(err.to_string().contains("bounds"));
    }

    #[test]
    fn test_validate_rejects_degenerate_bounds() {
        let problem = FnProblem::new(3, 2.0, 2.0, sphere);
        assert!(validate(&problem, 20).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_bounds() {
        let problem = FnProblem::new(3, f64::NEG_INFINITY, 5.0, sphere);
        assert!(validate(&problem, 20).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_swarm() {
        let problem = FnProblem::new(3, -5.0, 5.0, sphere);
        let err = validate(&problem, 0).unwrap_err();
        assert!(err.to_string().contains("swarm_size"));
    }

    #[test]
    fn test_validate_rejects_kill_probability_above_one() {
        let problem = FnProblem::new(3, -5.0, 5.0, sphere).with_kill_probability(1.5);
        let err = validate(&problem, 20).unwrap_err();
        assert!(err.to_string().contains("kill_probability"));
    }

    #[test]
    fn test_validate_rejects_negative_kill_probability() {
        let problem = FnProblem::new(3, -5.0, 5.0, sphere).with_kill_probability(-0.1);
        assert!(validate(&problem, 20).is_err());
    }

    #[test]
    fn test_validate_rejects_nan_kill_probability() {
        let problem = FnProblem::new(3, -5.0, 5.0, sphere).with_kill_probability(f64::NAN);
        assert!(validate(&problem, 20).is_err());
    }

    #[test]
    fn test_validate_rejects_nan_inertia_weight() {
        let problem = FnProblem::new(3, -5.0, 5.0, sphere).with_initial_inertia_weight(f64::NAN);
        let err = validate(&problem, 20).unwrap_err();
        assert!(err.to_string().contains("initial_inertia_weight"));
    }
}
