//! Swarm population and the shared global-best cell.

use crate::error::Result;
use crate::particle::Particle;
use crate::problem::{checked_evaluate, Problem};

/// Ordered particle population plus the best point any member has found.
///
/// The global-best cell starts at the "no solution yet" sentinel (empty
/// position, infinite fitness) and is only ever written through
/// [`Swarm::update_global_best`], which keeps the fitness monotonically
/// non-increasing over a run.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub(crate) particles: Vec<Particle>,
    pub(crate) global_best: Vec<f64>,
    pub(crate) global_best_fitness: f64,
}

impl Default for Swarm {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            global_best: Vec::new(),
            global_best_fitness: f64::INFINITY,
        }
    }
}

impl Swarm {
    /// Create an empty swarm.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The particles, in sweep order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the swarm holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Best position found so far (empty before the first adoption).
    pub fn global_best(&self) -> &[f64] {
        &self.global_best
    }

    /// Objective value at the global best, `f64::INFINITY` before the
    /// first adoption.
    pub fn global_best_fitness(&self) -> f64 {
        self.global_best_fitness
    }

    /// Offer a candidate to the global-best cell.
    ///
    /// Re-evaluates the candidate (the stored fitness must always equal a
    /// fresh evaluation of the stored position) and adopts it only on
    /// strict improvement. Returns whether the candidate was adopted. A
    /// non-finite evaluation fails before any state is touched.
    pub fn update_global_best<P: Problem>(&mut self, candidate: &[f64], problem: &P) -> Result<bool> {
        let fitness = checked_evaluate(problem, candidate)?;
        if fitness < self.global_best_fitness {
            self.global_best = candidate.to_vec();
            self.global_best_fitness = fitness;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
