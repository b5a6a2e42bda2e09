//! Particle Swarm Optimization (PSO).
//!
//! A population-based stochastic search for minimizing a black-box
//! objective over a bounded box.
//!
//! # Algorithm
//!
//! Each particle keeps a position, a velocity, and the best point it has
//! visited; the swarm keeps the best point anyone has visited. Per
//! iteration, per particle:
//!
//! ```text
//! For each dimension d:
//!   v[d] = w·v[d] + rp·(p[d] - x[d]) + rg·(g[d] - x[d])    rp, rg ~ U[0, 1)
//!   v[d] clamped to ±0.1·|upper - lower|
//!   x[d] = clamp(x[d] + v[d], lower, upper)
//! If f(x) improved on the personal best, promote it; otherwise the
//! particle is killed and re-randomized with a fixed probability.
//! ```
//!
//! The inertia weight `w` decays linearly from the configured starting
//! value down toward 0.1 over the iteration budget. Particles sweep in
//! order and read the live global best, so a particle late in the sweep
//! already chases improvements found earlier in the same sweep.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995): "Particle Swarm Optimization"
//! - Shi & Eberhart (1998): "A Modified Particle Swarm Optimizer"

use std::time::Instant;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::particle::Particle;
use crate::problem::{validate, Problem};
use crate::report::{IterationRecord, ProgressSink, RunReport};
use crate::swarm::Swarm;

/// Floor the inertia weight decays toward.
pub const W_LOW: f64 = 0.1;

/// Velocity cap as a fraction of the bound range.
///
/// Derived from the search bounds alone; the configured
/// `initial_inertia_weight` has no effect on it.
pub const V_MAX_FACTOR: f64 = 0.1;

/// Particle Swarm optimizer.
///
/// # Example
///
/// ```
/// use enjambre::{FnProblem, NullSink, ParticleSwarm};
///
/// // Sphere function: f(x) = Σxᵢ²
/// let problem = FnProblem::new(2, -5.0, 5.0, |x: &[f64]| {
///     x.iter().map(|xi| xi * xi).sum()
/// })
/// .with_iterations(100)
/// .with_kill_probability(0.01);
///
/// let mut pso = ParticleSwarm::new().with_seed(42);
/// let report = pso.run(20, &problem, &mut NullSink).unwrap();
///
/// assert!(report.best_fitness < 1e-2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSwarm {
    /// Random seed for reproducibility
    #[serde(default)]
    seed: Option<u64>,

    // Internal state (not serialized)
    #[serde(skip)]
    swarm: Swarm,
    #[serde(skip)]
    best_particle: Option<Particle>,
    #[serde(skip)]
    history: Vec<f64>,
}

impl ParticleSwarm {
    /// Create a new optimizer (entropy-seeded unless a seed is set).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create RNG from seed or entropy.
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// The particle recorded at the last global-best improvement during
    /// iteration. `None` until an iteration improves on the
    /// initialization best.
    pub fn best(&self) -> Option<&Particle> {
        self.best_particle.as_ref()
    }

    /// Global best fitness after initialization and after each iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// The swarm from the most recent run (empty before the first run).
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Clear all state from previous runs.
    pub fn reset(&mut self) {
        self.swarm = Swarm::new();
        self.best_particle = None;
        self.history.clear();
    }

    /// Build the initial population, funneling each fresh personal best
    /// through the global-best cell as it appears.
    fn initialize<P: Problem>(
        &mut self,
        swarm_size: usize,
        problem: &P,
        rng: &mut StdRng,
        evaluations: &mut usize,
    ) -> Result<()> {
        for _ in 0..swarm_size {
            let particle = Particle::spawn(problem, rng)?;
            *evaluations += 1;

            if particle.best_fitness < self.swarm.global_best_fitness() {
                self.swarm
                    .update_global_best(&particle.best_position, problem)?;
                *evaluations += 1;
            }
            self.swarm.particles.push(particle);
        }
        Ok(())
    }

    /// Run the optimizer: `swarm_size` particles against `problem`,
    /// reporting progress to `sink`.
    ///
    /// Returns the final report; the same report is also handed to
    /// `sink.on_complete`. A zero iteration budget is valid and reports
    /// the best point found during initialization.
    ///
    /// # Errors
    ///
    /// [`EnjambreError::InvalidHyperparameter`] when the configuration is
    /// rejected (checked before any particle exists);
    /// [`EnjambreError::NonFiniteObjective`] when an evaluation returns
    /// NaN or an infinity, aborting the run.
    ///
    /// [`EnjambreError::InvalidHyperparameter`]: crate::error::EnjambreError::InvalidHyperparameter
    /// [`EnjambreError::NonFiniteObjective`]: crate::error::EnjambreError::NonFiniteObjective
    pub fn run<P, S>(&mut self, swarm_size: usize, problem: &P, sink: &mut S) -> Result<RunReport>
    where
        P: Problem,
        S: ProgressSink,
    {
        validate(problem, swarm_size)?;
        self.reset();

        let started = Instant::now();
        let mut rng = self.make_rng();
        let mut evaluations = 0usize;

        self.initialize(swarm_size, problem, &mut rng, &mut evaluations)?;
        self.history.push(self.swarm.global_best_fitness());

        let iterations = problem.iterations();
        let w_start = problem.initial_inertia_weight();
        let v_max = (problem.bound_upper() - problem.bound_lower()).abs() * V_MAX_FACTOR;
        let kill_probability = problem.kill_probability();
        let mut last_improvement = 0usize;

        for iter in 0..iterations {
            let w = w_start - (w_start - W_LOW) * iter as f64 / iterations as f64;

            for i in 0..self.swarm.particles.len() {
                // Field borrows are split here so the particle can read the
                // live global-best cell while it moves.
                self.swarm.particles[i].advance(
                    problem,
                    &self.swarm.global_best,
                    w,
                    v_max,
                    &mut rng,
                );

                let particle = &mut self.swarm.particles[i];
                particle.reevaluate(problem)?;
                evaluations += 1;

                if particle.fitness < particle.best_fitness {
                    particle.update_personal_best();
                } else if rng.gen::<f64>() < kill_probability {
                    // The kill draw happens only on the non-improving branch.
                    particle.regenerate(problem, &mut rng)?;
                    evaluations += 1;
                }

                if self.swarm.particles[i].best_fitness < self.swarm.global_best_fitness() {
                    let candidate = self.swarm.particles[i].best_position.clone();
                    let adopted = self.swarm.update_global_best(&candidate, problem)?;
                    evaluations += 1;
                    if adopted {
                        last_improvement = iter;
                        self.best_particle = Some(self.swarm.particles[i].clone());
                    }
                }
            }

            self.history.push(self.swarm.global_best_fitness());
            sink.on_iteration(&IterationRecord {
                iteration: iter,
                best_fitness: self.swarm.global_best_fitness(),
                inertia_weight: w,
            });
        }

        let report = RunReport {
            best_position: self.swarm.global_best().to_vec(),
            best_fitness: self.swarm.global_best_fitness(),
            last_improvement,
            iterations,
            evaluations,
            elapsed: started.elapsed(),
            history: self.history.clone(),
        };
        sink.on_complete(&report);
        Ok(report)
    }
}

#[cfg(test)]
#[path = "pso_tests.rs"]
mod tests;
