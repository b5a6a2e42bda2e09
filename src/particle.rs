//! Single swarm member: position, velocity, and personal-best memory.
//!
//! A particle is created once and keeps its identity for a whole run.
//! [`Particle::regenerate`] is the only way its state is randomized, both
//! at swarm construction and when a stalled particle is killed mid-run, so
//! fresh and respawned particles are drawn from the same distribution.

use rand::prelude::*;

use crate::error::Result;
use crate::problem::{checked_evaluate, Problem};

/// Cognitive coefficient: pull toward the particle's own best point.
pub const PHI_P: f64 = 1.0;

/// Social coefficient: pull toward the swarm-wide best point.
pub const PHI_G: f64 = 1.0;

/// One member of the swarm.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current coordinates, always within the problem bounds
    pub position: Vec<f64>,
    /// Current velocity, clamped per dimension after every update
    pub velocity: Vec<f64>,
    /// Best coordinates this particle has visited
    pub best_position: Vec<f64>,
    /// Objective value at `position`
    pub fitness: f64,
    /// Objective value at `best_position`, never stale
    pub best_fitness: f64,
}

impl Particle {
    /// Create a fresh random particle for `problem`.
    pub(crate) fn spawn<P: Problem>(problem: &P, rng: &mut StdRng) -> Result<Self> {
        let dimensions = problem.dimensions();
        let mut particle = Self {
            position: vec![0.0; dimensions],
            velocity: vec![0.0; dimensions],
            best_position: vec![0.0; dimensions],
            fitness: f64::INFINITY,
            best_fitness: f64::INFINITY,
        };
        particle.regenerate(problem, rng)?;
        Ok(particle)
    }

    /// Overwrite all state with a fresh random draw.
    ///
    /// Positions are uniform over the bounds; velocities uniform over
    /// `[-range, range]` where `range` is the width of the box. Position
    /// and personal best coincide afterwards, so a single evaluation
    /// covers both fitness fields.
    pub(crate) fn regenerate<P: Problem>(&mut self, problem: &P, rng: &mut StdRng) -> Result<()> {
        let lower = problem.bound_lower();
        let upper = problem.bound_upper();
        let range = (upper - lower).abs();

        for d in 0..self.position.len() {
            self.position[d] = rng.gen_range(lower..=upper);
            self.velocity[d] = rng.gen_range(-range..=range);
        }
        self.best_position.copy_from_slice(&self.position);

        let value = checked_evaluate(problem, &self.position)?;
        self.fitness = value;
        self.best_fitness = value;
        Ok(())
    }

    /// One velocity/position step toward the two attractors.
    ///
    /// Per dimension: scale the old velocity by `inertia`, add a randomly
    /// weighted pull toward the personal best and another toward
    /// `global_best`, clamp the velocity to `±v_max`, move, clamp the
    /// position back into the bounds. Does not evaluate.
    pub(crate) fn advance<P: Problem>(
        &mut self,
        problem: &P,
        global_best: &[f64],
        inertia: f64,
        v_max: f64,
        rng: &mut StdRng,
    ) {
        let lower = problem.bound_lower();
        let upper = problem.bound_upper();

        for d in 0..self.position.len() {
            let rp = rng.gen::<f64>();
            let rg = rng.gen::<f64>();
            let velocity = inertia * self.velocity[d]
                + PHI_P * rp * (self.best_position[d] - self.position[d])
                + PHI_G * rg * (global_best[d] - self.position[d]);
            self.velocity[d] = velocity.clamp(-v_max, v_max);
            self.position[d] = (self.position[d] + self.velocity[d]).clamp(lower, upper);
        }
    }

    /// Refresh `fitness` for the current position.
    pub(crate) fn reevaluate<P: Problem>(&mut self, problem: &P) -> Result<()> {
        self.fitness = checked_evaluate(problem, &self.position)?;
        Ok(())
    }

    /// Promote the current position to personal best.
    ///
    /// The caller has already established `fitness < best_fitness`.
    pub(crate) fn update_personal_best(&mut self) {
        self.best_position.copy_from_slice(&self.position);
        self.best_fitness = self.fitness;
    }
}
