//! Enjambre: particle swarm optimization for bounded black-box minimization.
//!
//! A swarm of candidate solutions moves through an axis-aligned box, each
//! particle steered by its own best point and by the best point the whole
//! swarm has seen. Stalled particles are killed and re-randomized with a
//! configurable probability, which keeps late-stage swarms from collapsing
//! onto one basin.
//!
//! # Quick Start
//!
//! ```
//! use enjambre::prelude::*;
//!
//! // Minimize the 2-D sphere function over [-5, 5]².
//! let problem = FnProblem::new(2, -5.0, 5.0, |x: &[f64]| {
//!     x.iter().map(|xi| xi * xi).sum()
//! })
//! .with_iterations(150)
//! .with_kill_probability(0.01);
//!
//! let mut pso = ParticleSwarm::new().with_seed(42);
//! let report = pso.run(25, &problem, &mut NullSink).unwrap();
//!
//! assert!(report.best_fitness < 1e-3);
//! assert!(report.best_position.iter().all(|x| x.abs() < 0.5));
//! ```
//!
//! # Modules
//!
//! - [`pso`]: the optimizer and its run loop
//! - [`problem`]: the objective seam ([`Problem`] trait, [`FnProblem`] adapter)
//! - [`particle`] / [`swarm`]: swarm state and the global-best cell
//! - [`report`]: progress records, the final report, and rendering sinks
//! - [`benchmarks`]: classic test objectives (sphere, rastrigin, ...)
//! - [`error`]: error type and `Result` alias

pub mod benchmarks;
pub mod error;
pub mod particle;
pub mod prelude;
pub mod problem;
pub mod pso;
pub mod report;
pub mod swarm;

pub use error::{EnjambreError, Result};
pub use particle::Particle;
pub use problem::{FnProblem, Problem};
pub use pso::ParticleSwarm;
pub use report::{ConsoleReporter, IterationRecord, NullSink, ProgressSink, RunReport};
pub use swarm::Swarm;
