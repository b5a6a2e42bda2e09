//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use enjambre::prelude::*;
//! ```

pub use crate::error::{EnjambreError, Result};
pub use crate::problem::{FnProblem, Problem};
pub use crate::pso::ParticleSwarm;
pub use crate::report::{ConsoleReporter, IterationRecord, NullSink, ProgressSink, RunReport};
