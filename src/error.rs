//! Error types for enjambre operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for enjambre operations.
///
/// Covers rejected configurations and objective functions that produce
/// values the optimizer cannot rank.
///
/// # Examples
///
/// ```
/// use enjambre::error::EnjambreError;
///
/// let err = EnjambreError::InvalidHyperparameter {
///     param: "kill_probability".to_string(),
///     value: "1.5".to_string(),
///     constraint: "within [0, 1]".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid hyperparameter"));
/// ```
#[derive(Debug)]
pub enum EnjambreError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The objective returned NaN or an infinite value.
    ///
    /// Always fatal: the run aborts before the value can reach a
    /// personal- or global-best cell.
    NonFiniteObjective {
        /// The offending objective value
        value: f64,
        /// The evaluated point that produced it
        position: Vec<f64>,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for EnjambreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnjambreError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            EnjambreError::NonFiniteObjective { value, position } => {
                write!(
                    f,
                    "Non-finite objective: f = {value} at {position:?}, cannot rank candidates"
                )
            }
            EnjambreError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EnjambreError {}

impl From<&str> for EnjambreError {
    fn from(msg: &str) -> Self {
        EnjambreError::Other(msg.to_string())
    }
}

impl From<String> for EnjambreError {
    fn from(msg: String) -> Self {
        EnjambreError::Other(msg)
    }
}

impl EnjambreError {
    /// Create an invalid hyperparameter error with descriptive context.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: &str, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create a non-finite objective error for the given evaluation point.
    #[must_use]
    pub fn non_finite_objective(value: f64, position: &[f64]) -> Self {
        Self::NonFiniteObjective {
            value,
            position: position.to_vec(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for EnjambreError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<EnjambreError> for &str {
    fn eq(&self, other: &EnjambreError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EnjambreError>;
