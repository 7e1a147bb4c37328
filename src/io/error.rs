//! Error types for labyrinth construction and generation

use std::fmt;

/// Main error type for all labyrinth operations
#[derive(Debug)]
pub enum LabyrinthError {
    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A generator was configured without any element kind
    EmptyRegistry,

    /// A point handed to the generator lies outside its field
    PointOutsideField {
        /// Debug rendering of the offending point
        point: String,
        /// Operation that received the point
        operation: &'static str,
    },

    /// A node ran out of options while contradictions are configured to fail
    Contradiction {
        /// Debug rendering of the node position
        point: String,
        /// Collapse iteration when this occurred
        iteration: usize,
    },

    /// An operation needed the paths and areas graphs before they were built
    GraphsNotBuilt {
        /// Operation that required the graphs
        operation: &'static str,
    },

    /// A repair strategy left the labyrinth in an unacceptable state
    StrategyExhausted {
        /// Name of the strategy
        strategy: &'static str,
        /// Description of what remained unrepaired
        reason: String,
    },
}

impl fmt::Display for LabyrinthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyRegistry => write!(f, "No element kinds registered"),
            Self::PointOutsideField { point, operation } => {
                write!(f, "Point {point} lies outside the field during {operation}")
            }
            Self::Contradiction { point, iteration } => {
                write!(
                    f,
                    "Contradiction at {point} during collapse iteration {iteration}"
                )
            }
            Self::GraphsNotBuilt { operation } => {
                write!(f, "Graphs must be built before {operation}")
            }
            Self::StrategyExhausted { strategy, reason } => {
                write!(f, "Strategy '{strategy}' exhausted: {reason}")
            }
        }
    }
}

impl std::error::Error for LabyrinthError {}

/// Convenience type alias for labyrinth results
pub type Result<T> = std::result::Result<T, LabyrinthError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LabyrinthError {
    LabyrinthError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for a point outside the field
pub fn point_outside(point: &impl fmt::Debug, operation: &'static str) -> LabyrinthError {
    LabyrinthError::PointOutsideField {
        point: format!("{point:?}"),
        operation,
    }
}
