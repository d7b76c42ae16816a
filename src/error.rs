//! Error type shared by the domain model and the three engines.
//!
//! Only malformed input is an error. An assignment that breaks capacity,
//! skill, difficulty or deadline rules is expressed as penalty, never as
//! an `Err`.

use thiserror::Error;

/// Errors reported before a run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A configuration parameter is outside its valid range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The problem has no tasks.
    #[error("problem has no tasks")]
    NoTasks,

    /// The problem has no employees.
    #[error("problem has no employees")]
    NoEmployees,

    /// A task record carries an unusable value.
    #[error("task {index} ({id}): {reason}")]
    InvalidTask {
        /// Position of the task in the problem.
        index: usize,
        /// Task identifier.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An employee record carries an unusable value.
    #[error("employee {index} ({id}): {reason}")]
    InvalidEmployee {
        /// Position of the employee in the problem.
        index: usize,
        /// Employee identifier.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A solution's length differs from the number of tasks.
    #[error("solution has {got} genes, expected {expected}")]
    LengthMismatch {
        /// Number of tasks in the problem.
        expected: usize,
        /// Number of genes in the solution.
        got: usize,
    },

    /// A gene references an employee outside `[1, num_employees]`.
    #[error("gene {task} references employee {employee}, valid range is 1..={max}")]
    EmployeeOutOfRange {
        /// Task index of the bad gene.
        task: usize,
        /// The referenced employee.
        employee: usize,
        /// Number of employees.
        max: usize,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks that `value` is a probability in `[0, 1]`.
pub(crate) fn check_rate(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::config(field, format!("must be in [0, 1], got {value}")))
    }
}

/// Checks that a count parameter is at least one.
pub(crate) fn check_count(field: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(Error::config(field, "must be at least 1"))
    } else {
        Ok(())
    }
}

/// Checks that `value` is finite.
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::config(field, format!("must be finite, got {value}")))
    }
}
