//! Domain model: tasks, employees, and the problem that pairs them.
//!
//! A [`Problem`] is built once per run and only ever borrowed by the
//! evaluator and the engines. Employees are referenced by 1-based index
//! (see [`crate::solution::UNASSIGNED`]).

use std::collections::HashSet;

use crate::error::{Error, Result};

/// A unit of work to be assigned to exactly one employee.
///
/// `time` and `deadline` share one unit (hours in the typical dataset).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Task identifier.
    pub id: String,
    /// Processing time.
    pub time: f64,
    /// Required competency; compared against [`Employee::level`].
    pub difficulty: f64,
    /// Latest acceptable finish time.
    pub deadline: f64,
    /// Skill category the assignee must possess.
    pub skill: String,
}

impl Task {
    /// Creates a task.
    pub fn new(
        id: impl Into<String>,
        time: f64,
        difficulty: f64,
        deadline: f64,
        skill: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time,
            difficulty,
            deadline,
            skill: skill.into(),
        }
    }
}

/// A worker with limited hours, a competency level and a skill set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    /// Employee identifier.
    pub id: String,
    /// Available hours (capacity).
    pub hours: f64,
    /// Competency level.
    pub level: f64,
    /// Skill categories this employee can work in.
    pub skills: HashSet<String>,
}

impl Employee {
    /// Creates an employee.
    pub fn new<I, S>(id: impl Into<String>, hours: f64, level: f64, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            hours,
            level,
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this employee possesses `skill`.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }
}

/// The immutable input of one optimization run.
///
/// Deserialization goes through [`Problem::new`], so the same checks apply
/// to data loaded from files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProblemData")
)]
pub struct Problem {
    tasks: Vec<Task>,
    employees: Vec<Employee>,
}

/// Unchecked wire form of a [`Problem`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ProblemData {
    tasks: Vec<Task>,
    employees: Vec<Employee>,
}

#[cfg(feature = "serde")]
impl TryFrom<ProblemData> for Problem {
    type Error = Error;

    fn try_from(data: ProblemData) -> Result<Self> {
        Problem::new(data.tasks, data.employees)
    }
}

impl Problem {
    /// Builds a problem after checking every record.
    ///
    /// Both lists must be non-empty. Times, hours and deadlines must be
    /// finite and positive; difficulty and level must be finite. A task no
    /// employee can satisfy is accepted: it just costs penalty.
    pub fn new(tasks: Vec<Task>, employees: Vec<Employee>) -> Result<Self> {
        if tasks.is_empty() {
            return Err(Error::NoTasks);
        }
        if employees.is_empty() {
            return Err(Error::NoEmployees);
        }

        for (index, task) in tasks.iter().enumerate() {
            let invalid = |reason: &str| Error::InvalidTask {
                index,
                id: task.id.clone(),
                reason: reason.to_string(),
            };
            if !(task.time.is_finite() && task.time > 0.0) {
                return Err(invalid("time must be finite and positive"));
            }
            if !(task.deadline.is_finite() && task.deadline > 0.0) {
                return Err(invalid("deadline must be finite and positive"));
            }
            if !task.difficulty.is_finite() {
                return Err(invalid("difficulty must be finite"));
            }
        }

        for (index, employee) in employees.iter().enumerate() {
            let invalid = |reason: &str| Error::InvalidEmployee {
                index,
                id: employee.id.clone(),
                reason: reason.to_string(),
            };
            if !(employee.hours.is_finite() && employee.hours > 0.0) {
                return Err(invalid("hours must be finite and positive"));
            }
            if !employee.level.is_finite() {
                return Err(invalid("level must be finite"));
            }
        }

        Ok(Self { tasks, employees })
    }

    /// Tasks in gene order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Employees; gene value `k` refers to `employees()[k - 1]`.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of tasks (solution length).
    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Number of employees (largest valid gene value).
    pub fn num_employees(&self) -> usize {
        self.employees.len()
    }

    /// Looks up an employee by 1-based reference.
    ///
    /// Returns `None` for the unassigned sentinel or an out-of-range value.
    pub fn employee(&self, reference: usize) -> Option<&Employee> {
        reference
            .checked_sub(1)
            .and_then(|idx| self.employees.get(idx))
    }

    /// Checks the solution invariant: one gene per task, each gene either
    /// unassigned or within `[1, num_employees]`.
    pub fn check_genes(&self, genes: &[usize]) -> Result<()> {
        if genes.len() != self.num_tasks() {
            return Err(Error::LengthMismatch {
                expected: self.num_tasks(),
                got: genes.len(),
            });
        }
        let max = self.num_employees();
        match genes.iter().position(|&g| g > max) {
            Some(task) => Err(Error::EmployeeOutOfRange {
                task,
                employee: genes[task],
                max,
            }),
            None => Ok(()),
        }
    }
}
