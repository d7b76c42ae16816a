//! Penalty-based fitness evaluation shared by every engine.
//!
//! [`Evaluator::evaluate`] scores a whole population at once: the five
//! penalties and the cost/fitness are per solution, but the fitness ratio
//! and cumulative probability depend on the rest of the population.
//!
//! # Penalties
//!
//! | Component   | Contribution                                              |
//! |-------------|-----------------------------------------------------------|
//! | overload    | `Σ_e max(0, hours assigned to e − e.hours)`               |
//! | skill       | `+1` per task whose assignee lacks the required skill     |
//! | difficulty  | `Σ max(0, task.difficulty − assignee.level)`              |
//! | deadline    | lateness of each employee's tasks run shortest-first      |
//! | unassigned  | `+1` per task holding [`UNASSIGNED`]                      |
//!
//! `cost = weight · Σ penalties`, `fitness = 1 / (cost + epsilon)`.

use crate::error::{check_finite, Error, Result};
use crate::model::Problem;
use crate::solution::{Solution, UNASSIGNED};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores solutions against a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluator {
    /// Multiplier applied to the penalty sum to obtain cost.
    pub weight: f64,
    /// Added to cost before inversion so a zero-cost solution has finite fitness.
    pub epsilon: f64,
    /// Score solutions on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            weight: 0.2,
            epsilon: 1e-8,
            parallel: false,
        }
    }
}

impl Evaluator {
    /// Sets the penalty weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets epsilon.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<()> {
        check_finite("weight", self.weight)?;
        if self.weight < 0.0 {
            return Err(Error::config("weight", "must be non-negative"));
        }
        check_finite("epsilon", self.epsilon)?;
        if self.epsilon <= 0.0 {
            return Err(Error::config("epsilon", "must be positive"));
        }
        Ok(())
    }

    /// Largest attainable fitness, reached by a zero-cost solution.
    pub fn max_fitness(&self) -> f64 {
        1.0 / self.epsilon
    }

    /// Evaluates every solution of `population` in place.
    ///
    /// Each solution is reset, its penalties, cost and fitness are
    /// recomputed, then fitness ratios and cumulative probabilities are
    /// filled in population order. Genes must satisfy
    /// [`Problem::check_genes`]; out-of-range references are ignored by
    /// the per-employee penalties, and genes beyond the last task are not
    /// scored.
    pub fn evaluate(&self, problem: &Problem, population: &mut [Solution]) {
        if population.is_empty() {
            return;
        }

        self.score_all(problem, population);
        accumulate(population);
    }

    /// Evaluates a single solution as a one-element population.
    pub fn evaluate_one(&self, problem: &Problem, solution: &mut Solution) {
        self.evaluate(problem, std::slice::from_mut(solution));
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, problem: &Problem, population: &mut [Solution]) {
        if self.parallel {
            population
                .par_iter_mut()
                .for_each(|s| self.score(problem, s));
        } else {
            population.iter_mut().for_each(|s| self.score(problem, s));
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, problem: &Problem, population: &mut [Solution]) {
        population.iter_mut().for_each(|s| self.score(problem, s));
    }

    /// Resets and computes the population-independent fields.
    fn score(&self, problem: &Problem, solution: &mut Solution) {
        solution.reset();

        let genes = &solution.genes[..solution.genes.len().min(problem.num_tasks())];
        solution.penalties.overload = overload_penalty(problem, genes);
        solution.penalties.skill = skill_penalty(problem, genes);
        solution.penalties.unassigned = unassigned_penalty(genes);
        solution.penalties.difficulty = difficulty_penalty(problem, genes);
        solution.penalties.deadline = deadline_penalty(problem, genes);

        solution.cost = self.weight * solution.penalties.total();
        solution.fitness = 1.0 / (solution.cost + self.epsilon);
    }
}

/// Recomputes fitness ratios and cumulative probabilities in the current
/// population order from the already computed fitness values.
///
/// A non-positive or non-finite fitness total is floored so the division
/// is always defined.
pub fn accumulate(population: &mut [Solution]) {
    let total: f64 = population.iter().map(|s| s.fitness).sum();
    let total = if total.is_finite() && total > 0.0 {
        total
    } else {
        f64::MIN_POSITIVE
    };

    let mut cumulative = 0.0;
    for solution in population.iter_mut() {
        solution.fitness_ratio = solution.fitness / total;
        cumulative += solution.fitness_ratio;
        solution.cumulative_probability = cumulative;
    }
}

/// Groups task indices by assigned employee (0-based bucket per employee).
///
/// Unassigned and out-of-range genes are dropped, as are genes past the
/// last task.
fn buckets(problem: &Problem, genes: &[usize]) -> Vec<Vec<usize>> {
    let mut buckets = vec![Vec::new(); problem.num_employees()];
    for (task, &gene) in genes.iter().take(problem.num_tasks()).enumerate() {
        if let Some(bucket) = gene.checked_sub(1).and_then(|e| buckets.get_mut(e)) {
            bucket.push(task);
        }
    }
    buckets
}

/// Hours assigned beyond capacity, summed over employees.
pub fn overload_penalty(problem: &Problem, genes: &[usize]) -> f64 {
    let mut assigned = vec![0.0; problem.num_employees()];
    for (&gene, task) in genes.iter().zip(problem.tasks()) {
        if let Some(hours) = gene.checked_sub(1).and_then(|e| assigned.get_mut(e)) {
            *hours += task.time;
        }
    }

    problem
        .employees()
        .iter()
        .zip(&assigned)
        .map(|(employee, &hours)| (hours - employee.hours).max(0.0))
        .sum()
}

/// One point per assigned task whose assignee lacks the required skill.
pub fn skill_penalty(problem: &Problem, genes: &[usize]) -> f64 {
    genes
        .iter()
        .zip(problem.tasks())
        .filter_map(|(&gene, task)| problem.employee(gene).map(|e| (e, task)))
        .filter(|(employee, task)| !employee.has_skill(&task.skill))
        .count() as f64
}

/// Difficulty shortfall summed over assigned tasks.
pub fn difficulty_penalty(problem: &Problem, genes: &[usize]) -> f64 {
    genes
        .iter()
        .zip(problem.tasks())
        .filter_map(|(&gene, task)| problem.employee(gene).map(|e| (e, task)))
        .map(|(employee, task)| (task.difficulty - employee.level).max(0.0))
        .sum()
}

/// Total lateness when each employee works through their tasks in
/// ascending processing-time order.
///
/// Ties keep task order. The queue is deliberately ordered by time, not by
/// deadline.
pub fn deadline_penalty(problem: &Problem, genes: &[usize]) -> f64 {
    let tasks = problem.tasks();
    let mut violation = 0.0;

    for mut queue in buckets(problem, genes) {
        queue.sort_by(|&a, &b| tasks[a].time.total_cmp(&tasks[b].time));

        let mut finish = 0.0;
        for task in queue {
            finish += tasks[task].time;
            let late = finish - tasks[task].deadline;
            if late > 0.0 {
                violation += late;
            }
        }
    }

    if violation > 0.0 {
        violation
    } else {
        0.0
    }
}

/// One point per unassigned gene.
pub fn unassigned_penalty(genes: &[usize]) -> f64 {
    genes.iter().filter(|&&g| g == UNASSIGNED).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, Task};

    /// Three tasks, two employees; employee 1 can do everything.
    fn small_problem() -> Problem {
        Problem::new(
            vec![
                Task::new("t1", 2.0, 1.0, 5.0, "A"),
                Task::new("t2", 3.0, 2.0, 5.0, "B"),
                Task::new("t3", 1.0, 1.0, 2.0, "A"),
            ],
            vec![
                Employee::new("e1", 10.0, 3.0, ["A", "B"]),
                Employee::new("e2", 1.0, 1.0, ["A"]),
            ],
        )
        .expect("valid problem")
    }

    /// Same tasks with generous deadlines, so a feasible assignment exists.
    fn feasible_problem() -> Problem {
        Problem::new(
            vec![
                Task::new("t1", 2.0, 1.0, 10.0, "A"),
                Task::new("t2", 3.0, 2.0, 10.0, "B"),
                Task::new("t3", 1.0, 1.0, 10.0, "A"),
            ],
            vec![
                Employee::new("e1", 10.0, 3.0, ["A", "B"]),
                Employee::new("e2", 1.0, 1.0, ["A"]),
            ],
        )
        .expect("valid problem")
    }

    #[test]
    fn test_all_to_first_employee() {
        let problem = small_problem();
        let mut s = Solution::new(vec![1, 1, 1]);
        Evaluator::default().evaluate_one(&problem, &mut s);

        assert_eq!(s.penalties.overload, 0.0);
        assert_eq!(s.penalties.skill, 0.0);
        assert_eq!(s.penalties.difficulty, 0.0);
        assert_eq!(s.penalties.unassigned, 0.0);
        // Queue by time: t3(1) t1(2) t2(3), finishes 1,3,6 vs deadlines 2,5,5.
        assert_eq!(s.penalties.deadline, 1.0);
        assert!((s.cost - 0.2).abs() < 1e-12);
        assert_eq!(s.total_violations(), 1.0);
    }

    #[test]
    fn test_feasible_has_zero_cost() {
        let problem = feasible_problem();
        let evaluator = Evaluator::default();
        let mut s = Solution::new(vec![1, 1, 1]);
        evaluator.evaluate_one(&problem, &mut s);

        assert_eq!(s.penalties.total(), 0.0);
        assert_eq!(s.cost, 0.0);
        assert_eq!(s.fitness, 1.0 / 1e-8);
        assert_eq!(s.fitness, evaluator.max_fitness());
        assert_eq!(s.fitness_ratio, 1.0);
        assert_eq!(s.cumulative_probability, 1.0);
    }

    #[test]
    fn test_single_unassigned() {
        let problem = feasible_problem();
        let mut s = Solution::new(vec![1, UNASSIGNED, 1]);
        Evaluator::default().evaluate_one(&problem, &mut s);

        assert_eq!(s.penalties.unassigned, 1.0);
        assert_eq!(s.penalties.skill, 0.0);
        assert_eq!(s.penalties.difficulty, 0.0);
        assert_eq!(s.penalties.overload, 0.0);
        assert_eq!(s.penalties.deadline, 0.0);
        assert_eq!(s.total_violations(), 1.0);
    }

    #[test]
    fn test_overload_penalty() {
        let problem = small_problem();
        // e2 gets t1 (2h) + t3 (1h) against 1h capacity.
        assert_eq!(overload_penalty(&problem, &[2, 1, 2]), 2.0);
        assert_eq!(overload_penalty(&problem, &[1, 1, 1]), 0.0);
    }

    #[test]
    fn test_skill_penalty() {
        let problem = small_problem();
        // e2 lacks B.
        assert_eq!(skill_penalty(&problem, &[1, 2, 1]), 1.0);
        assert_eq!(skill_penalty(&problem, &[0, 0, 0]), 0.0);
    }

    #[test]
    fn test_difficulty_penalty() {
        let problem = small_problem();
        // t2 difficulty 2 on a level-1 employee.
        assert_eq!(difficulty_penalty(&problem, &[1, 2, 2]), 1.0);
        assert_eq!(difficulty_penalty(&problem, &[1, 1, 1]), 0.0);
    }

    #[test]
    fn test_deadline_sorts_by_time_not_deadline() {
        let problem = Problem::new(
            vec![
                Task::new("long", 4.0, 0.0, 4.0, "A"),
                Task::new("short", 1.0, 0.0, 10.0, "A"),
            ],
            vec![Employee::new("e", 100.0, 0.0, ["A"])],
        )
        .expect("valid problem");
        // Shortest first: short ends at 1, long ends at 5 > 4.
        // Earliest-deadline-first would have no lateness.
        assert_eq!(deadline_penalty(&problem, &[1, 1]), 1.0);
    }

    #[test]
    fn test_deadline_accumulates_across_employees() {
        let problem = Problem::new(
            vec![
                Task::new("a", 3.0, 0.0, 1.0, "A"),
                Task::new("b", 5.0, 0.0, 2.0, "A"),
            ],
            vec![
                Employee::new("e1", 100.0, 0.0, ["A"]),
                Employee::new("e2", 100.0, 0.0, ["A"]),
            ],
        )
        .expect("valid problem");
        assert_eq!(deadline_penalty(&problem, &[1, 2]), 2.0 + 3.0);
    }

    #[test]
    fn test_deadline_supports_many_employees() {
        let employees: Vec<Employee> = (0..12)
            .map(|i| Employee::new(format!("e{i}"), 10.0, 1.0, ["A"]))
            .collect();
        let problem = Problem::new(vec![Task::new("t", 3.0, 0.0, 1.0, "A")], employees)
            .expect("valid problem");
        assert_eq!(deadline_penalty(&problem, &[12]), 2.0);
    }

    #[test]
    fn test_unassigned_is_exempt_from_other_penalties() {
        let problem = small_problem();
        let genes = [UNASSIGNED; 3];
        assert_eq!(overload_penalty(&problem, &genes), 0.0);
        assert_eq!(skill_penalty(&problem, &genes), 0.0);
        assert_eq!(difficulty_penalty(&problem, &genes), 0.0);
        assert_eq!(deadline_penalty(&problem, &genes), 0.0);
        assert_eq!(unassigned_penalty(&genes), 3.0);
    }

    #[test]
    fn test_ratios_and_cumulative() {
        let problem = small_problem();
        let mut pop: Vec<Solution> = [[1, 1, 1], [2, 2, 2], [1, 2, 0], [2, 1, 1]]
            .into_iter()
            .map(|g| Solution::new(g.to_vec()))
            .collect();
        Evaluator::default().evaluate(&problem, &mut pop);

        let sum: f64 = pop.iter().map(|s| s.fitness_ratio).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((pop[0].cumulative_probability - pop[0].fitness_ratio).abs() < 1e-15);
        for w in pop.windows(2) {
            assert!(w[1].cumulative_probability >= w[0].cumulative_probability);
        }
        let last = pop.last().map(|s| s.cumulative_probability).unwrap_or(0.0);
        assert!((last - 1.0).abs() < 1e-9);
        for s in &pop {
            assert!(s.cost >= 0.0);
            assert!(s.fitness > 0.0);
        }
    }

    #[test]
    fn test_accumulate_follows_current_order() {
        let problem = small_problem();
        let mut pop: Vec<Solution> = [[2, 2, 2], [1, 1, 1]]
            .into_iter()
            .map(|g| Solution::new(g.to_vec()))
            .collect();
        Evaluator::default().evaluate(&problem, &mut pop);
        pop.reverse();
        accumulate(&mut pop);
        assert!((pop[0].cumulative_probability - pop[0].fitness_ratio).abs() < 1e-15);
        assert!((pop[1].cumulative_probability - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_accumulate_guards_zero_total() {
        let mut pop = vec![Solution::new(vec![1]), Solution::new(vec![1])];
        accumulate(&mut pop);
        assert!(pop.iter().all(|s| s.fitness_ratio == 0.0));
        assert!(pop.iter().all(|s| s.cumulative_probability.is_finite()));
    }

    #[test]
    fn test_evaluation_resets_stale_fields() {
        let problem = small_problem();
        let mut s = Solution::new(vec![1, 1, 1]);
        s.penalties.skill = 42.0;
        s.cost = 99.0;
        Evaluator::default().evaluate_one(&problem, &mut s);
        assert_eq!(s.penalties.skill, 0.0);
        assert!((s.cost - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_custom_weight() {
        let problem = small_problem();
        let mut s = Solution::new(vec![1, 1, 1]);
        Evaluator::default()
            .with_weight(1.0)
            .evaluate_one(&problem, &mut s);
        assert_eq!(s.cost, 1.0);
    }

    #[test]
    fn test_empty_population_is_noop() {
        let problem = small_problem();
        let mut pop: Vec<Solution> = Vec::new();
        Evaluator::default().evaluate(&problem, &mut pop);
        assert!(pop.is_empty());
    }

    #[test]
    fn test_extra_genes_are_ignored() {
        let problem = Problem::new(
            vec![Task::new("t", 2.0, 1.0, 5.0, "A")],
            vec![Employee::new("e", 1.0, 1.0, ["A"])],
        )
        .expect("valid problem");

        assert_eq!(overload_penalty(&problem, &[1, 1, 1]), 1.0);
        assert_eq!(skill_penalty(&problem, &[1, 1]), 0.0);
        assert_eq!(difficulty_penalty(&problem, &[1, 1]), 0.0);
        assert_eq!(deadline_penalty(&problem, &[1, 1]), 0.0);

        let mut s = Solution::new(vec![1, 1, 0]);
        Evaluator::default().evaluate_one(&problem, &mut s);
        assert_eq!(s.penalties.overload, 1.0);
        assert_eq!(s.penalties.unassigned, 0.0);
        assert_eq!(s.genes, vec![1, 1, 0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let problem = small_problem();
        let mut rng = crate::random::create_rng(7);
        let population: Vec<Solution> = (0..50)
            .map(|_| {
                let mut s = Solution::random(3, 2, &mut rng);
                s.genes[0] = rand::Rng::random_range(&mut rng, 0..=2);
                s
            })
            .collect();

        let mut sequential = population.clone();
        Evaluator::default().evaluate(&problem, &mut sequential);
        let mut parallel = population;
        Evaluator::default()
            .with_parallel(true)
            .evaluate(&problem, &mut parallel);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_validate() {
        assert!(Evaluator::default().validate().is_ok());
        assert!(Evaluator::default().with_epsilon(0.0).validate().is_err());
        assert!(Evaluator::default().with_weight(-1.0).validate().is_err());
        assert!(Evaluator::default()
            .with_weight(f64::INFINITY)
            .validate()
            .is_err());
    }
}
