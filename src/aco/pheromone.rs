//! Pheromone matrix over (task, employee) pairs.

use rand::Rng;

use crate::solution::Solution;

/// Dense `num_tasks × num_employees` table of non-negative weights.
///
/// Rows are tasks (0-based); columns are employees (0-based, i.e. gene
/// value minus one).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    num_tasks: usize,
    num_employees: usize,
    weights: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates a matrix with every cell set to `initial`.
    pub fn new(num_tasks: usize, num_employees: usize, initial: f64) -> Self {
        Self {
            num_tasks,
            num_employees,
            weights: vec![initial; num_tasks * num_employees],
        }
    }

    /// Number of rows.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Number of columns.
    pub fn num_employees(&self) -> usize {
        self.num_employees
    }

    /// Weight of one cell.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn get(&self, task: usize, employee: usize) -> f64 {
        self.weights[self.index(task, employee)]
    }

    /// All weights of one task.
    pub fn row(&self, task: usize) -> &[f64] {
        let start = task * self.num_employees;
        &self.weights[start..start + self.num_employees]
    }

    /// Smallest weight in the matrix.
    pub fn min_weight(&self) -> f64 {
        self.weights.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Multiplies every weight by `1 - rate`.
    ///
    /// Cells are clamped at zero so rounding can never drive them negative.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for w in &mut self.weights {
            *w = (*w * keep).max(0.0);
        }
    }

    /// Adds `amount` to one cell. Negative or non-finite amounts are ignored.
    pub fn deposit(&mut self, task: usize, employee: usize, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            let idx = self.index(task, employee);
            self.weights[idx] += amount;
        }
    }

    /// Lets every ant of an evaluated colony reinforce its (task, employee)
    /// pairs with `q / (1 + (best_fitness - ant.fitness))`.
    ///
    /// An ant matching `best_fitness` deposits exactly `q`. Unassigned genes
    /// deposit nothing.
    pub fn deposit_colony(&mut self, colony: &[Solution], best_fitness: f64, q: f64) {
        for ant in colony {
            let amount = q / (1.0 + (best_fitness - ant.fitness));
            for (task, &gene) in ant.genes.iter().enumerate() {
                if let Some(employee) = gene.checked_sub(1) {
                    self.deposit(task, employee, amount);
                }
            }
        }
    }

    /// Samples an employee for `task` proportionally to the row weights.
    ///
    /// Returns a 1-based gene value. Walks the row accumulating weight and
    /// picks the first employee whose running sum reaches a threshold drawn
    /// in `[0, total)`; the last employee absorbs rounding. A row whose
    /// total is zero or non-finite falls back to a uniform choice.
    pub fn sample<R: Rng>(&self, task: usize, rng: &mut R) -> usize {
        let row = self.row(task);
        let total: f64 = row.iter().sum();

        if !(total.is_finite() && total > 0.0) {
            return rng.random_range(1..=self.num_employees);
        }

        let threshold = rng.random_range(0.0..total);
        pick(row, threshold) + 1
    }

    fn index(&self, task: usize, employee: usize) -> usize {
        assert!(
            task < self.num_tasks && employee < self.num_employees,
            "pheromone cell ({task}, {employee}) out of range"
        );
        task * self.num_employees + employee
    }
}

/// First column whose running weight reaches `threshold`, else the last.
pub(crate) fn pick(row: &[f64], threshold: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &w) in row.iter().enumerate() {
        cumulative += w;
        if cumulative >= threshold {
            return i;
        }
    }
    row.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_uniform_init() {
        let m = PheromoneMatrix::new(3, 4, 1.0);
        assert_eq!(m.num_tasks(), 3);
        assert_eq!(m.num_employees(), 4);
        assert_eq!(m.row(2), &[1.0; 4]);
        assert_eq!(m.min_weight(), 1.0);
    }

    #[test]
    fn test_evaporate_and_deposit() {
        let mut m = PheromoneMatrix::new(2, 2, 1.0);
        m.evaporate(0.25);
        assert!((m.get(0, 0) - 0.75).abs() < 1e-12);
        m.deposit(1, 0, 2.0);
        assert!((m.get(1, 0) - 2.75).abs() < 1e-12);
        m.deposit(1, 1, -5.0);
        assert!((m.get(1, 1) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_full_evaporation_hits_zero() {
        let mut m = PheromoneMatrix::new(2, 3, 4.0);
        m.evaporate(1.0);
        assert_eq!(m.min_weight(), 0.0);
        assert!(m.row(0).iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_deposit_colony_amounts() {
        let mut best = Solution::new(vec![1, 2]);
        best.fitness = 5.0;
        let mut worse = Solution::new(vec![2, 2]);
        worse.fitness = 3.0;

        let mut m = PheromoneMatrix::new(2, 2, 0.0);
        m.deposit_colony(&[best, worse], 5.0, 4.0);

        // Best ant adds exactly q; the worse one adds q / (1 + 2).
        assert_eq!(m.get(0, 0), 4.0);
        assert!((m.get(0, 1) - 4.0 / 3.0).abs() < 1e-12);
        assert!((m.get(1, 1) - (4.0 + 4.0 / 3.0)).abs() < 1e-12);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_deposit_colony_skips_unassigned() {
        let mut ant = Solution::new(vec![0, 1]);
        ant.fitness = 1.0;
        let mut m = PheromoneMatrix::new(2, 2, 0.0);
        m.deposit_colony(&[ant], 1.0, 2.0);
        assert_eq!(m.row(0), &[0.0, 0.0]);
        assert_eq!(m.get(1, 0), 2.0);
    }

    #[test]
    fn test_pick() {
        let row = [1.0, 2.0, 3.0];
        assert_eq!(pick(&row, 0.0), 0);
        assert_eq!(pick(&row, 1.0), 0);
        assert_eq!(pick(&row, 1.5), 1);
        assert_eq!(pick(&row, 3.0), 1);
        assert_eq!(pick(&row, 5.9), 2);
        assert_eq!(pick(&row, 100.0), 2);
    }

    #[test]
    fn test_sample_follows_weights() {
        let mut m = PheromoneMatrix::new(1, 3, 0.0);
        m.deposit(0, 2, 9.0);
        m.deposit(0, 0, 1.0);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        for _ in 0..10000 {
            counts[m.sample(0, &mut rng) - 1] += 1;
        }
        assert_eq!(counts[1], 0, "zero-weight employee was chosen: {counts:?}");
        assert!(counts[2] > 8500, "expected employee 3 to dominate: {counts:?}");
    }

    #[test]
    fn test_sample_zero_row_is_uniform() {
        let m = PheromoneMatrix::new(1, 4, 0.0);
        let mut rng = create_rng(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let e = m.sample(0, &mut rng);
            assert!((1..=4).contains(&e));
            seen[e - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_cell() {
        let m = PheromoneMatrix::new(2, 2, 1.0);
        m.get(2, 0);
    }
}
