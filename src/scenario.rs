//! Scenario runner for repeated and batch projections
//!
//! Loads the mortality basis once, then serves any number of projections
//! without re-reading the CSV sources. The caller owns the runner's
//! lifetime; there is no implicit process-wide cache.

use crate::assumptions::{MortalityBasis, TableSource};
use crate::plan::PlanInputs;
use crate::projection::{ProjectionEngine, ProjectionError, ProjectionResult};
use std::path::Path;

/// Pre-loaded runner for repeated projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::load_or_synthetic(Path::new("data/mortality"));
/// for plan in plans {
///     let result = runner.run(&plan)?;
/// }
/// ```
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner over the synthetic mortality basis
    pub fn new() -> Self {
        Self::with_basis(MortalityBasis::synthetic())
    }

    /// Runner over CSV tables from `dir`, with the atomic synthetic
    /// fallback on any load failure
    pub fn load_or_synthetic(dir: &Path) -> Self {
        Self::with_basis(MortalityBasis::load_or_synthetic(dir))
    }

    /// Runner over tables from the default `data/mortality` directory
    pub fn load_default() -> Self {
        Self::with_basis(MortalityBasis::load_default())
    }

    /// Runner over a pre-built basis
    pub fn with_basis(basis: MortalityBasis) -> Self {
        Self {
            engine: ProjectionEngine::new(basis),
        }
    }

    /// Run one projection
    pub fn run(&self, plan: &PlanInputs) -> Result<ProjectionResult, ProjectionError> {
        self.engine.project(plan)
    }

    /// Run projections for a batch of plans
    pub fn run_batch(&self, plans: &[PlanInputs]) -> Vec<Result<ProjectionResult, ProjectionError>> {
        plans.iter().map(|plan| self.engine.project(plan)).collect()
    }

    /// The mortality basis behind this runner
    pub fn basis(&self) -> &MortalityBasis {
        self.engine.basis()
    }

    /// Source descriptor of the loaded tables
    pub fn source(&self) -> &TableSource {
        self.engine.basis().source()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Gender;

    fn test_plan(current_age: u8) -> PlanInputs {
        PlanInputs {
            gender: Gender::Female,
            current_age,
            retirement_age: 60,
            annual_salary: 120_000_000.0,
            salary_growth: 0.02,
            investment_return: 0.06,
            inflation: 0.03,
            employer_rate: 0.05,
            personal_rate: 0.08,
            target_monthly_income: 5_000_000.0,
        }
    }

    #[test]
    fn test_run_batch_mixes_outcomes() {
        let runner = ScenarioRunner::new();
        let plans = [test_plan(40), test_plan(60), test_plan(25)];

        let results = runner.run_batch(&plans);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ProjectionError::AlreadyRetired));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_runner_reuses_one_basis() {
        let runner = ScenarioRunner::new();

        let a = runner.run(&test_plan(40)).unwrap();
        let b = runner.run(&test_plan(40)).unwrap();
        assert_eq!(a.annuity_factor.to_bits(), b.annuity_factor.to_bits());
    }

    #[test]
    fn test_missing_dir_runner_reports_synthetic_source() {
        let runner = ScenarioRunner::load_or_synthetic(Path::new("tests/fixtures/no_such_dir"));
        assert!(runner.source().is_synthetic());
    }
}
