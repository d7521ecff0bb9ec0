//! Core projection engine: goal sizing, accumulation, gap, remediation

use crate::assumptions::MortalityBasis;
use crate::plan::PlanInputs;
use crate::valuation::{annuity_factor, compound_factor, level_payment_for_fv};
use super::result::{AccumulationRow, ProjectionError, ProjectionResult};

/// Annual real discount rate for the annuity valuation
///
/// A safe-withdrawal basis, deliberately decoupled from the user's
/// investment-return assumption: the nest egg is sized as if it were parked
/// conservatively from retirement onwards.
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Main projection engine
///
/// Owns the mortality basis; every call is pure over its inputs, so one
/// engine serves any number of independent requests.
pub struct ProjectionEngine {
    basis: MortalityBasis,
}

impl ProjectionEngine {
    /// Create a new engine over a loaded mortality basis
    pub fn new(basis: MortalityBasis) -> Self {
        Self { basis }
    }

    /// The mortality basis this engine values against
    pub fn basis(&self) -> &MortalityBasis {
        &self.basis
    }

    /// Run the full adequacy projection for one plan
    ///
    /// Fails only when the plan holder is already at or past retirement
    /// age; every other input combination produces a result.
    pub fn project(&self, plan: &PlanInputs) -> Result<ProjectionResult, ProjectionError> {
        let years_to_go = plan.years_to_go();
        if years_to_go <= 0 {
            return Err(ProjectionError::AlreadyRetired);
        }
        let years_to_go = years_to_go as u32;

        // The goal: restate the target income in retirement-date money,
        // then price a lifetime of it with the annuity factor.
        let inflation_factor = compound_factor(plan.inflation, years_to_go);
        let future_annual_income = plan.target_monthly_income * 12.0 * inflation_factor;

        let factor = annuity_factor(
            plan.retirement_age,
            SAFE_WITHDRAWAL_RATE,
            self.basis.table(plan.gender),
        );
        let nest_egg_needed = future_annual_income * factor;

        // The reality: accumulate contributions year by year. Order matters:
        // the contribution is credited before that year's growth (new money
        // earns the year's return), and the salary raise lands after the
        // contribution is drawn (contributions use the current salary).
        let contribution_rate = plan.total_contribution_rate();
        let mut balance = 0.0;
        let mut salary = plan.annual_salary;
        let mut rows = Vec::with_capacity(years_to_go as usize);

        for year in 1..=years_to_go {
            let contribution = salary * contribution_rate;
            balance += contribution;
            balance *= 1.0 + plan.investment_return;

            rows.push(AccumulationRow {
                year,
                attained_age: plan.current_age + (year - 1) as u8,
                salary,
                contribution,
                eoy_balance: balance,
            });

            salary *= 1.0 + plan.salary_growth;
        }

        // The gap, and the level extra contribution that would close it.
        let shortfall = nest_egg_needed - balance;
        let extra_monthly_needed = if shortfall > 0.0 {
            level_payment_for_fv(shortfall, plan.investment_return, years_to_go) / 12.0
        } else {
            0.0
        };

        Ok(ProjectionResult {
            nest_egg_needed,
            projected_balance: balance,
            shortfall,
            extra_monthly_needed,
            future_monthly_target: future_annual_income / 12.0,
            years_to_go,
            annuity_factor: factor,
            rows,
        })
    }
}
