//! Plan input structures for a single adequacy valuation

use serde::{Deserialize, Serialize};

/// Sex category for mortality table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// The scalar parameters of one retirement adequacy request
///
/// All rates are fractional (0.07 = 7%). Rates may be zero or negative
/// (deflation scenarios) and are not bounded above by the model; any UI
/// range limits are a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Sex category for mortality table selection
    pub gender: Gender,

    /// Current age in whole years
    pub current_age: u8,

    /// Target retirement age in whole years
    /// Must exceed `current_age` for a valid projection
    pub retirement_age: u8,

    /// Current gross annual salary
    pub annual_salary: f64,

    /// Expected annual salary growth rate
    pub salary_growth: f64,

    /// Expected annual investment return on the accumulating fund
    pub investment_return: f64,

    /// Expected annual inflation rate
    pub inflation: f64,

    /// Employer contribution rate, as a fraction of salary
    pub employer_rate: f64,

    /// Personal contribution rate, as a fraction of salary
    pub personal_rate: f64,

    /// Desired monthly retirement income in today's purchasing power
    pub target_monthly_income: f64,
}

impl PlanInputs {
    /// Whole years between now and retirement; non-positive means the
    /// plan holder is already at or past their retirement age.
    pub fn years_to_go(&self) -> i32 {
        self.retirement_age as i32 - self.current_age as i32
    }

    /// Combined employer + personal contribution rate
    pub fn total_contribution_rate(&self) -> f64 {
        self.employer_rate + self.personal_rate
    }
}
