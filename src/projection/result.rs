//! Projection output structures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One year of the accumulation path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulationRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Age during the contribution year
    pub attained_age: u8,

    /// Salary the year's contribution is drawn from
    pub salary: f64,

    /// Combined employer + personal contribution for the year
    pub contribution: f64,

    /// Balance at the end of the year, after investment growth
    pub eoy_balance: f64,
}

/// Complete adequacy result for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Fund required at retirement to sustain the target income for life
    pub nest_egg_needed: f64,

    /// Fund projected at retirement under the current contribution plan
    pub projected_balance: f64,

    /// `nest_egg_needed - projected_balance`; negative means surplus
    pub shortfall: f64,

    /// Extra level monthly contribution closing a positive shortfall
    pub extra_monthly_needed: f64,

    /// Monthly income target restated in retirement-date purchasing power
    pub future_monthly_target: f64,

    /// Whole years between now and retirement
    pub years_to_go: u32,

    /// Life annuity factor the nest egg was sized with
    pub annuity_factor: f64,

    /// Year-by-year accumulation path
    pub rows: Vec<AccumulationRow>,
}

impl ProjectionResult {
    /// True when the projected fund covers the nest egg
    pub fn is_funded(&self) -> bool {
        self.shortfall <= 0.0
    }

    /// Projected excess over the nest egg; zero when underfunded
    pub fn surplus(&self) -> f64 {
        (-self.shortfall).max(0.0)
    }
}

/// The only user-visible failure of the projection core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// Retirement age does not exceed current age
    #[error("Already Retired")]
    AlreadyRetired,
}
