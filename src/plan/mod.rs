//! Plan inputs and cohort loading

mod data;
pub mod loader;

pub use data::{Gender, PlanInputs};
pub use loader::{load_cohort, load_cohort_from_reader, CohortPlan};
