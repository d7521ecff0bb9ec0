//! Pension Adequacy - retirement savings adequacy engine
//!
//! This library provides:
//! - Mortality table loading with an atomic synthetic fallback
//! - Life annuity present value on an age-indexed mortality basis
//! - Deterministic multi-year savings projection with gap and remediation
//! - Cohort batch loading for block runs

pub mod plan;
pub mod assumptions;
pub mod valuation;
pub mod projection;
pub mod scenario;
pub mod format;

// Re-export commonly used types
pub use plan::{Gender, PlanInputs};
pub use assumptions::{MortalityBasis, MortalityTable, TableSource};
pub use projection::{ProjectionEngine, ProjectionError, ProjectionResult};
pub use scenario::ScenarioRunner;
