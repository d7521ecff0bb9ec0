//! Adequacy projection: engine and result types

mod engine;
mod result;

pub use engine::{ProjectionEngine, SAFE_WITHDRAWAL_RATE};
pub use result::{AccumulationRow, ProjectionError, ProjectionResult};
