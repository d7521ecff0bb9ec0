//! Life annuity present value
//!
//! The annuity factor is the "cost of 1 rupiah": how much must sit in the
//! fund at retirement to pay 1 currency unit per year for life, weighting
//! each year's payment by the probability of being alive to collect it.

use super::discount::discount_to_year;
use crate::assumptions::MortalityTable;

/// Hard horizon: no payment is valued at or beyond this age
pub const MAX_ANNUITY_AGE: u8 = 115;

/// Cumulative survival probability below which the remaining tail is
/// dropped. Behavioral cutoff, not just an optimization: it caps the tail
/// contribution and must match across implementations.
pub const SURVIVAL_CUTOFF: f64 = 1e-4;

/// Expected present value of a unit-payment-per-year lifetime annuity
/// starting at `retirement_age`, under `discount_rate` and `table`
///
/// Always finite and non-negative for any table and non-negative rate. A
/// NaN or negative `qx` from a malformed source row is clamped to certain
/// death, which also guarantees termination on tables with gaps.
pub fn annuity_factor(retirement_age: u8, discount_rate: f64, table: &MortalityTable) -> f64 {
    let mut total_pv = 0.0;
    let mut survival = 1.0;

    let mut t: u32 = 0;
    while retirement_age as u32 + t < MAX_ANNUITY_AGE as u32 {
        let current_age = (retirement_age as u32 + t) as u8;

        let v = discount_to_year(discount_rate, t);
        total_pv += survival * v;

        let mut qx = table.annual_qx(current_age);
        if qx.is_nan() || qx < 0.0 {
            qx = 1.0;
        }
        survival *= 1.0 - qx;

        if survival < SURVIVAL_CUTOFF {
            break;
        }
        t += 1;
    }

    total_pv
}
