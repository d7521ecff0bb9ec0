//! Present value and accumulation math

mod annuity;
mod discount;

pub use annuity::{annuity_factor, MAX_ANNUITY_AGE, SURVIVAL_CUTOFF};
pub use discount::{compound_factor, discount_to_year, fv_ordinary_annuity, level_payment_for_fv};
