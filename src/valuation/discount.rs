//! Discount and level-annuity accumulation helpers

/// Discount factor to year `t` at an annual rate: `1 / (1 + r)^t`
pub fn discount_to_year(annual_rate: f64, years: u32) -> f64 {
    1.0 / (1.0 + annual_rate).powi(years as i32)
}

/// Compound growth factor over `years`: `(1 + r)^years`
pub fn compound_factor(annual_rate: f64, years: u32) -> f64 {
    (1.0 + annual_rate).powi(years as i32)
}

/// Future value of an ordinary level annuity: `n` end-of-year payments of
/// `payment`, each compounding at `annual_rate` until year `n`
pub fn fv_ordinary_annuity(payment: f64, annual_rate: f64, years: u32) -> f64 {
    let accumulation = compound_factor(annual_rate, years) - 1.0;
    if accumulation == 0.0 || !accumulation.is_finite() {
        return payment * years as f64;
    }
    payment * accumulation / annual_rate
}

/// Level annual payment whose ordinary-annuity future value equals `target`
///
/// At a zero rate the closed form divides by zero; the payment degrades to
/// the linear split `target / years`. The same branch covers pathological
/// rates where `(1+r)^n - 1` is zero or non-finite.
pub fn level_payment_for_fv(target: f64, annual_rate: f64, years: u32) -> f64 {
    if years == 0 {
        return 0.0;
    }
    let accumulation = compound_factor(annual_rate, years) - 1.0;
    if accumulation == 0.0 || !accumulation.is_finite() {
        return target / years as f64;
    }
    target * annual_rate / accumulation
}
